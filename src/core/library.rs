use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    // The request carried an input that must be present, e.g. an upload without file name.
    InvalidInput {
        message: String,
    },
    // A file name that cannot be mapped to a location in the file store.
    MalformedName {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn invalid_input(message: &str) -> LibraryError {
        LibraryError::InvalidInput { message: message.to_string() }
    }

    pub fn malformed_name(message: &str) -> LibraryError {
        LibraryError::MalformedName { message: message.to_string() }
    }

    pub fn storage(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                LibraryError::not_found(format!("io {:?}", err).as_str())
            }
            kind => {
                LibraryError::storage(format!("io {:?}", err).as_str(), Some(format!("{:?}", kind)))
            }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidInput { message } => {
                write!(f, "{}", message)
            }
            LibraryError::MalformedName { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Storage { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for catalog and file store operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
