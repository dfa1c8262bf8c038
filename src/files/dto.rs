use serde::{Deserialize, Serialize};

// StoredFileDto is a file listed on the shelf, its content is only read on download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFileDto {
    pub name: String,
    pub size_bytes: u64,
}

impl StoredFileDto {
    pub fn new(name: &str, size_bytes: u64) -> Self {
        Self {
            name: name.to_string(),
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileContentDto {
    pub name: String,
    pub content: Vec<u8>,
}

impl FileContentDto {
    pub fn new(name: &str, content: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content,
        }
    }
}
