use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// ServerMode selects how the router is hosted
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum ServerMode {
    Http,
    Lambda,
}

impl ServerMode {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        match lookup("BOOKSHELF_RUNTIME").map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("lambda") => ServerMode::Lambda,
            Some("http") => ServerMode::Http,
            _ if lookup("AWS_LAMBDA_RUNTIME_API").is_some() => ServerMode::Lambda,
            _ => ServerMode::Http,
        }
    }
}

// Configuration abstracts config options for the bookshelf service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub store: RepositoryStore,
    pub files_dir: PathBuf,
    pub listen_addr: String,
    pub mode: ServerMode,
    pub max_upload_bytes: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            store: RepositoryStore::LocalFs,
            files_dir: PathBuf::from("./uploads"),
            listen_addr: "0.0.0.0:8080".to_string(),
            mode: ServerMode::Http,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    // in-memory configuration used by tests and local experiments
    pub fn memory(branch_id: &str) -> Self {
        Configuration {
            store: RepositoryStore::Memory,
            ..Configuration::new(branch_id)
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let branch = lookup("BOOKSHELF_BRANCH").unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        config.mode = ServerMode::from_lookup(&lookup);

        if let Some(store) = lookup("BOOKSHELF_STORE") {
            match RepositoryStore::parse(store.as_str()) {
                Some(parsed) => config.store = parsed,
                None => warn!("unknown BOOKSHELF_STORE {:?}, using {}", store, config.store),
            }
        }
        if let Some(dir) = lookup("BOOKSHELF_FILES_DIR").filter(|d| !d.trim().is_empty()) {
            config.files_dir = PathBuf::from(dir);
        }
        if let Some(addr) = lookup("BOOKSHELF_LISTEN_ADDR").filter(|a| !a.trim().is_empty()) {
            config.listen_addr = addr;
        }
        if let Some(limit) = lookup("BOOKSHELF_MAX_UPLOAD_BYTES") {
            match limit.trim().parse::<usize>() {
                Ok(parsed) if parsed > 0 => config.max_upload_bytes = parsed,
                _ => warn!("invalid BOOKSHELF_MAX_UPLOAD_BYTES {:?}, using {}", limit, config.max_upload_bytes),
            }
        }
        config
    }
}
