use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // all entities in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    // delete an entity, returns number of deleted records
    async fn delete(&self, id: i64) -> LibraryResult<usize>;
}

// Backend that holds the uploaded files. Book records always live in memory.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Memory,
    LocalFs,
}

impl RepositoryStore {
    pub fn parse(s: &str) -> Option<RepositoryStore> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(RepositoryStore::Memory),
            "local" | "localfs" | "fs" => Some(RepositoryStore::LocalFs),
            _ => None,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::Memory => write!(f, "memory"),
            RepositoryStore::LocalFs => write!(f, "local"),
        }
    }
}
