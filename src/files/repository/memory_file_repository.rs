use std::collections::BTreeMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::library::{LibraryError, LibraryResult};
use crate::files::dto::{FileContentDto, StoredFileDto};
use crate::files::repository::FileRepository;

#[derive(Debug, Default)]
pub struct MemoryFileRepository {
    files: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryFileRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRepository for MemoryFileRepository {
    async fn list_files(&self) -> LibraryResult<Vec<StoredFileDto>> {
        Ok(self.files.read().await.iter()
            .map(|(name, content)| StoredFileDto::new(name, content.len() as u64))
            .collect())
    }

    async fn store(&self, name: &str, content: &[u8]) -> LibraryResult<StoredFileDto> {
        self.files.write().await.insert(name.to_string(), content.to_vec());
        Ok(StoredFileDto::new(name, content.len() as u64))
    }

    async fn load(&self, name: &str) -> LibraryResult<FileContentDto> {
        self.files.read().await.get(name)
            .map(|content| FileContentDto::new(name, content.clone()))
            .ok_or_else(|| LibraryError::not_found(format!("file not found for {}", name).as_str()))
    }
}
