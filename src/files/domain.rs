pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::files::dto::{FileContentDto, StoredFileDto};

#[async_trait]
pub(crate) trait FileService: Sync + Send {
    async fn list_files(&self) -> LibraryResult<Vec<StoredFileDto>>;
    async fn upload_file(&self, name: &str, content: &[u8]) -> LibraryResult<StoredFileDto>;
    async fn load_file(&self, name: &str) -> LibraryResult<FileContentDto>;
}
