pub mod local_file_repository;
pub mod memory_file_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::files::dto::{FileContentDto, StoredFileDto};

#[async_trait]
pub(crate) trait FileRepository: Sync + Send {
    // stored files ordered by name
    async fn list_files(&self) -> LibraryResult<Vec<StoredFileDto>>;

    // stores content under name, an existing file of that name is overwritten
    async fn store(&self, name: &str, content: &[u8]) -> LibraryResult<StoredFileDto>;

    async fn load(&self, name: &str) -> LibraryResult<FileContentDto>;
}
