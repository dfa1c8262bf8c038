use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::files::domain::FileService;
use crate::files::dto::{FileContentDto, StoredFileDto};
use crate::files::repository::FileRepository;
use crate::gateway::events::EventPublisher;

pub(crate) struct FileServiceImpl {
    metadata: HashMap<String, String>,
    file_repository: Box<dyn FileRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl FileServiceImpl {
    pub(crate) fn new(config: &Configuration, file_repository: Box<dyn FileRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            metadata: HashMap::from([("branch_id".to_string(), config.branch_id.to_string())]),
            file_repository,
            events_publisher,
        }
    }
}

// Names are used as storage keys and in Content-Disposition headers, so they
// must be one plain path segment without quotes or control characters.
fn check_file_name(name: &str) -> LibraryResult<()> {
    let malformed = name.is_empty()
        || name == "."
        || name == ".."
        || name.chars().any(|c| c == '/' || c == '\\' || c == '"' || c.is_control());
    if malformed {
        return Err(LibraryError::malformed_name(format!("cannot resolve file name {:?}", name).as_str()));
    }
    Ok(())
}

#[async_trait]
impl FileService for FileServiceImpl {
    async fn list_files(&self) -> LibraryResult<Vec<StoredFileDto>> {
        self.file_repository.list_files().await
    }

    async fn upload_file(&self, name: &str, content: &[u8]) -> LibraryResult<StoredFileDto> {
        if name.is_empty() {
            return Err(LibraryError::invalid_input("file name must not be empty"));
        }
        check_file_name(name)?;
        let stored = self.file_repository.store(name, content).await?;
        self.events_publisher.publish(&DomainEvent::added(
            "files", stored.name.as_str(), &self.metadata, &stored)?).await?;
        Ok(stored)
    }

    async fn load_file(&self, name: &str) -> LibraryResult<FileContentDto> {
        check_file_name(name)?;
        self.file_repository.load(name).await
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEventType;
    use crate::core::library::LibraryError;
    use crate::files::domain::FileService;
    use crate::files::domain::service::FileServiceImpl;
    use crate::files::factory;
    use crate::files::repository::memory_file_repository::MemoryFileRepository;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_upload_and_load() {
        let svc = factory::create_file_service(&Configuration::memory("test"));
        let stored = svc.upload_file("catalog.csv", b"id,author").await.expect("should upload file");
        assert_eq!("catalog.csv", stored.name.as_str());
        let loaded = svc.load_file("catalog.csv").await.expect("should load file");
        assert_eq!(b"id,author".to_vec(), loaded.content);
        assert_eq!(vec![stored], svc.list_files().await.expect("should list files"));
    }

    #[tokio::test]
    async fn test_should_reject_empty_name() {
        let svc = factory::create_file_service(&Configuration::memory("test"));
        assert!(matches!(svc.upload_file("", b"x").await, Err(LibraryError::InvalidInput { .. })));
        assert!(svc.list_files().await.expect("should list files").is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_malformed_names() {
        let svc = factory::create_file_service(&Configuration::memory("test"));
        for name in ["..", "a/b", "a\\b", "quote\".txt", "line\nbreak"] {
            assert!(matches!(svc.upload_file(name, b"x").await, Err(LibraryError::MalformedName { .. })), "{}", name);
            assert!(matches!(svc.load_file(name).await, Err(LibraryError::MalformedName { .. })), "{}", name);
        }
        assert!(matches!(svc.load_file("").await, Err(LibraryError::MalformedName { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_missing_file() {
        let svc = factory::create_file_service(&Configuration::memory("test"));
        assert!(matches!(svc.load_file("missing.pdf").await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_publish_upload_event() {
        let publisher = MemoryPublisher::default();
        let svc = FileServiceImpl::new(&Configuration::memory("test"),
                                       Box::new(MemoryFileRepository::new()), Box::new(publisher.clone()));
        let _ = svc.upload_file("notes.txt", b"hello").await.expect("should upload file");
        assert_eq!(vec![("files".to_string(), "notes.txt".to_string(), DomainEventType::Added)], publisher.published().await);
    }
}
