use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::dto::{BookDto, BookRemovalDto};
use crate::books::repository::{BookRepository, SavedBook};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::filter::BookFilter;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    metadata: HashMap<String, String>,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            metadata: HashMap::from([("branch_id".to_string(), config.branch_id.to_string())]),
            book_repository,
            events_publisher,
        }
    }
}

fn validate_book(book: &BookDto) -> LibraryResult<()> {
    if book.author.trim().is_empty() {
        return Err(LibraryError::validation("author must not be blank", Some("author".to_string())));
    }
    if book.title.trim().is_empty() {
        return Err(LibraryError::validation("title must not be blank", Some("title".to_string())));
    }
    if let Some(id) = book.book_id {
        if id <= 0 {
            return Err(LibraryError::validation(format!("invalid book id {}", id).as_str(), Some("id".to_string())));
        }
    }
    Ok(())
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn filter_books(&self, filter: &BookFilter) -> LibraryResult<Vec<BookDto>> {
        let books = self.list_books().await?;
        Ok(filter.apply(books))
    }

    async fn save_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        validate_book(book)?;
        let saved = self.book_repository.save(book).await?;
        let dto = BookDto::from(saved.entity());
        let event = match saved {
            SavedBook::Created(ref entity) => DomainEvent::added("books", entity.id().as_str(), &self.metadata, &dto)?,
            SavedBook::Replaced(ref entity) => DomainEvent::updated("books", entity.id().as_str(), &self.metadata, &dto)?,
        };
        self.events_publisher.publish(&event).await?;
        Ok(dto)
    }

    async fn remove_book(&self, req: &BookRemovalDto) -> LibraryResult<bool> {
        if req.is_empty() {
            return Ok(false);
        }
        if let Some(id) = req.book_id {
            let deleted = self.book_repository.delete(id).await?;
            if deleted > 0 {
                let key = id.to_string();
                self.events_publisher.publish(&DomainEvent::deleted(
                    "books", key.as_str(), &self.metadata, &key)?).await?;
            }
            return Ok(deleted > 0);
        }
        match (req.author.as_deref(), req.title.as_deref(), req.size) {
            (Some(author), Some(title), Some(size)) => {
                let removed = self.book_repository.delete_matching(author, title, size).await?;
                for entity in &removed {
                    self.events_publisher.publish(&DomainEvent::deleted(
                        "books", entity.id().as_str(), &self.metadata, &BookDto::from(entity))?).await?;
                }
                Ok(!removed.is_empty())
            }
            // an absent field never equals a stored one
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::{BookDto, BookRemovalDto};
    use crate::books::factory::create_book_repository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::filter::BookFilter;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEventType;
    use crate::core::library::LibraryError;
    use crate::gateway::memory::publisher::MemoryPublisher;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::memory("test"))
            });
    }

    async fn sample_catalog() -> Box<dyn CatalogService> {
        let svc = factory::create_catalog_service(&Configuration::memory("test"));
        for (author, title, size) in [("Orwell", "1984", 10), ("Orwell", "Animal Farm", 5), ("Huxley", "Brave New World", 10)] {
            let _ = svc.save_book(&BookDto::new(author, title, size)).await.expect("should save book");
        }
        svc
    }

    #[tokio::test]
    async fn test_should_save_book() {
        let catalog_svc = SUT_SVC.get().await;

        let book = BookDto::new("Zamyatin", "We", 7);
        let saved = catalog_svc.save_book(&book).await.expect("should save book");
        assert!(saved.book_id.is_some());

        let all = catalog_svc.list_books().await.expect("should list books");
        assert_eq!(1, all.iter().filter(|b| **b == saved).count());
    }

    #[tokio::test]
    async fn test_should_remove_book_by_id() {
        let catalog_svc = SUT_SVC.get().await;

        let saved = catalog_svc.save_book(&BookDto::new("Bradbury", "Fahrenheit 451", 3)).await.expect("should save book");
        let id = saved.book_id.expect("assigned id");
        assert!(catalog_svc.remove_book(&BookRemovalDto::by_id(id)).await.expect("should remove book"));

        let all = catalog_svc.list_books().await.expect("should list books");
        assert!(all.iter().all(|b| b.book_id != Some(id)));
        assert!(!catalog_svc.remove_book(&BookRemovalDto::by_id(id)).await.expect("should not remove twice"));
    }

    #[tokio::test]
    async fn test_should_list_in_insertion_order() {
        let svc = sample_catalog().await;
        let titles: Vec<String> = svc.filter_books(&BookFilter::default()).await.expect("should list books")
            .into_iter().map(|b| b.title).collect();
        assert_eq!(vec!["1984", "Animal Farm", "Brave New World"], titles);
    }

    #[tokio::test]
    async fn test_should_filter_conjunctively() {
        let svc = sample_catalog().await;
        let filtered = svc.filter_books(&BookFilter::new(Some("Orwell"), None, Some(10))).await.expect("should filter books");
        assert_eq!(1, filtered.len());
        assert_eq!(("Orwell", "1984", 10), (filtered[0].author.as_str(), filtered[0].title.as_str(), filtered[0].size));
    }

    #[tokio::test]
    async fn test_should_reject_blank_author() {
        let svc = sample_catalog().await;
        let res = svc.save_book(&BookDto::new("", "Untitled", 1)).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        let res = svc.save_book(&BookDto::new("Anon", "  ", 1)).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert_eq!(3, svc.list_books().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_ignore_empty_removal() {
        let svc = sample_catalog().await;
        let before = svc.list_books().await.expect("should list books");
        assert!(!svc.remove_book(&BookRemovalDto::default()).await.expect("should ignore removal"));
        let partial = BookRemovalDto { author: Some("Orwell".to_string()), ..BookRemovalDto::default() };
        assert!(!svc.remove_book(&partial).await.expect("should ignore removal"));
        assert_eq!(before, svc.list_books().await.expect("should list books"));
    }

    #[tokio::test]
    async fn test_should_remove_by_fields() {
        let svc = sample_catalog().await;
        assert!(svc.remove_book(&BookRemovalDto::by_fields("Orwell", "Animal Farm", 5)).await.expect("should remove book"));
        assert!(!svc.remove_book(&BookRemovalDto::by_fields("Orwell", "1984", 5)).await.expect("should not match"));
        assert_eq!(2, svc.list_books().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_publish_events() {
        let publisher = MemoryPublisher::default();
        let svc = CatalogServiceImpl::new(&Configuration::memory("test"), create_book_repository(), Box::new(publisher.clone()));
        let saved = svc.save_book(&BookDto::new("Orwell", "1984", 10)).await.expect("should save book");
        let id = saved.book_id.expect("assigned id");
        let _ = svc.save_book(&BookDto::with_id(id, "Orwell", "Nineteen Eighty-Four", 10)).await.expect("should update book");
        let _ = svc.remove_book(&BookRemovalDto::by_id(id)).await.expect("should remove book");

        let kinds: Vec<DomainEventType> = publisher.published().await.into_iter().map(|(_, _, kind)| kind).collect();
        assert_eq!(vec![DomainEventType::Added, DomainEventType::Updated, DomainEventType::Deleted], kinds);
    }
}
