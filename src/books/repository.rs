pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// Outcome of a save, the catalog either appended a record or replaced one in place.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SavedBook {
    Created(BookEntity),
    Replaced(BookEntity),
}

impl SavedBook {
    pub fn entity(&self) -> &BookEntity {
        match self {
            SavedBook::Created(entity) => entity,
            SavedBook::Replaced(entity) => entity,
        }
    }
}

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // Without id a new unique id is assigned and the record appended. With an id
    // the record of that id is replaced, or appended under that id when none exists.
    async fn save(&self, book: &BookDto) -> LibraryResult<SavedBook>;

    // deletes every record equal on author, title and size and returns them
    async fn delete_matching(&self, author: &str, title: &str, size: i32) -> LibraryResult<Vec<BookEntity>>;
}
