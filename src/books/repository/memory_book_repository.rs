use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::{BookRepository, SavedBook};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug)]
struct Shelf {
    books: Vec<BookEntity>,
    next_id: i64,
}

// MemoryBookRepository keeps the catalog in insertion order. The id counter sits
// under the same lock as the records so concurrent saves never share an id.
#[derive(Debug)]
pub struct MemoryBookRepository {
    shelf: RwLock<Shelf>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            shelf: RwLock::new(Shelf { books: vec![], next_id: 1 }),
        }
    }
}

fn id_space_exhausted() -> LibraryError {
    LibraryError::validation("no book id left to assign", Some("id".to_string()))
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.shelf.read().await.books.clone())
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let mut shelf = self.shelf.write().await;
        let before = shelf.books.len();
        shelf.books.retain(|b| b.book_id != id);
        Ok(before - shelf.books.len())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn save(&self, book: &BookDto) -> LibraryResult<SavedBook> {
        let mut shelf = self.shelf.write().await;
        match book.book_id {
            None => {
                let id = shelf.next_id;
                shelf.next_id = id.checked_add(1).ok_or_else(id_space_exhausted)?;
                let entity = BookEntity::new(id, book.author.as_str(), book.title.as_str(), book.size);
                shelf.books.push(entity.clone());
                Ok(SavedBook::Created(entity))
            }
            Some(id) => {
                if let Some(existing) = shelf.books.iter_mut().find(|b| b.book_id == id) {
                    *existing = existing.replace(book.author.as_str(), book.title.as_str(), book.size);
                    return Ok(SavedBook::Replaced(existing.clone()));
                }
                // the counter must stay past every stored id, so the largest id is never stored
                let after = id.checked_add(1).ok_or_else(id_space_exhausted)?;
                let entity = BookEntity::new(id, book.author.as_str(), book.title.as_str(), book.size);
                shelf.next_id = shelf.next_id.max(after);
                shelf.books.push(entity.clone());
                Ok(SavedBook::Created(entity))
            }
        }
    }

    async fn delete_matching(&self, author: &str, title: &str, size: i32) -> LibraryResult<Vec<BookEntity>> {
        let mut shelf = self.shelf.write().await;
        let (removed, kept): (Vec<BookEntity>, Vec<BookEntity>) = shelf.books.drain(..)
            .partition(|b| b.matches(author, title, size));
        shelf.books = kept;
        Ok(removed)
    }
}
