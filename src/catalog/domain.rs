pub mod filter;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookRemovalDto};
use crate::catalog::domain::filter::BookFilter;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn filter_books(&self, filter: &BookFilter) -> LibraryResult<Vec<BookDto>>;
    async fn save_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, req: &BookRemovalDto) -> LibraryResult<bool>;
}
