use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;

// BookFilter narrows the shelf. Each present, non-empty field adds one more
// predicate; absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookFilter {
    pub author: Option<String>,
    pub title: Option<String>,
    pub size: Option<i32>,
}

impl BookFilter {
    pub fn new(author: Option<&str>, title: Option<&str>, size: Option<i32>) -> Self {
        Self {
            author: author.map(str::to_string),
            title: title.map(str::to_string),
            size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.author_prefix().is_none() && self.title_prefix().is_none() && self.size.is_none()
    }

    fn author_prefix(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }

    fn title_prefix(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    // case-sensitive author prefix, then title prefix, then exact size
    pub fn apply(&self, mut books: Vec<BookDto>) -> Vec<BookDto> {
        if let Some(author) = self.author_prefix() {
            books.retain(|b| b.author.starts_with(author));
        }
        if let Some(title) = self.title_prefix() {
            books.retain(|b| b.title.starts_with(title));
        }
        if let Some(size) = self.size {
            books.retain(|b| b.size == size);
        }
        books
    }
}
