use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is the book record exchanged with the shelf; `book_id` is absent
// until the catalog has persisted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: Option<i64>,
    pub author: String,
    pub title: String,
    pub size: i32,
}

impl BookDto {
    pub fn new(author: &str, title: &str, size: i32) -> BookDto {
        BookDto {
            book_id: None,
            author: author.to_string(),
            title: title.to_string(),
            size,
        }
    }

    pub fn with_id(book_id: i64, author: &str, title: &str, size: i32) -> BookDto {
        BookDto {
            book_id: Some(book_id),
            ..BookDto::new(author, title, size)
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: Some(other.book_id),
            author: other.author.to_string(),
            title: other.title.to_string(),
            size: other.size,
        }
    }
}

// BookRemovalDto carries the criteria of a remove request. The id wins when
// present, otherwise author, title and size must all match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRemovalDto {
    pub book_id: Option<i64>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub size: Option<i32>,
}

impl BookRemovalDto {
    pub fn by_id(book_id: i64) -> Self {
        Self {
            book_id: Some(book_id),
            ..Self::default()
        }
    }

    pub fn by_fields(author: &str, title: &str, size: i32) -> Self {
        Self {
            book_id: None,
            author: Some(author.to_string()),
            title: Some(title.to_string()),
            size: Some(size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.book_id.is_none()
            && self.author.as_deref().map_or(true, str::is_empty)
            && self.title.as_deref().map_or(true, str::is_empty)
            && self.size.is_none()
    }
}
