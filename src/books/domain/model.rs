use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity is a book record once it has been persisted in the catalog and
// therefore always carries an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: i64,
    pub version: i64,
    pub author: String,
    pub title: String,
    // shelf-size code
    pub size: i32,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(book_id: i64, author: &str, title: &str, size: i32) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            book_id,
            version: 0,
            author: author.to_string(),
            title: title.to_string(),
            size,
            created_at: now,
            updated_at: now,
        }
    }

    // full replacement of the mutable fields, identity and creation time are kept
    pub fn replace(&self, author: &str, title: &str, size: i32) -> Self {
        Self {
            book_id: self.book_id,
            version: self.version + 1,
            author: author.to_string(),
            title: title.to_string(),
            size,
            created_at: self.created_at,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn matches(&self, author: &str, title: &str, size: i32) -> bool {
        self.author == author && self.title == title && self.size == size
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}
