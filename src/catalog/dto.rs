use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, BookRemovalDto};
use crate::catalog::domain::filter::BookFilter;
use crate::files::dto::StoredFileDto;

// FieldError is one validation diagnostic shown next to the shelf forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

// empty strings count as absent, like an untouched form input
fn text(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

// blank means absent, anything else must parse
fn number<T: FromStr>(field: &str, value: &Option<String>, errors: &mut Vec<FieldError>) -> Option<T> {
    let raw = value.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
    match raw.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(FieldError::new(field, format!("{:?} is not a valid number", raw).as_str()));
            None
        }
    }
}

// Query string of the shelf page.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct BookFilterForm {
    pub author: Option<String>,
    pub title: Option<String>,
    pub size: Option<String>,
}

impl BookFilterForm {
    pub fn validate(&self) -> Result<BookFilter, Vec<FieldError>> {
        let mut errors = vec![];
        let size = number::<i32>("size", &self.size, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(BookFilter {
            author: text(&self.author),
            title: text(&self.title),
            size,
        })
    }
}

// Form posted to save a book.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct BookForm {
    pub id: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub size: Option<String>,
}

impl BookForm {
    pub fn validate(&self) -> Result<BookDto, Vec<FieldError>> {
        let mut errors = vec![];
        let book_id = number::<i64>("id", &self.id, &mut errors);
        if matches!(book_id, Some(id) if id <= 0) {
            errors.push(FieldError::new("id", "must be greater than 0"));
        }
        // the catalog keeps the largest id free for its counter
        if book_id == Some(i64::MAX) {
            errors.push(FieldError::new("id", "is out of range"));
        }
        let author = self.author.clone().unwrap_or_default();
        if author.trim().is_empty() {
            errors.push(FieldError::new("author", "must not be blank"));
        }
        let title = self.title.clone().unwrap_or_default();
        if title.trim().is_empty() {
            errors.push(FieldError::new("title", "must not be blank"));
        }
        let size = number::<i32>("size", &self.size, &mut errors);
        if self.size.as_deref().map_or(true, |s| s.trim().is_empty()) {
            errors.push(FieldError::new("size", "must not be null"));
        }
        match (errors.is_empty(), size) {
            (true, Some(size)) => Ok(BookDto { book_id, author, title, size }),
            _ => Err(errors),
        }
    }
}

// Form posted to remove a book. Only the shape is checked here; whether
// anything matches is up to the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct BookRemovalForm {
    pub id: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub size: Option<String>,
}

impl BookRemovalForm {
    pub fn validate(&self) -> Result<BookRemovalDto, Vec<FieldError>> {
        let mut errors = vec![];
        let book_id = number::<i64>("id", &self.id, &mut errors);
        let size = number::<i32>("size", &self.size, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(BookRemovalDto {
            book_id,
            author: text(&self.author),
            title: text(&self.title),
            size,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DownloadQuery {
    pub name: String,
}

// ShelfPage is the model handed to the `book_shelf` view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfPage {
    pub books: Vec<BookDto>,
    pub files: Vec<StoredFileDto>,
    pub filter: BookFilter,
    pub errors: Vec<FieldError>,
}
