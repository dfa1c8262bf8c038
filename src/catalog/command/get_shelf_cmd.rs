use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::filter::BookFilter;
use crate::core::command::{Command, CommandError};
use crate::files::domain::FileService;
use crate::files::dto::StoredFileDto;

pub(crate) struct GetShelfCommand {
    catalog_service: Arc<dyn CatalogService>,
    file_service: Arc<dyn FileService>,
}

impl GetShelfCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>, file_service: Arc<dyn FileService>) -> Self {
        Self {
            catalog_service,
            file_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct GetShelfCommandRequest {
    pub(crate) filter: BookFilter,
}

impl GetShelfCommandRequest {
    pub fn new(filter: BookFilter) -> Self {
        Self {
            filter,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetShelfCommandResponse {
    pub books: Vec<BookDto>,
    pub files: Vec<StoredFileDto>,
    pub filter: BookFilter,
}

#[async_trait]
impl Command<GetShelfCommandRequest, GetShelfCommandResponse> for GetShelfCommand {
    async fn execute(&self, req: GetShelfCommandRequest) -> Result<GetShelfCommandResponse, CommandError> {
        let books = self.catalog_service.filter_books(&req.filter).await?;
        let files = self.file_service.list_files().await?;
        Ok(GetShelfCommandResponse { books, files, filter: req.filter })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::catalog::command::get_shelf_cmd::{GetShelfCommand, GetShelfCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::filter::BookFilter;
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::files::domain::FileService;
    use crate::files::factory::create_file_service;

    #[tokio::test]
    async fn test_should_run_get_shelf() {
        let config = Configuration::memory("test");
        let catalog: Arc<dyn CatalogService> = Arc::from(create_catalog_service(&config));
        let files: Arc<dyn FileService> = Arc::from(create_file_service(&config));
        let _ = catalog.save_book(&BookDto::new("Orwell", "1984", 10)).await.expect("should save book");
        let _ = catalog.save_book(&BookDto::new("Huxley", "Island", 2)).await.expect("should save book");
        let _ = files.upload_file("notes.txt", b"hello").await.expect("should upload file");

        let cmd = GetShelfCommand::new(catalog, files);
        let res = cmd.execute(GetShelfCommandRequest::new(BookFilter::new(Some("Hux"), None, None)))
            .await.expect("should load shelf");
        assert_eq!(1, res.books.len());
        assert_eq!("Island", res.books[0].title.as_str());
        assert_eq!(1, res.files.len());

        let res = cmd.execute(GetShelfCommandRequest::default()).await.expect("should load shelf");
        assert_eq!(2, res.books.len());
    }
}
