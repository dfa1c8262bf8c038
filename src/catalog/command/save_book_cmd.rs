use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use tracing::info;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SaveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SaveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct SaveBookCommandRequest {
    pub(crate) book: BookDto,
}

impl SaveBookCommandRequest {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SaveBookCommandResponse {
    pub book: BookDto,
    pub catalog_size: usize,
}

#[async_trait]
impl Command<SaveBookCommandRequest, SaveBookCommandResponse> for SaveBookCommand {
    async fn execute(&self, req: SaveBookCommandRequest) -> Result<SaveBookCommandResponse, CommandError> {
        let book = self.catalog_service.save_book(&req.book).await?;
        let catalog_size = self.catalog_service.list_books().await?.len();
        info!("current repository size: {}", catalog_size);
        Ok(SaveBookCommandResponse { book, catalog_size })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::catalog::command::save_book_cmd::{SaveBookCommand, SaveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_CMD: AsyncOnce<SaveBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::memory("test"));
                SaveBookCommand::new(Arc::from(svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_save_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(SaveBookCommandRequest::new(BookDto::new("Orwell", "1984", 10)))
            .await.expect("should save book");
        assert!(res.book.book_id.is_some());
        assert!(res.catalog_size >= 1);
    }

    #[tokio::test]
    async fn test_should_fail_invalid_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(SaveBookCommandRequest::new(BookDto::new("", "1984", 10))).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
