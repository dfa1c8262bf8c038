use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;
use crate::books::dto::BookRemovalDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) removal: BookRemovalDto,
}

impl RemoveBookCommandRequest {
    pub fn new(removal: BookRemovalDto) -> Self {
        Self {
            removal,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub removed: bool,
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        if req.removal.is_empty() {
            warn!("empty book removal request");
            return Ok(RemoveBookCommandResponse { removed: false });
        }
        let removed = self.catalog_service.remove_book(&req.removal).await?;
        if !removed {
            warn!("book: {:?} not found", req.removal);
        }
        Ok(RemoveBookCommandResponse { removed })
    }
}
