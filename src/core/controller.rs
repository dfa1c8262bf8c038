use std::sync::Arc;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::files::domain::FileService;
use crate::files::factory::create_file_service;

// AppState is shared by all handlers; the services behind it own their locks.
#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog_service: Arc<dyn CatalogService>,
    pub(crate) file_service: Arc<dyn FileService>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let catalog_service = Arc::from(create_catalog_service(&config));
        let file_service = Arc::from(create_file_service(&config));
        AppState {
            config,
            catalog_service,
            file_service,
        }
    }
}

// PageView names the template to render and the model to render it with.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageView<T> {
    pub view: String,
    pub model: T,
}

impl<T: Serialize> PageView<T> {
    pub fn new(view: &str, model: T) -> Self {
        PageView {
            view: view.to_string(),
            model,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EmptyModel {}

pub(crate) type ServerError = (StatusCode, String);

pub fn multipart_to_server_error(err: MultipartError) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidInput { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::MalformedName { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Storage { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}
