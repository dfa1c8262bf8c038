use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use tracing::info;
use crate::core::command::{Command, CommandError};
use crate::files::domain::FileService;
use crate::files::dto::StoredFileDto;

pub(crate) struct UploadFileCommand {
    file_service: Arc<dyn FileService>,
}

impl UploadFileCommand {
    pub(crate) fn new(file_service: Arc<dyn FileService>) -> Self {
        Self {
            file_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UploadFileCommandRequest {
    pub(crate) name: String,
    pub(crate) content: Vec<u8>,
}

impl UploadFileCommandRequest {
    pub fn new(name: &str, content: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UploadFileCommandResponse {
    pub file: StoredFileDto,
}

#[async_trait]
impl Command<UploadFileCommandRequest, UploadFileCommandResponse> for UploadFileCommand {
    async fn execute(&self, req: UploadFileCommandRequest) -> Result<UploadFileCommandResponse, CommandError> {
        let file = self.file_service.upload_file(req.name.as_str(), req.content.as_slice()).await?;
        info!("uploaded file {} ({} bytes)", file.name, file.size_bytes);
        Ok(UploadFileCommandResponse { file })
    }
}
