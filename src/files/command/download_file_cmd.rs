use std::sync::Arc;
use async_trait::async_trait;
use crate::core::command::{Command, CommandError};
use crate::files::domain::FileService;
use crate::files::dto::FileContentDto;

pub(crate) struct DownloadFileCommand {
    file_service: Arc<dyn FileService>,
}

impl DownloadFileCommand {
    pub(crate) fn new(file_service: Arc<dyn FileService>) -> Self {
        Self {
            file_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct DownloadFileCommandRequest {
    pub(crate) name: String,
}

impl DownloadFileCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct DownloadFileCommandResponse {
    pub file: FileContentDto,
}

impl DownloadFileCommandResponse {
    // attachment disposition so the browser saves the file instead of rendering it
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file.name)
    }
}

#[async_trait]
impl Command<DownloadFileCommandRequest, DownloadFileCommandResponse> for DownloadFileCommand {
    async fn execute(&self, req: DownloadFileCommandRequest) -> Result<DownloadFileCommandResponse, CommandError> {
        self.file_service.load_file(req.name.as_str()).await
            .map_err(CommandError::from).map(|file| DownloadFileCommandResponse { file })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::files::command::download_file_cmd::{DownloadFileCommand, DownloadFileCommandRequest};
    use crate::files::domain::FileService;
    use crate::files::factory::create_file_service;

    #[tokio::test]
    async fn test_should_run_download_file() {
        let svc: Arc<dyn FileService> = Arc::from(create_file_service(&Configuration::memory("test")));
        let _ = svc.upload_file("report.pdf", b"%PDF").await.expect("should upload file");
        let res = DownloadFileCommand::new(svc).execute(DownloadFileCommandRequest::new("report.pdf"))
            .await.expect("should download file");
        assert_eq!(b"%PDF".to_vec(), res.file.content);
        assert_eq!("attachment; filename=\"report.pdf\"", res.content_disposition().as_str());
    }

    #[tokio::test]
    async fn test_should_fail_missing_and_malformed() {
        let svc: Arc<dyn FileService> = Arc::from(create_file_service(&Configuration::memory("test")));
        let cmd = DownloadFileCommand::new(svc);
        assert!(matches!(cmd.execute(DownloadFileCommandRequest::new("nothing.txt")).await, Err(CommandError::NotFound { .. })));
        assert!(matches!(cmd.execute(DownloadFileCommandRequest::new("../etc/passwd")).await, Err(CommandError::MalformedName { .. })));
    }
}
