pub mod download_file_cmd;
pub mod upload_file_cmd;
