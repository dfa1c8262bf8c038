use lambda_http::Error;
use bookshelf::app;
use bookshelf::core::domain::{Configuration, ServerMode};
use bookshelf::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing(ServerMode::from_env());
    let config = Configuration::from_env();
    app::run(config).await
}
