use crate::core::domain::ServerMode;

// Lambda output goes to CloudWatch as JSON lines; a local server logs for humans.
pub fn setup_tracing(mode: ServerMode) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO);
    let res = match mode {
        ServerMode::Lambda => {
            builder
                // disable printing the name of the module in every log line.
                .with_target(false)
                // ANSI color codes show up in a confusing manner in CloudWatch logs.
                .with_ansi(false)
                // CloudWatch adds the ingestion time.
                .without_time()
                .json()
                .try_init()
        }
        ServerMode::Http => {
            builder.try_init()
        }
    };
    if let Err(err) = res {
        tracing::warn!("tracing already initialized: {}", err);
    }
}
