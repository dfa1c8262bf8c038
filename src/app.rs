use std::net::SocketAddr;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceExt;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::catalog::controller::{books_shelf, download_file, remove_book, save_book, upload_file};
use crate::core::controller::AppState;
use crate::core::domain::{Configuration, ServerMode};
use crate::genres::controller::{genres_page, slug_page};

pub fn create_app(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/genres", get(genres_page))
        .route("/genres/slug", get(slug_page))
        .route("/books/shelf", get(books_shelf))
        .route("/books/save", post(save_book))
        .route("/books/remove", post(remove_book))
        .route("/books/uploadFile",
               post(upload_file).layer(DefaultBodyLimit::max(upload_limit)))
        .route("/books/download", get(download_file))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// API Gateway events carry their own body type, the router reads hyper bodies.
fn from_lambda_request(req: lambda_http::Request) -> axum::http::Request<axum::body::Body> {
    req.map(|body| axum::body::Body::from(body.to_vec()))
}

pub async fn run(config: Configuration) -> Result<(), lambda_http::Error> {
    info!("starting bookshelf branch={} store={} mode={:?}", config.branch_id, config.store, config.mode);
    let mode = config.mode;
    let listen_addr = config.listen_addr.clone();
    let app = create_app(AppState::new(config));

    match mode {
        ServerMode::Lambda => {
            // See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
            lambda_http::run(app.map_request(from_lambda_request)).await
        }
        ServerMode::Http => {
            let addr: SocketAddr = listen_addr.parse()?;
            info!("bookshelf listening on {}", addr);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
    }
}
