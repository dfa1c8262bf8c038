use axum::response::Json;
use crate::core::controller::{EmptyModel, PageView};

pub(crate) async fn genres_page() -> Json<PageView<EmptyModel>> {
    Json(PageView::new("genres/index", EmptyModel::default()))
}

pub(crate) async fn slug_page() -> Json<PageView<EmptyModel>> {
    Json(PageView::new("genres/slug", EmptyModel::default()))
}
