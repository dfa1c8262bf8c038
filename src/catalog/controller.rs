use axum::{
    extract::{Multipart, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Redirect, Response},
    Form,
};
use tracing::{info, warn};
use crate::catalog::command::get_shelf_cmd::{GetShelfCommand, GetShelfCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::save_book_cmd::{SaveBookCommand, SaveBookCommandRequest};
use crate::catalog::domain::filter::BookFilter;
use crate::catalog::dto::{BookFilterForm, BookForm, BookRemovalForm, DownloadQuery, FieldError, ShelfPage};
use crate::core::command::Command;
use crate::core::controller::{AppState, multipart_to_server_error, PageView, ServerError};
use crate::files::command::download_file_cmd::{DownloadFileCommand, DownloadFileCommandRequest};
use crate::files::command::upload_file_cmd::{UploadFileCommand, UploadFileCommandRequest};

pub(crate) const SHELF_PATH: &str = "/books/shelf";
const SHELF_VIEW: &str = "book_shelf";

async fn render_shelf(state: &AppState, filter: BookFilter,
                      errors: Vec<FieldError>) -> Result<Json<PageView<ShelfPage>>, ServerError> {
    let cmd = GetShelfCommand::new(state.catalog_service.clone(), state.file_service.clone());
    let res = cmd.execute(GetShelfCommandRequest::new(filter)).await?;
    Ok(Json(PageView::new(SHELF_VIEW, ShelfPage {
        books: res.books,
        files: res.files,
        filter: res.filter,
        errors,
    })))
}

pub(crate) async fn books_shelf(
    State(state): State<AppState>,
    Query(form): Query<BookFilterForm>) -> Result<Json<PageView<ShelfPage>>, ServerError> {
    match form.validate() {
        Ok(filter) => {
            if filter.is_empty() {
                info!("got book shelf");
            } else {
                info!("filter books by: {:?} {:?} {:?}", filter.author, filter.title, filter.size);
            }
            render_shelf(&state, filter, vec![]).await
        }
        Err(errors) => {
            warn!("invalid book filter {:?}", errors);
            render_shelf(&state, BookFilter::default(), errors).await
        }
    }
}

pub(crate) async fn save_book(
    State(state): State<AppState>,
    Form(form): Form<BookForm>) -> Result<Response, ServerError> {
    let book = match form.validate() {
        Ok(book) => book,
        Err(errors) => {
            warn!("invalid book {:?}", errors);
            return render_shelf(&state, BookFilter::default(), errors).await.map(IntoResponse::into_response);
        }
    };
    SaveBookCommand::new(state.catalog_service.clone())
        .execute(SaveBookCommandRequest::new(book)).await?;
    Ok(Redirect::to(SHELF_PATH).into_response())
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Form(form): Form<BookRemovalForm>) -> Result<Response, ServerError> {
    let removal = match form.validate() {
        Ok(removal) => removal,
        Err(errors) => {
            warn!("invalid book removal {:?}", errors);
            return render_shelf(&state, BookFilter::default(), errors).await.map(IntoResponse::into_response);
        }
    };
    RemoveBookCommand::new(state.catalog_service.clone())
        .execute(RemoveBookCommandRequest::new(removal)).await?;
    Ok(Redirect::to(SHELF_PATH).into_response())
}

pub(crate) async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart) -> Result<Redirect, ServerError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_to_server_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let content = field.bytes().await.map_err(multipart_to_server_error)?;
        upload = Some((name, content));
        break;
    }
    let (name, content) = upload
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "required part 'file' is not present".to_string()))?;
    if name.is_empty() {
        warn!("file is empty");
        return Ok(Redirect::to(SHELF_PATH));
    }
    UploadFileCommand::new(state.file_service.clone())
        .execute(UploadFileCommandRequest::new(name.as_str(), content.to_vec())).await?;
    Ok(Redirect::to(SHELF_PATH))
}

pub(crate) async fn download_file(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>) -> Result<Response, ServerError> {
    let res = DownloadFileCommand::new(state.file_service.clone())
        .execute(DownloadFileCommandRequest::new(query.name.as_str())).await?;
    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (header::CONTENT_DISPOSITION, res.content_disposition()),
    ];
    Ok((headers, res.file.content).into_response())
}
