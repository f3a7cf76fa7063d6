use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde::Serialize;

use crate::modules::books::adapters::inbound::envelope;
use crate::modules::books::core::book::Book;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct GetBookData {
    pub book: Book,
}

pub async fn handle(State(state): State<AppState>, Path(book_id): Path<String>) -> Response {
    match state.books.get_by_id(&book_id).await {
        Ok(book) => envelope::success(StatusCode::OK, None, GetBookData { book }),
        Err(_) => envelope::fail(StatusCode::NOT_FOUND, "Book not found"),
    }
}
