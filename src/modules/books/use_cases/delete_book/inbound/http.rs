use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::modules::books::adapters::inbound::envelope;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(book_id): Path<String>) -> Response {
    match state.books.delete_by_id(&book_id).await {
        Ok(()) => envelope::acknowledged("Book deleted successfully"),
        Err(_) => envelope::fail(StatusCode::NOT_FOUND, "Failed to delete book. Id not found"),
    }
}
