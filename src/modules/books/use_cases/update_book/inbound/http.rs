use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};

use crate::modules::books::adapters::inbound::envelope;
use crate::modules::books::core::book::BookInput;
use crate::modules::books::core::ports::BookError;
use crate::shell::state::AppState;

const ACTION: &str = "Failed to update book";

pub async fn handle(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(book_id = %book_id, %rejection, "undecodable book payload");
            return envelope::fail(StatusCode::BAD_REQUEST, format!("{ACTION}. Invalid payload"));
        }
    };

    match state.books.update(&book_id, input).await {
        Ok(()) => envelope::acknowledged("Book updated successfully"),
        Err(BookError::Validation(reason)) => envelope::rejected(ACTION, &reason),
        Err(BookError::NotFound(_)) => {
            envelope::fail(StatusCode::NOT_FOUND, format!("{ACTION}. Id not found"))
        }
    }
}
