use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode, response::Response,
};
use serde::Serialize;

use crate::modules::books::adapters::inbound::envelope;
use crate::modules::books::core::book::BookInput;
use crate::shell::state::AppState;

const ACTION: &str = "Failed to add book";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookData {
    pub book_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(%rejection, "undecodable book payload");
            return envelope::fail(StatusCode::BAD_REQUEST, format!("{ACTION}. Invalid payload"));
        }
    };

    match state.books.create(input).await {
        Ok(book_id) => envelope::success(
            StatusCode::CREATED,
            Some("Book added successfully"),
            AddBookData { book_id },
        ),
        Err(reason) => envelope::rejected(ACTION, &reason),
    }
}
