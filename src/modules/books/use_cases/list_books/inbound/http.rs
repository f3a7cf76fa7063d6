use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::modules::books::adapters::inbound::envelope;
use crate::modules::books::core::book::BookSummary;
use crate::modules::books::core::filter::BookFilter;
use crate::shell::state::AppState;

/// Raw query string values; `reading` and `finished` only count when they read as 0 or 1.
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksParams {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

#[derive(Serialize)]
pub struct ListBooksData {
    pub books: Vec<BookSummary>,
}

pub async fn handle(State(state): State<AppState>, Query(params): Query<ListBooksParams>) -> Response {
    let filter = BookFilter::from_query(
        params.name,
        params.reading.as_deref(),
        params.finished.as_deref(),
    );
    let books = state.books.list_all(&filter).await;
    envelope::success(StatusCode::OK, None, ListBooksData { books })
}
