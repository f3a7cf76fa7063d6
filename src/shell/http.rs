use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::books::use_cases::add_book::inbound::http as add_http;
use crate::modules::books::use_cases::delete_book::inbound::http as delete_http;
use crate::modules::books::use_cases::get_book::inbound::http as get_http;
use crate::modules::books::use_cases::list_books::inbound::http as list_http;
use crate::modules::books::use_cases::update_book::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/books", post(add_http::handle).get(list_http::handle))
        .route(
            "/books/{book_id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
}
