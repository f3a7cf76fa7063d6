// JSON envelope shared by every books endpoint: `{status, message?, data?}`.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::books::core::validate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn success<T: Serialize>(code: StatusCode, message: Option<&str>, data: T) -> Response {
    (
        code,
        Json(Envelope {
            status: Status::Success,
            message: message.map(str::to_string),
            data: Some(data),
        }),
    )
        .into_response()
}

pub fn acknowledged(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(Envelope::<()> {
            status: Status::Success,
            message: Some(message.to_string()),
            data: None,
        }),
    )
        .into_response()
}

pub fn fail(code: StatusCode, message: impl Into<String>) -> Response {
    (
        code,
        Json(Envelope::<()> {
            status: Status::Fail,
            message: Some(message.into()),
            data: None,
        }),
    )
        .into_response()
}

/// 400 response for a rejected payload, prefixed with the failed action
/// (for example "Failed to add book").
pub fn rejected(action: &str, reason: &ValidationError) -> Response {
    let detail = match reason {
        ValidationError::MissingName => "Please provide the book name",
        ValidationError::ReadPageExceedsPageCount => "readPage must not be greater than pageCount",
    };
    fail(StatusCode::BAD_REQUEST, format!("{action}. {detail}"))
}
