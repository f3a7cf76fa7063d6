// Ports define what the transport layer needs from a book store, without implementing it.
//
// Boundaries
// - No concrete storage here. Adapters implement BookRepository in the adapters layer.
// - Every failing operation leaves the collection unchanged.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::books::core::book::{Book, BookInput, BookSummary};
use crate::modules::books::core::filter::BookFilter;
use crate::modules::books::core::validate::ValidationError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("book {id} not found")]
pub struct NotFoundError {
    pub id: String,
}

impl NotFoundError {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Validates and stores a new book, returning its generated id.
    async fn create(&self, input: BookInput) -> Result<String, ValidationError>;

    /// Lists `{id, name, publisher}` projections in insertion order.
    async fn list_all(&self, filter: &BookFilter) -> Vec<BookSummary>;

    async fn get_by_id(&self, id: &str) -> Result<Book, NotFoundError>;

    /// Replaces every mutable field of the book. Validation runs before the lookup.
    async fn update(&self, id: &str, input: BookInput) -> Result<(), BookError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), NotFoundError>;

    async fn count(&self) -> usize;
}
