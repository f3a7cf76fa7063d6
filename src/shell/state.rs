use crate::modules::books::adapters::outbound::books_in_memory::InMemoryBookRepository;
use crate::modules::books::core::ports::BookRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    /// Process-lifetime state backed by the in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBookRepository::new()))
    }
}
