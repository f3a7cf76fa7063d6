use crate::modules::books::adapters::outbound::books_in_memory::InMemoryBookRepository;
use crate::shell::state::AppState;
use crate::tests::fixtures::primitives::{SequenceIdGenerator, SteppingClock};
use std::sync::Arc;

/// Application state over a repository with `book-0001`, `book-0002`, ... ids.
pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryBookRepository::with(
        SequenceIdGenerator::new("book"),
        SteppingClock::new(),
    )))
}
