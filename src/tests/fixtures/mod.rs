pub mod book_input;
pub mod http;
pub mod primitives;
pub mod state;
