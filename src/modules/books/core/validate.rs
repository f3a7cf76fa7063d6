// Pure validation for book payloads.
//
// Purpose
// - Check a candidate payload and derive the `finished` flag on success.
//
// Responsibilities
// - Reject a missing or empty name before looking at the page counters.
// - Reject a read page beyond the page count.
// - Never perform input or output.

use crate::modules::books::core::book::BookInput;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing name")]
    MissingName,

    #[error("readPage exceeds pageCount")]
    ReadPageExceedsPageCount,
}

/// Every mutable field of a book, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
}

pub fn validate(input: BookInput) -> Result<BookDetails, ValidationError> {
    let name = match input.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ValidationError::MissingName),
    };
    if input.read_page > input.page_count {
        return Err(ValidationError::ReadPageExceedsPageCount);
    }

    Ok(BookDetails {
        name,
        year: input.year,
        author: input.author,
        summary: input.summary,
        publisher: input.publisher,
        page_count: input.page_count,
        read_page: input.read_page,
        finished: input.read_page == input.page_count,
        reading: input.reading,
    })
}
