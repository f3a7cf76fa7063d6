// Selection and projection of books for listing.
//
// At most one criterion applies, picked by precedence: name, then reading,
// then finished, then none. Criteria are never combined.

use crate::modules::books::core::book::{Book, BookSummary};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Holds the lowercased needle.
    NameContains(String),
    Reading(bool),
    Finished(bool),
    All,
}

impl BookFilter {
    pub fn new(name: Option<String>, reading: Option<bool>, finished: Option<bool>) -> Self {
        Self {
            name,
            reading,
            finished,
        }
    }

    /// Builds a filter from raw query values; flags other than 0 and 1 count as absent.
    pub fn from_query(name: Option<String>, reading: Option<&str>, finished: Option<&str>) -> Self {
        Self::new(
            name,
            reading.and_then(parse_flag),
            finished.and_then(parse_flag),
        )
    }

    pub fn criterion(&self) -> Criterion {
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            return Criterion::NameContains(name.to_lowercase());
        }
        if let Some(reading) = self.reading {
            return Criterion::Reading(reading);
        }
        if let Some(finished) = self.finished {
            return Criterion::Finished(finished);
        }
        Criterion::All
    }
}

impl Criterion {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Criterion::NameContains(needle) => book.name.to_lowercase().contains(needle.as_str()),
            Criterion::Reading(reading) => book.reading == *reading,
            Criterion::Finished(finished) => book.finished == *finished,
            Criterion::All => true,
        }
    }
}

/// Keeps the books matching the filter's criterion, in collection order.
pub fn select(books: &[Book], filter: &BookFilter) -> Vec<BookSummary> {
    let criterion = filter.criterion();
    books
        .iter()
        .filter(|book| criterion.matches(book))
        .map(BookSummary::from)
        .collect()
}

/// Reads the leading integer of a query value the way lenient form parsers do
/// ("1", " 1", "01", "1abc" are all 1) and maps 0/1 to a flag.
pub fn parse_flag(raw: &str) -> Option<bool> {
    let trimmed = raw.trim_start();
    let negative = trimmed.starts_with('-');
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let value: u64 = unsigned[..end].parse().ok()?;
    match (negative, value) {
        (_, 0) => Some(false),
        (false, 1) => Some(true),
        _ => None,
    }
}

pub fn flag_from_int(value: i64) -> Option<bool> {
    match value {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}
