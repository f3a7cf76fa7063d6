use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::books::core::validate::BookDetails;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new(id: String, details: BookDetails, at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: details.name,
            year: details.year,
            author: details.author,
            summary: details.summary,
            publisher: details.publisher,
            page_count: details.page_count,
            read_page: details.read_page,
            finished: details.finished,
            reading: details.reading,
            inserted_at: at,
            updated_at: at,
        }
    }

    /// Replaces every mutable field. `id` and `inserted_at` are kept, and
    /// `updated_at` never moves backwards.
    pub fn apply(&mut self, details: BookDetails, at: DateTime<Utc>) {
        self.name = details.name;
        self.year = details.year;
        self.author = details.author;
        self.summary = details.summary;
        self.publisher = details.publisher;
        self.page_count = details.page_count;
        self.read_page = details.read_page;
        self.finished = details.finished;
        self.reading = details.reading;
        self.updated_at = at.max(self.updated_at);
    }
}

/// Payload for creating or replacing a book. `finished` is not part of it: it
/// is always derived from the page counters. Omitted fields take their zero
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookInput {
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}
