// In memory book repository.
//
// Purpose
// - Own the process-lifetime collection of books.
//
// Responsibilities
// - Keep books in insertion order.
// - Hold the write lock across every read-check-mutate sequence, so readers
//   never observe a partially applied change.
// - Re-draw an identifier that is already taken.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::books::core::book::{Book, BookInput, BookSummary};
use crate::modules::books::core::filter::{BookFilter, select};
use crate::modules::books::core::ports::{BookError, BookRepository, NotFoundError};
use crate::modules::books::core::validate::{ValidationError, validate};
use crate::shared::core::primitives::{Clock, IdGenerator, SystemClock, UuidIdGenerator};

pub struct InMemoryBookRepository<TIds = UuidIdGenerator, TClock = SystemClock> {
    books: RwLock<Vec<Book>>,
    ids: TIds,
    clock: TClock,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::with(UuidIdGenerator, SystemClock)
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<TIds, TClock> InMemoryBookRepository<TIds, TClock>
where
    TIds: IdGenerator,
    TClock: Clock,
{
    pub fn with(ids: TIds, clock: TClock) -> Self {
        Self {
            books: RwLock::new(Vec::new()),
            ids,
            clock,
        }
    }

    fn fresh_id(&self, books: &[Book]) -> String {
        loop {
            let id = self.ids.next_id();
            if !books.iter().any(|book| book.id == id) {
                return id;
            }
            tracing::warn!(book_id = %id, "generated book id already taken, drawing another");
        }
    }
}

#[async_trait]
impl<TIds, TClock> BookRepository for InMemoryBookRepository<TIds, TClock>
where
    TIds: IdGenerator,
    TClock: Clock,
{
    async fn create(&self, input: BookInput) -> Result<String, ValidationError> {
        let details = validate(input).inspect_err(|reason| {
            tracing::warn!(%reason, "rejected new book");
        })?;

        let mut books = self.books.write().await;
        let id = self.fresh_id(&books);
        books.push(Book::new(id.clone(), details, self.clock.now()));
        tracing::info!(book_id = %id, total = books.len(), "book added");
        Ok(id)
    }

    async fn list_all(&self, filter: &BookFilter) -> Vec<BookSummary> {
        let books = self.books.read().await;
        let selected = select(&books, filter);
        tracing::debug!(
            criterion = ?filter.criterion(),
            selected = selected.len(),
            total = books.len(),
            "books listed"
        );
        selected
    }

    async fn get_by_id(&self, id: &str) -> Result<Book, NotFoundError> {
        let books = self.books.read().await;
        match books.iter().find(|book| book.id == id) {
            Some(book) => {
                tracing::debug!(book_id = %id, "book fetched");
                Ok(book.clone())
            }
            None => {
                tracing::warn!(book_id = %id, "book not found");
                Err(NotFoundError::new(id))
            }
        }
    }

    async fn update(&self, id: &str, input: BookInput) -> Result<(), BookError> {
        let details = validate(input).inspect_err(|reason| {
            tracing::warn!(book_id = %id, %reason, "rejected book update");
        })?;

        let mut books = self.books.write().await;
        let Some(book) = books.iter_mut().find(|book| book.id == id) else {
            tracing::warn!(book_id = %id, "cannot update unknown book");
            return Err(NotFoundError::new(id).into());
        };
        book.apply(details, self.clock.now());
        tracing::info!(book_id = %id, "book updated");
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), NotFoundError> {
        let mut books = self.books.write().await;
        let Some(index) = books.iter().position(|book| book.id == id) else {
            tracing::warn!(book_id = %id, "cannot delete unknown book");
            return Err(NotFoundError::new(id));
        };
        books.remove(index);
        tracing::info!(book_id = %id, total = books.len(), "book deleted");
        Ok(())
    }

    async fn count(&self) -> usize {
        self.books.read().await.len()
    }
}
