use async_graphql::{Context, Object};

use crate::modules::books::core::book::BookSummary;
use crate::modules::books::core::filter::{BookFilter, flag_from_int};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "BookSummary")]
pub struct GqlBookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<BookSummary> for GqlBookSummary {
    fn from(v: BookSummary) -> Self {
        Self {
            id: v.id,
            name: v.name,
            publisher: v.publisher,
        }
    }
}

#[derive(Default)]
pub struct ListBooksQuery;

#[Object]
impl ListBooksQuery {
    /// At most one criterion applies: name, then reading, then finished.
    async fn books(
        &self,
        context: &Context<'_>,
        name: Option<String>,
        reading: Option<i64>,
        finished: Option<i64>,
    ) -> Vec<GqlBookSummary> {
        let state = context.data_unchecked::<AppState>();
        let filter = BookFilter::new(
            name,
            reading.and_then(flag_from_int),
            finished.and_then(flag_from_int),
        );
        state
            .books
            .list_all(&filter)
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
