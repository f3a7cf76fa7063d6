use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::books::core::book::Book;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Book")]
pub struct GqlBook {
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
    pub inserted_at: String,
    pub updated_at: String,
}

impl From<Book> for GqlBook {
    fn from(v: Book) -> Self {
        Self {
            id: v.id,
            name: v.name,
            year: v.year,
            author: v.author,
            summary: v.summary,
            publisher: v.publisher,
            page_count: v.page_count,
            read_page: v.read_page,
            finished: v.finished,
            reading: v.reading,
            inserted_at: v.inserted_at.to_rfc3339(),
            updated_at: v.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Default)]
pub struct GetBookQuery;

#[Object]
impl GetBookQuery {
    async fn book(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlBook> {
        let state = context.data_unchecked::<AppState>();
        let book = state
            .books
            .get_by_id(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(book.into())
    }
}
