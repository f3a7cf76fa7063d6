use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};

use crate::modules::books::core::book::BookInput;
use crate::shell::state::AppState;

#[derive(InputObject, Clone)]
#[graphql(name = "BookInput")]
pub struct GqlBookInput {
    pub name: Option<String>,
    #[graphql(default)]
    pub year: i32,
    #[graphql(default)]
    pub author: String,
    #[graphql(default)]
    pub summary: String,
    #[graphql(default)]
    pub publisher: String,
    #[graphql(default)]
    pub page_count: u32,
    #[graphql(default)]
    pub read_page: u32,
    #[graphql(default)]
    pub reading: bool,
}

impl From<GqlBookInput> for BookInput {
    fn from(v: GqlBookInput) -> Self {
        Self {
            name: v.name,
            year: v.year,
            author: v.author,
            summary: v.summary,
            publisher: v.publisher,
            page_count: v.page_count,
            read_page: v.read_page,
            reading: v.reading,
        }
    }
}

#[derive(Default)]
pub struct AddBookMutation;

#[Object]
impl AddBookMutation {
    async fn add_book(&self, context: &Context<'_>, input: GqlBookInput) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let book_id = state
            .books
            .create(input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(ID(book_id))
    }
}
