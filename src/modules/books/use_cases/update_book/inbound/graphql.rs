use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::books::use_cases::add_book::inbound::graphql::GqlBookInput;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateBookMutation;

#[Object]
impl UpdateBookMutation {
    async fn update_book(
        &self,
        context: &Context<'_>,
        id: ID,
        input: GqlBookInput,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .books
            .update(&id, input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
