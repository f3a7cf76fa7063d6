use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

use crate::modules::books::use_cases::add_book::inbound::graphql::AddBookMutation;
use crate::modules::books::use_cases::delete_book::inbound::graphql::DeleteBookMutation;
use crate::modules::books::use_cases::get_book::inbound::graphql::GetBookQuery;
use crate::modules::books::use_cases::list_books::inbound::graphql::ListBooksQuery;
use crate::modules::books::use_cases::update_book::inbound::graphql::UpdateBookMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListBooksQuery, GetBookQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AddBookMutation, UpdateBookMutation, DeleteBookMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
