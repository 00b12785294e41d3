use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

pub use crate::modules::catalog::use_cases::list_products::inbound::graphql::QueryRoot;
pub use crate::modules::orders::use_cases::confirm_order::inbound::graphql::MutationRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// `/gql`: GraphiQL on GET, queries and mutations on POST.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
