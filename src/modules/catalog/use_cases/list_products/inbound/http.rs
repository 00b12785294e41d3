use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::catalog::core::query::ProductQuery;
use crate::shell::http::detail_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> impl IntoResponse {
    match state.queries.list_products(&query).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "listing products failed");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao listar produtos")
        }
    }
}
