use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::catalog::adapters::outbound::product_repository::{
    ProductRepository, RepositoryError,
};
use crate::shared::core::primitives::ProductId;
use crate::shell::http::detail_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    match state.products.delete(product_id).await {
        Ok(()) => {
            tracing::info!(product_id, "product deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(RepositoryError::NotFound(_)) => {
            detail_response(StatusCode::NOT_FOUND, "Produto não encontrado")
        }
        Err(err) => {
            tracing::error!(error = %err, "product delete failed");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao remover produto")
        }
    }
}
