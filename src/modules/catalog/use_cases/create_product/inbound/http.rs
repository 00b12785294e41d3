use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::catalog::adapters::outbound::product_repository::RepositoryError;
use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use crate::modules::catalog::use_cases::create_product::handler::ApplicationError;
use crate::shell::http::detail_response;
use crate::shell::state::AppState;

/// Map a catalog write outcome to a response. Shared with the update endpoint.
pub fn error_response(err: ApplicationError) -> Response {
    match err {
        ApplicationError::Invalid(reason) => {
            detail_response(StatusCode::UNPROCESSABLE_ENTITY, reason.to_string())
        }
        ApplicationError::Repository(RepositoryError::NotFound(_)) => {
            detail_response(StatusCode::NOT_FOUND, "Produto não encontrado")
        }
        ApplicationError::Repository(err) => {
            tracing::error!(error = %err, "product write failed");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao salvar produto")
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return detail_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    match state.create_product_handler.handle(draft).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(err) => error_response(err),
    }
}
