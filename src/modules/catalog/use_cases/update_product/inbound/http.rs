use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use crate::modules::catalog::use_cases::create_product::inbound::http::error_response;
use crate::shared::core::primitives::ProductId;
use crate::shell::http::detail_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    body: Result<Json<ProductDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return detail_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    match state.update_product_handler.handle(product_id, draft).await {
        Ok(product) => Json(product).into_response(),
        Err(err) => error_response(err),
    }
}
