use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::catalog::use_cases::create_product::inbound::http as create_product_http;
use crate::modules::catalog::use_cases::delete_product::inbound::http as delete_product_http;
use crate::modules::catalog::use_cases::list_products::inbound::http as list_products_http;
use crate::modules::catalog::use_cases::update_product::inbound::http as update_product_http;
use crate::modules::orders::use_cases::confirm_order::inbound::http as confirm_order_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

/// Error body shared by every endpoint: `{"detail": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub fn detail_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
        .into_response()
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/produtos",
            get(list_products_http::handle).post(create_product_http::handle),
        )
        .route(
            "/produtos/{id}",
            put(update_product_http::handle).delete(delete_product_http::handle),
        )
        .route("/carrinho/confirmar", post(confirm_order_http::handle))
        .merge(graphql::router(state.clone()))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
