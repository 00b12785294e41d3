use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::orders::core::order::{CheckoutRequest, OrderConfirmation};
use crate::modules::orders::use_cases::confirm_order::decision::DecideError;
use crate::modules::orders::use_cases::confirm_order::handler::ApplicationError;
use crate::shell::http::detail_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CheckoutRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return detail_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    match state.confirm_order_handler.handle(request).await {
        Ok(order) => Json(OrderConfirmation::from(&order)).into_response(),
        Err(ApplicationError::Rejected(reason)) => {
            let status = match reason {
                DecideError::ProductNotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_REQUEST,
            };
            detail_response(status, reason.to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "order confirmation failed");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao finalizar pedido.")
        }
    }
}

#[cfg(test)]
mod confirm_order_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    use crate::modules::catalog::adapters::outbound::product_repository::ProductRepository;
    use crate::modules::catalog::adapters::outbound::product_repository_in_memory::InMemoryProductRepository;
    use crate::modules::orders::adapters::outbound::order_repository_in_memory::InMemoryOrderRepository;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::products::ProductBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/carrinho/confirmar", post(handle))
            .with_state(state)
    }

    async fn post_json(state: AppState, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(
                Request::post("/carrinho/confirmar")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn it_should_confirm_with_the_student_discount() {
        let state = AppState::seeded();
        let body = r#"{"items":[{"produto_id":1,"quantidade":2},{"produto_id":3,"quantidade":4}],"coupon":"aluno10"}"#;
        let (status, json) = post_json(state.clone(), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["order_id"], 1);
        assert_eq!(json["total_final"], 68.22);
        assert!(json["placed_at"].is_string());
        assert_eq!(state.products.get(1).await.unwrap().unwrap().stock, 28);
    }

    #[tokio::test]
    async fn it_should_return_400_for_an_empty_cart() {
        let (status, json) = post_json(AppState::seeded(), r#"{"items":[]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "Carrinho vazio");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_product() {
        let body = r#"{"items":[{"produto_id":999,"quantidade":1}]}"#;
        let (status, json) = post_json(AppState::seeded(), body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Produto id 999 não encontrado");
    }

    #[tokio::test]
    async fn it_should_return_400_for_insufficient_stock_and_keep_the_stock() {
        let state = AppState::seeded();
        let body = r#"{"items":[{"produto_id":3,"quantidade":1},{"produto_id":10,"quantidade":11}]}"#;
        let (status, json) = post_json(state.clone(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "Estoque insuficiente para Mochila Executiva");
        assert_eq!(state.products.get(3).await.unwrap().unwrap().stock, 100);
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_zero_quantity() {
        let body = r#"{"items":[{"produto_id":3,"quantidade":0}]}"#;
        let (status, _) = post_json(AppState::seeded(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_total_leaves_the_decimal_range() {
        let products = InMemoryProductRepository::with_products(vec![
            ProductBuilder::new(21)
                .name("Caneta de Ouro")
                .price(Decimal::MAX)
                .stock(5)
                .build(),
        ]);
        let state = AppState::in_memory(products, InMemoryOrderRepository::new());
        let body = r#"{"items":[{"produto_id":21,"quantidade":2}]}"#;
        let (status, json) = post_json(state.clone(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "Valor do pedido excede o limite permitido");
        assert_eq!(state.products.get(21).await.unwrap().unwrap().stock, 5);
    }

    #[tokio::test]
    async fn it_should_return_422_on_a_malformed_body() {
        let (status, _) = post_json(AppState::seeded(), r#"{"itens":"nada"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_orders_cannot_be_stored() {
        let mut orders = InMemoryOrderRepository::new();
        orders.toggle_offline();
        let state = AppState::in_memory(InMemoryProductRepository::seeded(), orders);
        let body = r#"{"items":[{"produto_id":3,"quantidade":1}]}"#;
        let (status, json) = post_json(state, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["detail"], "Erro ao finalizar pedido.");
    }
}
