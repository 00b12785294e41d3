use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};
use rust_decimal::Decimal;

use crate::modules::orders::core::order::{CheckoutRequest, OrderItem};
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct GqlOrderItemInput {
    #[graphql(name = "produtoId")]
    pub product_id: u64,
    #[graphql(name = "quantidade")]
    pub quantity: u32,
}

#[derive(SimpleObject)]
pub struct GqlOrderConfirmation {
    pub order_id: u64,
    pub total_final: Decimal,
    /// RFC 3339 timestamp.
    pub placed_at: String,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn confirmar_carrinho(
        &self,
        context: &Context<'_>,
        items: Vec<GqlOrderItemInput>,
        coupon: Option<String>,
    ) -> GqlResult<GqlOrderConfirmation> {
        let state = context.data_unchecked::<AppState>();

        let request = CheckoutRequest {
            items: items
                .into_iter()
                .map(|item| OrderItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
            coupon,
        };

        let order = state
            .confirm_order_handler
            .handle(request)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlOrderConfirmation {
            order_id: order.id,
            total_final: order.total_final,
            placed_at: order.placed_at.to_rfc3339(),
        })
    }
}
