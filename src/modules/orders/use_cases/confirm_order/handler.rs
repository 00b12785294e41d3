use crate::modules::catalog::adapters::outbound::product_repository::{
    ProductRepository, RepositoryError,
};
use crate::modules::catalog::core::snapshot::CatalogSnapshot;
use crate::modules::orders::adapters::outbound::order_repository::{
    OrderRepository, OrderRepositoryError,
};
use crate::modules::orders::core::order::{CheckoutRequest, Order};
use crate::modules::orders::use_cases::confirm_order::decide::decide_confirm;
use crate::modules::orders::use_cases::confirm_order::decision::{DecideError, Decision};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Products(#[from] RepositoryError),

    #[error(transparent)]
    Orders(#[from] OrderRepositoryError),
}

pub struct ConfirmOrderHandler<TProducts, TOrders>
where
    TProducts: ProductRepository + 'static,
    TOrders: OrderRepository + 'static,
{
    products: Arc<TProducts>,
    orders: Arc<TOrders>,
}

impl<TProducts, TOrders> ConfirmOrderHandler<TProducts, TOrders>
where
    TProducts: ProductRepository + 'static,
    TOrders: OrderRepository + 'static,
{
    pub fn new(products: Arc<TProducts>, orders: Arc<TOrders>) -> Self {
        Self { products, orders }
    }

    pub async fn handle(&self, request: CheckoutRequest) -> Result<Order, ApplicationError> {
        let catalog = CatalogSnapshot::from_products(self.products.list().await?);

        match decide_confirm(&catalog, &request) {
            Decision::Accepted {
                reservations,
                total_final,
            } => {
                // Stock may have moved since the read; the repository re-checks under its lock.
                self.products
                    .reserve_stock(&reservations)
                    .await
                    .map_err(|err| match err {
                        RepositoryError::NotFound(product_id) => {
                            ApplicationError::Rejected(DecideError::ProductNotFound(product_id))
                        }
                        RepositoryError::InsufficientStock { product_id, name } => {
                            ApplicationError::Rejected(DecideError::InsufficientStock {
                                product_id,
                                name,
                            })
                        }
                        other => ApplicationError::Products(other),
                    })?;
                let order = self
                    .orders
                    .record(request.items, total_final, Utc::now())
                    .await?;
                tracing::info!(
                    order_id = order.id,
                    total_final = %order.total_final,
                    "order confirmed"
                );
                Ok(order)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "order rejected");
                Err(reason.into())
            }
        }
    }
}
