// In memory checkout gateway.
//
// Purpose
// - Confirm orders against an in memory catalog, with the backend's pricing and stock rules.
//
// Responsibilities
// - Record every submitted request.
// - Take the ordered stock out of the catalog on success.
// - Simulate a backend refusal, an unreachable backend, or a slow answer on demand.

use crate::modules::cart::adapters::outbound::catalog_provider::CatalogProvider;
use crate::modules::cart::adapters::outbound::catalog_provider_in_memory::InMemoryCatalogProvider;
use crate::modules::cart::adapters::outbound::checkout_gateway::{CheckoutError, CheckoutGateway};
use crate::modules::orders::core::order::{CheckoutRequest, OrderConfirmation};
use crate::modules::orders::use_cases::confirm_order::decide::decide_confirm;
use crate::modules::orders::use_cases::confirm_order::decision::Decision;
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

pub struct InMemoryCheckoutGateway {
    catalog: Arc<InMemoryCatalogProvider>,
    requests: Mutex<Vec<CheckoutRequest>>,
    reject_next: Mutex<Option<String>>,
    last_order_id: AtomicU64,
    delay_confirm_ms: AtomicU64,
    is_offline: AtomicBool,
}

impl InMemoryCheckoutGateway {
    pub fn new(catalog: Arc<InMemoryCatalogProvider>) -> Self {
        Self {
            catalog,
            requests: Mutex::new(Vec::new()),
            reject_next: Mutex::new(None),
            last_order_id: AtomicU64::new(0),
            delay_confirm_ms: AtomicU64::new(0),
            is_offline: AtomicBool::new(false),
        }
    }

    /// Refuse the next order with this message.
    pub async fn reject_next(&self, message: impl Into<String>) {
        *self.reject_next.lock().await = Some(message.into());
    }

    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_delay_confirm_ms(&self, delay_ms: u64) {
        self.delay_confirm_ms.store(delay_ms, Ordering::SeqCst);
    }

    pub async fn requests(&self) -> Vec<CheckoutRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl CheckoutGateway for InMemoryCheckoutGateway {
    async fn confirm(&self, request: &CheckoutRequest) -> Result<OrderConfirmation, CheckoutError> {
        self.requests.lock().await.push(request.clone());

        let delay_ms = self.delay_confirm_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
        }
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(CheckoutError::Transport("connection refused".into()));
        }
        if let Some(message) = self.reject_next.lock().await.take() {
            return Err(CheckoutError::Rejected(message));
        }

        let catalog = self
            .catalog
            .fetch_catalog()
            .await
            .map_err(|err| CheckoutError::Transport(err.to_string()))?;
        match decide_confirm(&catalog, request) {
            Decision::Accepted {
                reservations,
                total_final,
            } => {
                let taken: Vec<_> = reservations
                    .iter()
                    .map(|r| (r.product_id, r.quantity))
                    .collect();
                self.catalog.decrement_stock(&taken).await;
                Ok(OrderConfirmation {
                    order_id: self.last_order_id.fetch_add(1, Ordering::SeqCst) + 1,
                    total_final,
                    placed_at: Some(Utc::now()),
                })
            }
            Decision::Rejected { reason } => Err(CheckoutError::Rejected(reason.to_string())),
        }
    }
}
