use crate::modules::catalog::adapters::outbound::product_repository_in_memory::InMemoryProductRepository;
use crate::modules::catalog::use_cases::create_product::handler::CreateProductHandler;
use crate::modules::catalog::use_cases::list_products::queries_port::ProductQueries;
use crate::modules::catalog::use_cases::update_product::handler::UpdateProductHandler;
use crate::modules::orders::adapters::outbound::order_repository_in_memory::InMemoryOrderRepository;
use crate::modules::orders::use_cases::confirm_order::handler::ConfirmOrderHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ProductQueries + Send + Sync>,
    pub products: Arc<InMemoryProductRepository>,
    pub create_product_handler: Arc<CreateProductHandler<InMemoryProductRepository>>,
    pub update_product_handler: Arc<UpdateProductHandler<InMemoryProductRepository>>,
    pub confirm_order_handler:
        Arc<ConfirmOrderHandler<InMemoryProductRepository, InMemoryOrderRepository>>,
}

impl AppState {
    pub fn in_memory(products: InMemoryProductRepository, orders: InMemoryOrderRepository) -> Self {
        let products = Arc::new(products);
        let orders = Arc::new(orders);
        Self {
            queries: products.clone(),
            create_product_handler: Arc::new(CreateProductHandler::new(products.clone())),
            update_product_handler: Arc::new(UpdateProductHandler::new(products.clone())),
            confirm_order_handler: Arc::new(ConfirmOrderHandler::new(products.clone(), orders)),
            products,
        }
    }

    /// The school catalog and no orders.
    pub fn seeded() -> Self {
        Self::in_memory(
            InMemoryProductRepository::seeded(),
            InMemoryOrderRepository::new(),
        )
    }
}
