use crate::modules::cart::core::cart::Cart;
use crate::modules::catalog::core::snapshot::CatalogSnapshot;
use crate::shared::core::primitives::ProductId;

/// The cart after bringing every line back within the catalog's bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub cart: Cart,
    /// Lines dropped because the product vanished or sold out.
    pub purged: Vec<ProductId>,
    /// Lines lowered to the product's current stock.
    pub clamped: Vec<ProductId>,
}

impl Reconciliation {
    pub fn changed(&self) -> bool {
        !self.purged.is_empty() || !self.clamped.is_empty()
    }
}

pub fn reconcile(cart: &Cart, catalog: &CatalogSnapshot) -> Reconciliation {
    let mut reconciled = cart.clone();
    let mut purged = Vec::new();
    let mut clamped = Vec::new();

    for line in cart.lines() {
        match catalog.get(line.product_id) {
            None => purged.push(line.product_id),
            Some(product) if product.stock == 0 => purged.push(line.product_id),
            Some(product) if line.quantity > product.stock => {
                clamped.push(line.product_id);
                reconciled.set(line.product_id, product.stock);
            }
            Some(_) => {}
        }
    }
    for product_id in &purged {
        reconciled.remove(*product_id);
    }

    Reconciliation {
        cart: reconciled,
        purged,
        clamped,
    }
}
