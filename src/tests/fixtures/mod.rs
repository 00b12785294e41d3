pub mod product_drafts;
pub mod products;
