// Catalog listing query: filters, sort order and paging for GET /produtos.
//
// Purpose
// - Share one definition of the query string between the HTTP client and the backend.
// - Apply the query to an in memory product list.
//
// Notes
// - `page` is 1-based. `total` in the resulting page counts the filtered set before paging.
// - Unknown sort values are ignored rather than rejected.

use crate::modules::catalog::core::product::Product;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    PriceAsc,
    PriceDesc,
    Name,
}

impl ProductSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "preco_asc" => Some(Self::PriceAsc),
            "preco_desc" => Some(Self::PriceDesc),
            "nome" => Some(Self::Name),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAsc => "preco_asc",
            Self::PriceDesc => "preco_desc",
            Self::Name => "nome",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: u64,
}

impl ProductQuery {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, sort: ProductSort) -> Self {
        self.sort = Some(sort.as_str().to_string());
        self
    }

    pub fn page_number(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT)
    }

    pub fn sort_order(&self) -> Option<ProductSort> {
        self.sort.as_deref().and_then(ProductSort::parse)
    }

    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .is_none_or(|term| {
                product
                    .name
                    .to_lowercase()
                    .contains(&term.to_lowercase())
            });
        let matches_category = self
            .category
            .as_deref()
            .filter(|category| !category.is_empty())
            .is_none_or(|category| product.category.as_deref() == Some(category));
        matches_search && matches_category
    }

    pub fn apply(&self, products: impl IntoIterator<Item = Product>) -> ProductPage {
        let mut items: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();

        match self.sort_order() {
            Some(ProductSort::PriceAsc) => items.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(ProductSort::PriceDesc) => items.sort_by(|a, b| b.price.cmp(&a.price)),
            Some(ProductSort::Name) => {
                items.sort_by_key(|p| p.name.to_lowercase());
            }
            None => {}
        }

        let total = items.len() as u64;
        let limit = self.page_limit() as usize;
        let start = (self.page_number() as usize - 1).saturating_mul(limit);
        if start >= items.len() {
            return ProductPage {
                items: Vec::new(),
                total,
            };
        }
        let end = start.saturating_add(limit).min(items.len());
        ProductPage {
            items: items.drain(start..end).collect(),
            total,
        }
    }
}
