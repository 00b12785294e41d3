use async_graphql::{Context, Object, Result as GqlResult};
use rust_decimal::Decimal;

use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::core::query::{ProductPage, ProductQuery};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProduct {
    pub id: u64,
    #[graphql(name = "nome")]
    pub name: String,
    #[graphql(name = "descricao")]
    pub description: Option<String>,
    #[graphql(name = "preco")]
    pub price: Decimal,
    #[graphql(name = "estoque")]
    pub stock: u32,
    #[graphql(name = "categoria")]
    pub category: Option<String>,
    pub sku: Option<String>,
    #[graphql(name = "modelo")]
    pub model: Option<String>,
    #[graphql(name = "imagem")]
    pub image: Option<String>,
}

impl From<Product> for GqlProduct {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            stock: p.stock,
            category: p.category,
            sku: p.sku,
            model: p.model,
            image: p.image,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProductPage {
    pub items: Vec<GqlProduct>,
    pub total: u64,
}

impl From<ProductPage> for GqlProductPage {
    fn from(page: ProductPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn produtos(
        &self,
        context: &Context<'_>,
        page: Option<u32>,
        limit: Option<u32>,
        sort: Option<String>,
        search: Option<String>,
        categoria: Option<String>,
    ) -> GqlResult<GqlProductPage> {
        let state = context.data_unchecked::<AppState>();
        let query = ProductQuery {
            page,
            limit,
            sort,
            search,
            category: categoria,
        };
        let page = state.queries.list_products(&query).await?;
        Ok(page.into())
    }
}
