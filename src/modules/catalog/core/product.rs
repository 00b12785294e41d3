// Product as served by the catalog API.
//
// Purpose
// - One type for the wire contract and the domain: English field names, the backend's
//   Portuguese names on the wire.
//
// Notes
// - Prices are decimals serialized as JSON numbers.
// - Stock is unsigned; a negative stock on the wire is a parse error.

use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use crate::shared::core::primitives::{ProductId, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "estoque")]
    pub stock: Quantity,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(rename = "modelo", default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "imagem", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            category: Some(draft.category),
            sku: draft.sku,
            model: draft.model,
            image: draft.image,
        }
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod product_tests {
    use super::*;
    use crate::tests::fixtures::product_drafts::ProductDraftBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_deserialize_the_backend_shape() {
        let json = r#"{
            "id": 1,
            "nome": "Caderno Universitário 10 matérias",
            "descricao": "Caderno capa dura, 200 folhas.",
            "preco": 32.9,
            "estoque": 30,
            "categoria": "Cadernos",
            "sku": "CAD-10M",
            "modelo": null
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Caderno Universitário 10 matérias");
        assert_eq!(product.price, Decimal::new(329, 1));
        assert_eq!(product.stock, 30);
        assert_eq!(product.category.as_deref(), Some("Cadernos"));
        assert_eq!(product.model, None);
        assert_eq!(product.image, None);
    }

    #[rstest]
    fn it_should_accept_integer_prices_and_missing_metadata() {
        let product: Product =
            serde_json::from_str(r#"{"id":7,"nome":"Régua 30cm","preco":4,"estoque":0}"#).unwrap();
        assert_eq!(product.price, Decimal::new(4, 0));
        assert!(!product.is_in_stock());
        assert_eq!(product.description, None);
    }

    #[rstest]
    fn it_should_reject_a_negative_stock() {
        let result =
            serde_json::from_str::<Product>(r#"{"id":7,"nome":"Régua","preco":4.9,"estoque":-1}"#);
        assert!(result.is_err());
    }

    #[rstest]
    fn it_should_serialize_with_the_wire_names() {
        let product = Product::from_draft(3, ProductDraftBuilder::new().build());
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["nome"], "Caneta Esferográfica Azul");
        assert_eq!(json["preco"], 2.5);
        assert_eq!(json["estoque"], 100);
        assert_eq!(json["categoria"], "Canetas");
        assert!(json.get("modelo").is_none());
    }
}
