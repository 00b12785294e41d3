// Seed data for the catalog adapters.
//
// - `school_catalog`: the twenty products the backend starts with, ids assigned 1..=20 in order.
// - `stationery_mock`: the fifteen-product offline catalog the storefront falls back to.

use crate::modules::catalog::core::product::Product;
use crate::modules::catalog::use_cases::create_product::command::ProductDraft;
use rust_decimal::Decimal;

fn draft(
    name: &str,
    description: &str,
    cents: i64,
    stock: u32,
    category: &str,
    sku: &str,
) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: Some(description.to_string()),
        price: Decimal::new(cents, 2),
        stock,
        category: category.to_string(),
        sku: Some(sku.to_string()),
        model: None,
        image: None,
    }
}

pub fn school_catalog() -> Vec<ProductDraft> {
    vec![
        draft("Caderno Universitário 10 matérias", "Caderno capa dura, 200 folhas.", 3290, 30, "Cadernos", "CAD-10M"),
        draft("Caderno Brochura Pequeno", "Caderno brochura 48 folhas.", 750, 50, "Cadernos", "CAD-BRO-PEQ"),
        draft("Caneta Esferográfica Azul", "Caneta azul, escrita macia.", 250, 100, "Canetas", "CAN-AZUL"),
        draft("Caneta Esferográfica Preta", "Caneta preta, corpo transparente.", 250, 80, "Canetas", "CAN-PRETA"),
        draft("Caneta Esferográfica Vermelha", "Caneta vermelha, ponta fina.", 250, 60, "Canetas", "CAN-VERM"),
        draft("Lápis Preto HB", "Lápis preto, madeira reflorestada.", 120, 120, "Lápis", "LAPIS-HB"),
        draft("Lápis de Cor 12 cores", "Estojo com 12 lápis de cor.", 1490, 40, "Lápis", "LAPIS-COR-12"),
        draft("Lápis de Cor 24 cores", "Estojo com 24 lápis de cor.", 2490, 30, "Lápis", "LAPIS-COR-24"),
        draft("Mochila Escolar Juvenil", "Mochila resistente, várias cores.", 9990, 20, "Mochilas", "MOCH-JUV"),
        draft("Mochila Executiva", "Mochila para notebook, preta.", 14990, 10, "Mochilas", "MOCH-EXEC"),
        draft("Borracha Branca", "Borracha macia, não mancha.", 180, 90, "Acessórios", "BORR-BRANCA"),
        draft("Apontador Duplo", "Apontador com depósito.", 350, 70, "Acessórios", "APONT-DUPLO"),
        draft("Régua 30cm", "Régua plástica flexível.", 490, 60, "Acessórios", "REGUA-30"),
        draft("Cola Branca 90g", "Cola branca escolar, 90g.", 320, 50, "Acessórios", "COLA-90G"),
        draft("Tesoura Escolar", "Tesoura ponta arredondada.", 450, 40, "Acessórios", "TESOURA-ESC"),
        draft("Estojo Simples", "Estojo escolar, zíper reforçado.", 1290, 35, "Acessórios", "ESTOJO-SIMP"),
        draft("Marca Texto Amarelo", "Marca texto cor amarela.", 590, 55, "Acessórios", "MT-AMARELO"),
        draft("Compasso Escolar", "Compasso com ponta protegida.", 890, 25, "Acessórios", "COMPASSO"),
        draft("Bloco de Notas Adesivas", "Bloco post-it 76x76mm.", 650, 60, "Acessórios", "BLOCO-POSTIT"),
        draft("Agenda Escolar 2025", "Agenda diária, capa dura.", 1990, 18, "Acessórios", "AGENDA-2025"),
    ]
}

fn mock(id: u64, name: &str, cents: i64, stock: u32, photo: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: None,
        price: Decimal::new(cents, 2),
        stock,
        category: None,
        sku: None,
        model: None,
        image: Some(format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&w=400&h=400&fit=crop"
        )),
    }
}

pub fn stationery_mock() -> Vec<Product> {
    vec![
        mock(1, "Caderno Universitário 96 folhas", 1890, 10, 4145195),
        mock(2, "Lápis Preto HB", 150, 50, 159711),
        mock(3, "Borracha Branca", 200, 30, 159778),
        mock(4, "Caneta Azul", 250, 40, 356056),
        mock(5, "Mochila Escolar", 8990, 8, 1027130),
        mock(6, "Estojo Simples", 1490, 15, 159776),
        mock(7, "Régua 30cm", 350, 25, 209679),
        mock(8, "Apontador Duplo", 280, 20, 159777),
        mock(9, "Cola Branca 90g", 450, 18, 159775),
        mock(10, "Tesoura Escolar", 690, 22, 159774),
        mock(11, "Pasta Plástica com Elástico", 590, 17, 159779),
        mock(12, "Marca Texto Amarelo", 390, 30, 51342),
        mock(13, "Compasso Escolar", 790, 10, 159780),
        mock(14, "Bloco de Notas Adesivas", 420, 25, 159781),
        mock(15, "Corretivo Líquido", 550, 12, 159782),
    ]
}
