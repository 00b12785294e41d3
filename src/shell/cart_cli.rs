//! Storefront cart client.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! storefront_cart products --search caderno --sort preco_asc
//!
//! # Fill the cart and look at it
//! storefront_cart add 1 2
//! storefront_cart set 1 3
//! storefront_cart show
//!
//! # Place the order with the student coupon
//! storefront_cart checkout --coupon ALUNO10
//!
//! # Register a product
//! storefront_cart admin-create --nome "Régua 15cm" --preco 2.90 --estoque 40 --categoria Réguas
//! ```
//!
//! The cart lives in `STOREFRONT_CART_FILE`; the backend is `STOREFRONT_API_URL`.
//! `--offline` works against the built-in stationery catalog instead.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, fmt};

use school_supplies::modules::cart::adapters::outbound::catalog_provider::CatalogProvider;
use school_supplies::modules::cart::adapters::outbound::catalog_provider_http::HttpCatalogProvider;
use school_supplies::modules::cart::adapters::outbound::catalog_provider_in_memory::InMemoryCatalogProvider;
use school_supplies::modules::cart::adapters::outbound::checkout_gateway::CheckoutGateway;
use school_supplies::modules::cart::adapters::outbound::checkout_gateway_http::HttpCheckoutGateway;
use school_supplies::modules::cart::adapters::outbound::checkout_gateway_in_memory::InMemoryCheckoutGateway;
use school_supplies::modules::cart::adapters::outbound::product_admin::{AdminError, ProductAdmin};
use school_supplies::modules::cart::adapters::outbound::product_admin_http::HttpProductAdmin;
use school_supplies::modules::cart::store::{CartError, CartStore};
use school_supplies::modules::catalog::core::product::Product;
use school_supplies::modules::catalog::core::query::{ProductQuery, ProductSort};
use school_supplies::modules::catalog::use_cases::create_product::command::ProductDraft;
use school_supplies::shared::core::primitives::{ProductId, Quantity, format_brl};
use school_supplies::shared::infrastructure::key_value_storage::json_file::JsonFileStorage;
use school_supplies::shared::infrastructure::storefront_api::StorefrontApiClient;
use school_supplies::shell::config::AppConfig;

#[derive(Parser)]
#[command(name = "storefront_cart")]
#[command(author, version, about = "School supplies storefront cart")]
struct Cli {
    /// Use the built-in stationery catalog instead of the backend
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Products {
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        categoria: Option<String>,

        /// `preco_asc`, `preco_desc` or `nome`
        #[arg(long, value_parser = parse_sort)]
        sort: Option<ProductSort>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Add units of a product to the cart
    Add {
        id: ProductId,
        #[arg(default_value_t = 1)]
        quantity: Quantity,
    },
    /// Overwrite the quantity of a cart line
    Set { id: ProductId, quantity: Quantity },
    /// Drop a product from the cart
    Remove { id: ProductId },
    /// Show the cart
    Show,
    /// Place the order
    Checkout {
        #[arg(long)]
        coupon: Option<String>,
    },
    /// Register a new product
    AdminCreate {
        #[arg(long)]
        nome: String,

        #[arg(long)]
        preco: Decimal,

        #[arg(long)]
        estoque: Quantity,

        #[arg(long)]
        categoria: String,

        #[arg(long)]
        descricao: Option<String>,

        #[arg(long)]
        sku: Option<String>,
    },
}

fn parse_sort(value: &str) -> Result<ProductSort, String> {
    ProductSort::parse(value).ok_or_else(|| format!("unknown sort order: {value}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let storage = Arc::new(JsonFileStorage::new(&config.cart_file));

    if cli.offline {
        let catalog = Arc::new(InMemoryCatalogProvider::stationery());
        let gateway = Arc::new(InMemoryCheckoutGateway::new(catalog.clone()));
        let store = CartStore::new(storage, catalog, gateway);
        return run(cli.command, &store, None).await;
    }

    let client = StorefrontApiClient::new(config.api_url.clone())?;
    let catalog = Arc::new(HttpCatalogProvider::new(client.clone()));
    let gateway = Arc::new(HttpCheckoutGateway::new(client.clone()));
    let admin = HttpProductAdmin::new(client);
    let store = CartStore::new(storage, catalog, gateway);
    run(cli.command, &store, Some(&admin)).await
}

async fn run<TCatalog, TCheckout>(
    command: Commands,
    store: &CartStore<JsonFileStorage, TCatalog, TCheckout>,
    admin: Option<&HttpProductAdmin>,
) -> anyhow::Result<()>
where
    TCatalog: CatalogProvider + 'static,
    TCheckout: CheckoutGateway + 'static,
{
    if let Commands::AdminCreate {
        nome,
        preco,
        estoque,
        categoria,
        descricao,
        sku,
    } = command
    {
        let Some(admin) = admin else {
            anyhow::bail!("admin-create needs the backend; drop --offline");
        };
        let draft = ProductDraft {
            name: nome,
            description: descricao,
            price: preco,
            stock: estoque,
            category: categoria,
            sku,
            model: None,
            image: None,
        };
        return match admin.create_product(&draft).await {
            Ok(product) => {
                println!("Produto cadastrado: {}", describe(&product));
                Ok(())
            }
            Err(err @ AdminError::Transport(_)) => Err(err.into()),
            Err(err) => anyhow::bail!(err.user_message()),
        };
    }

    let reconciliation = store.refresh_catalog().await?;
    for product_id in &reconciliation.purged {
        println!("Produto {product_id} saiu do catálogo e foi removido do carrinho.");
    }
    for product_id in &reconciliation.clamped {
        println!("Quantidade do produto {product_id} ajustada ao estoque.");
    }

    match command {
        Commands::Products {
            search,
            categoria,
            sort,
            page,
            limit,
        } => {
            let mut query = ProductQuery::page(page, limit);
            query.search = search;
            query.category = categoria;
            if let Some(sort) = sort {
                query = query.sorted_by(sort);
            }
            let snapshot = store.catalog().await;
            let listing = query.apply(snapshot.products().cloned());
            for product in &listing.items {
                println!("{}", describe(product));
            }
            println!("{} de {} produtos", listing.items.len(), listing.total);
        }
        Commands::Add { id, quantity } => {
            report(store.add_item(id, quantity).await)?;
            print!("{}", store.view().await);
        }
        Commands::Set { id, quantity } => {
            report(store.set_quantity(id, quantity).await)?;
            print!("{}", store.view().await);
        }
        Commands::Remove { id } => {
            store.remove_item(id).await?;
            print!("{}", store.view().await);
        }
        Commands::Show => print!("{}", store.view().await),
        Commands::Checkout { coupon } => {
            let confirmation = report(store.checkout(coupon.as_deref()).await)?;
            println!(
                "Pedido {} confirmado. Total: {}",
                confirmation.order_id,
                format_brl(confirmation.total_final)
            );
        }
        Commands::AdminCreate { .. } => {}
    }
    Ok(())
}

/// Turn shopper-facing rejections into a plain message; keep the rest as errors.
fn report<T>(result: Result<T, CartError>) -> anyhow::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err @ (CartError::Storage(_) | CartError::Catalog(_) | CartError::Encode(_))) => {
            Err(err.into())
        }
        Err(err) => anyhow::bail!(err.to_string()),
    }
}

fn describe(product: &Product) -> String {
    format!(
        "{:>4}  {}  {}  (estoque: {})",
        product.id,
        product.name,
        format_brl(product.price),
        product.stock
    )
}
