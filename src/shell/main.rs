use school_supplies::shell::config::AppConfig;
use school_supplies::shell::http;
use school_supplies::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let app = http::router(AppState::seeded());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("REST API: http://{}/produtos", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
