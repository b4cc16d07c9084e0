//! Domain Store server binary.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use domain_store::adapters::http::{self, AppState};
use domain_store::adapters::mercadopago::{MercadoPagoConfig, MercadoPagoGateway};
use domain_store::adapters::postgres::{PostgresDomainRegistry, PostgresOrderStore};
use domain_store::adapters::rdap::{RdapClient, RdapConfig as RdapClientConfig};
use domain_store::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    tracing::info!(
        environment = ?config.server.environment,
        "starting domain-store"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    let gateway_config = MercadoPagoConfig::new(config.payment.access_token.clone())
        .with_api_base_url(config.payment.api_base_url.clone())
        .with_checkout_base_url(config.payment.checkout_base_url.clone())
        .with_timeout(Duration::from_secs(config.payment.timeout_secs));
    let gateway = MercadoPagoGateway::new(gateway_config);
    if !config.payment.access_token.trim().is_empty() {
        tracing::info!("payment gateway configured");
    } else {
        tracing::warn!("payment gateway access token not set, payment lookups disabled");
    }

    let rdap = RdapClient::new(
        RdapClientConfig::new(config.rdap.base_url.clone())
            .with_timeout(Duration::from_secs(config.rdap.timeout_secs)),
    );

    let state = AppState {
        orders: Arc::new(PostgresOrderStore::new(pool.clone())),
        registry: Arc::new(PostgresDomainRegistry::new(pool)),
        gateway: Arc::new(gateway),
        availability: Arc::new(rdap),
        simulation_enabled: config.simulation_enabled(),
    };

    let app = http::app(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
        &config.server.cors_origins_list(),
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
