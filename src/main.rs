use std::env;

use anyhow::Context;
use payroll_engine::api::{create_router, AppState};
use payroll_engine::calculation::PayrollEngine;
use payroll_engine::config::ConfigLoader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payroll_engine=debug,axum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = match env::var("PAYROLL_RATES_PATH") {
        Ok(path) => {
            tracing::info!("Loading rate table from {}", path);
            ConfigLoader::load(&path)
                .with_context(|| format!("loading rates from {}", path))?
        }
        Err(_) => {
            tracing::info!("PAYROLL_RATES_PATH not set, using built-in Moroccan rates");
            ConfigLoader::moroccan_default()
        }
    };
    let engine = PayrollEngine::new(loader.into_rate_table()).context("invalid rate table")?;

    let bind_addr =
        env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;

    tracing::info!("Payroll engine listening on http://{}", bind_addr);
    axum::serve(listener, create_router(AppState::new(engine))).await?;

    Ok(())
}
