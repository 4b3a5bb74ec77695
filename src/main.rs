//! HTTP service exposing the pay engine.
//!
//! Environment:
//! - `PAY_ENGINE_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `PAY_ENGINE_RATES`: optional YAML rate table overriding the built-in rates
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use pay_engine::api::{AppState, create_router};
use pay_engine::config::ConfigLoader;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let loader = match env::var("PAY_ENGINE_RATES") {
        Ok(path) => ConfigLoader::load(&path)?,
        Err(_) => ConfigLoader::builtin(),
    };
    info!(
        base_hourly_wage = %loader.rates().base_hourly_wage,
        sunday = %loader.rates().allowances.sunday,
        "Pay rates ready"
    );

    let addr = env::var("PAY_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let router = create_router(AppState::from_loader(loader));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
