//! Backend entry-point: loads settings, wires the store and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use scoops_backend::inbound::http::health::HealthState;
use scoops_backend::outbound::memory::MemoryStore;
use scoops_backend::settings::{AppSettings, LogFormat};
use server::{ServerConfig, create_server};

fn init_tracing(format: LogFormat) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let log_format = settings.log_format().map_err(std::io::Error::other)?;
    init_tracing(log_format);

    let missing = settings.unprovisioned().map_err(std::io::Error::other)?;
    if !missing.is_empty() {
        warn!(collections = ?missing, "starting with unprovisioned collections");
    }
    let config =
        ServerConfig::new(settings.bind_addr()?).with_store(MemoryStore::without(missing));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    info!("server stopped");
    result
}
