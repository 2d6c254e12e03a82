//! # Lingo Relay API Server
//!
//! Rate-limited, caching proxy in front of a hosted translation API.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod background;
mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use background::Scheduler;
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    let state = AppState::new(&config).context("Failed to build upstream client")?;

    let mut scheduler = Scheduler::new()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create scheduler: {:?}", e))?;
    background::sweep::schedule(&scheduler, state.clone(), config.sweep_interval())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to schedule expiry sweep: {:?}", e))?;
    scheduler
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start scheduler: {:?}", e))?;

    tracing::info!("Starting Lingo Relay on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    if let Err(e) = scheduler.shutdown().await {
        tracing::warn!("Scheduler shutdown failed: {:?}", e);
    }

    Ok(())
}
