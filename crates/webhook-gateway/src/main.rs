//! Telegram webhook gateway for the region lookup bot.
//!
//! Accepts Telegram updates over HTTP, hands them to a bounded ingestion
//! queue, and drains the queue with a worker that runs the region lookup and
//! sends replies back through the Bot API.

mod config;
mod envelope;
mod error;
mod routes;
mod state;
mod worker;

use std::time::Duration;

use lookup_brain::RegionResponder;
use telegram_sender::TelegramClient;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;
use crate::worker::Worker;

/// Grace period for draining the queue after the server stops.
const DRAIN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, queue_capacity = config.queue_capacity, "Starting webhook gateway");

    // Connect to Telegram; a missing or invalid token is fatal here.
    let client = TelegramClient::connect_from_env().await?;
    if let Some(ref url) = config.webhook_url {
        client.set_webhook(url).await?;
    }

    // Build the directory and its index once, before any traffic.
    let responder = RegionResponder::builtin();
    info!(regions = responder.region_count(), "Region directory loaded");

    // Spawn the worker before the endpoint starts accepting updates.
    let (queue_tx, queue_rx) = mpsc::channel(config.queue_capacity);
    let worker = Worker::new(queue_rx, responder, client.clone());
    let worker_handle = tokio::spawn(worker.run());

    // Build router
    let app = routes::router().with_state(AppState::new(queue_tx));

    // Start server
    info!(addr = %config.addr, "Webhook gateway listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The server owned every queue sender; once it stops, the worker sees
    // the queue close and drains what is already buffered.
    if tokio::time::timeout(DRAIN_GRACE, worker_handle).await.is_err() {
        warn!(grace = ?DRAIN_GRACE, "Worker did not drain within grace period");
    }

    info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Shutdown signal received");
}
