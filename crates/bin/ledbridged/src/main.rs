//! # ledbridged — ledbridge daemon
//!
//! Composition root that wires all adapters together and runs the session.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging
//! - Configure the output pin and drive it low
//! - Bring up the network with the configured credentials
//! - Build the MQTT session and hand its events to the router
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use ledbridge_adapter_mqtt::MqttTransport;
use ledbridge_adapter_virtual::VirtualOutput;
use ledbridge_app::router::EventRouter;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, WifiConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting ledbridged");

    // Output
    let output = Arc::new(VirtualOutput::new(config.output.pin));
    let mut router = EventRouter::new(Arc::clone(&output), config.output.pin);

    // Network
    bring_up_network(&config.wifi);

    // Session
    let transport = MqttTransport::connect(config.mqtt)?;
    transport.start(&mut router, shutdown_signal()).await;

    tracing::info!(pin = %router.pin(), level = %output.level(), "ledbridged stopped");
    Ok(())
}

/// Hosted targets reach the broker through the host's own network stack, so
/// the credentials are only reported here.
fn bring_up_network(wifi: &WifiConfig) {
    if wifi.ssid.is_empty() {
        tracing::info!("no wireless network configured, using host network");
    } else {
        tracing::info!(ssid = %wifi.ssid, "using wireless network");
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
