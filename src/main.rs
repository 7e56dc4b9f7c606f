//! Record Services - Main entry point
//!
//! Serves contact, task, and appointment commands over stdin/stdout, one JSON
//! object per line.

use anyhow::Result;
use record_services::server::{run_server, RecordServer};
use record_services::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for responses)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut server = RecordServer::new();

    info!("Starting record server on stdio");
    if let Err(e) = run_server(&mut server, io::stdin().lock(), io::stdout().lock(), &config) {
        error!("Record server stopped: {}", e);
        return Err(e);
    }

    info!(
        contacts = server.contacts().count(),
        tasks = server.tasks().count(),
        appointments = server.appointments().count(),
        "Record server shutdown complete"
    );
    Ok(())
}
