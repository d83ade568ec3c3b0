//! Resort - console room booking
//!
//! Registers a customer, lets the operator pick a room type and night count,
//! and books the first free room of that type.

use std::io;

use resort_core::BookingService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod console;

use config::AppConfig;
use console::Console;

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging; stdout belongs to the prompts
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    if let Some(e) = config_error {
        tracing::error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Starting resort booking console");

    let mut service = BookingService::with_default_inventory();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config);

    if let Err(e) = console.run(&mut service) {
        tracing::error!("Console session failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        active_bookings = service.active_bookings().len(),
        "Resort booking console stopped"
    );
}
