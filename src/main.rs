//! Locations Admin - Main Entry Point
//!
//! Smoke client: loads the server config, fetches the collection once and
//! logs the first visible page plus any notifications.

use locadmin::eventing::{AppEvent, EventSender};
use locadmin::services::config::load_server_config;
use locadmin::services::rest::LocationsApi;
use locadmin::table::LocationsTable;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_server_config()?;
    tracing::info!("Connecting to {}", config.display_name());

    let (events, rx) = EventSender::channel();
    let api = LocationsApi::new(config.base_url.clone())?;
    let table = LocationsTable::new(api, events);

    if let Err(err) = table.refresh().await {
        tracing::error!("Initial fetch failed: {err}");
    }

    let slice = table.visible().await;
    tracing::info!(
        "Showing {} of {} locations",
        slice.items.len(),
        slice.total_count
    );
    for location in &slice.items {
        tracing::info!(
            "{}: {} - {}, {}, {}",
            location.id,
            location.name,
            location.city,
            location.province,
            location.country
        );
    }

    for event in rx.try_iter() {
        if let AppEvent::Toast { message, is_error } = event {
            if is_error {
                tracing::error!("{message}");
            } else {
                tracing::info!("{message}");
            }
        }
    }

    Ok(())
}
