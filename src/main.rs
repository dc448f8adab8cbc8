//! Pulseboard entry point: wires configuration, logging, and the stream
//! synchronization core, then renders each published snapshot as a compact
//! status line until interrupted.

use tracing_subscriber::EnvFilter;

use pulseboard::config::AppConfig;
use pulseboard::domain::DashboardSnapshot;
use pulseboard::stream::StreamSync;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Configuration error: {error}");
            std::process::exit(1);
        }
    };
    if let Err(error) = config.validate() {
        eprintln!("Invalid configuration: {error}");
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    tracing::info!(feed = %config.stream.url, api = %config.api.base_url, "starting pulseboard");

    let mut sync = StreamSync::new(config.stream.clone());
    let mut snapshots = sync.subscribe();
    sync.start();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow().clone();
                render_status(&snapshot);
            }
        }
    }

    tracing::info!("shutting down");
    sync.teardown().await;
}

/// One status line per snapshot; the full visual dashboard lives elsewhere.
fn render_status(snapshot: &DashboardSnapshot) {
    let latest = snapshot
        .events
        .first()
        .map(|event| event.subject.as_str())
        .unwrap_or("-");
    let health = snapshot
        .alerts
        .first()
        .map(|alert| alert.health_status.to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(
        connected = snapshot.is_connected,
        total = snapshot.stats.total,
        critical = snapshot.stats.critical,
        errors = snapshot.stats.errors,
        warnings = snapshot.stats.warnings,
        health = %health,
        scenario = snapshot.active_scenario.as_deref().unwrap_or("-"),
        latest = %latest,
        "dashboard"
    );
}
