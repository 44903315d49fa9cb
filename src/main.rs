#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::time::Duration;

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::prelude::*;
use uuid::Uuid;

use crate::areas::Area;
use crate::notes::sample_notes;
use crate::storage::setup;
use crate::store::NoteStore;
use crate::utils::env_var_or_else;
use crate::utils::env_var_parse_or;

mod areas;
mod backup;
mod crypto;
mod graceful_shutdown;
mod notes;
mod snapshot;
mod storage;
mod store;
#[cfg(test)]
mod tests;
mod utils;

const DEFAULT_RUST_LOG: &str = "paranotes=debug";
const DEFAULT_AREA_ID: i64 = 1;
const DEFAULT_AREA_NAME: &str = "Gestión de Equipo";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let store = setup_store()?;

    let stats = store.stats().await;
    tracing::info!(
        area = store.area().id,
        total = stats.total,
        encrypted = stats.encrypted,
        "Note store active"
    );

    let storage = setup().await;
    let interval = setup_backup_interval();
    let shutdown = CancellationToken::new();

    tracing::info!("Backing up every {interval:?}");

    let backup_task = tokio::spawn(backup::run(
        store.clone(),
        storage,
        interval,
        shutdown.clone(),
    ));

    graceful_shutdown::handler(shutdown).await;
    backup_task.await?;

    Ok(())
}

/// Create the note store for the configured area, seeded with sample data
///
/// The encrypted samples are sealed with `SAMPLE_PASSPHRASE`; without one a
/// throwaway passphrase is generated and logged.
fn setup_store() -> Result<NoteStore> {
    let area = Area {
        id: env_var_parse_or("AREA_ID", DEFAULT_AREA_ID),
        name: env_var_or_else("AREA_NAME", || String::from(DEFAULT_AREA_NAME)),
    };

    let passphrase = env_var_or_else("SAMPLE_PASSPHRASE", || {
        let generated = Uuid::new_v4().to_string();
        tracing::info!("`SAMPLE_PASSPHRASE` not set, generating one: {generated}");
        generated
    });

    let notes = sample_notes(&passphrase)?;

    Ok(NoteStore::new(area, notes))
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer())
        .init();
}

fn setup_backup_interval() -> Duration {
    let seconds = env_var_parse_or("BACKUP_INTERVAL_SECONDS", backup::DEFAULT_INTERVAL.as_secs());

    if seconds == 0 {
        backup::DEFAULT_INTERVAL
    } else {
        Duration::from_secs(seconds)
    }
}
