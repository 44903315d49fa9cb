//! Graceful shutdown

use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Handler for graceful shutdown
///
/// Will listen to Ctrl+C (and SIGTERM on unix) and cancel the given token,
/// deactivating the backup task
pub async fn handler(shutdown: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Valid CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Valid terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Terminate signal received, deactivating note store");

    shutdown.cancel();
}
