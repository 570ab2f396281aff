use ferrous_recursor_infrastructure::dns::LocalRecordTable;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

/// Resolves on SIGINT or SIGTERM.
pub async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}

/// Reloads the local override table from `path` on every SIGHUP.
#[cfg(unix)]
pub fn spawn_local_records_reloader(
    table: Arc<LocalRecordTable>,
    path: PathBuf,
) -> anyhow::Result<()> {
    let mut hangup = signal::unix::signal(signal::unix::SignalKind::hangup())?;

    tokio::spawn(async move {
        while hangup.recv().await.is_some() {
            info!(path = %path.display(), "Received SIGHUP, reloading local records");
            table.reload(&path);
        }
    });

    Ok(())
}

#[cfg(not(unix))]
pub fn spawn_local_records_reloader(
    _table: Arc<LocalRecordTable>,
    _path: PathBuf,
) -> anyhow::Result<()> {
    Ok(())
}
