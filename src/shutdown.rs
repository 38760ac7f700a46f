//! Graceful shutdown signal handling

use std::io;

use thiserror::Error;
use tokio::signal;

/// Failure to install a shutdown signal handler.
#[derive(Debug, Error)]
pub enum ShutdownSignalError {
    /// Ctrl+C handler could not be installed.
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    /// SIGTERM handler could not be installed.
    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Resolves once Ctrl+C or (on Unix) SIGTERM is received.
///
/// # Errors
///
/// Returns an error if a signal handler cannot be installed.
pub async fn listen() -> Result<(), ShutdownSignalError> {
    let ctrl_c = async {
        // Handle Ctrl+C signal
        signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;
        Ok::<(), ShutdownSignalError>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<(), ShutdownSignalError>>();

    tokio::select! {
        result = ctrl_c => {
            result?;
            tracing::info!("ctrl_c signal received");
        }
        result = terminate => {
            result?;
            tracing::info!("terminate signal received");
        }
    };

    Ok(())
}

/// Shutdown future for `axum::serve(..).with_graceful_shutdown`.
///
/// If the handlers cannot be installed the error is logged and the server
/// keeps running until the process is killed.
pub async fn signal() {
    if let Err(error) = listen().await {
        tracing::error!("failed to listen for shutdown signal: {error}");
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down gracefully");
}
