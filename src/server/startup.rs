use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` and default to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Binds the liveness listener on all interfaces.
///
/// # Arguments
/// - `config` - Application configuration containing the port
///
/// # Returns
/// - `Ok(TcpListener)` - Listener bound to `0.0.0.0:{port}`
/// - `Err(AppError::IoErr)` - Port unavailable
pub async fn bind_listener(config: &Config) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Web server running on port {}", config.port);

    Ok(listener)
}

/// Serves the liveness router until the listener fails.
pub async fn serve(listener: TcpListener) -> Result<(), AppError> {
    axum::serve(listener, router::router()).await?;

    Ok(())
}
