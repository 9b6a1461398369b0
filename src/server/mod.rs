//! Iris Inference Server Module
//!
//! Web server exposing a pre-trained Iris classifier through an HTML form
//! and a JSON prediction endpoint.

mod api;
mod error;
mod handlers;
mod state;

pub use api::create_router;
pub use error::ServerError;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::model::{NearestCentroidClassifier, CLASS_LABELS};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            model_path: std::env::var("MODEL_PATH").unwrap_or_else(|_| "iris_model.json".to_string()),
        }
    }
}

/// Start the server with the given configuration.
///
/// The model is loaded before the listener binds; a load failure propagates
/// out and the service never accepts traffic.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let start_time = chrono::Utc::now();

    let classifier = NearestCentroidClassifier::load(&config.model_path)?;
    info!(
        model_path = %config.model_path,
        classes = classifier.num_classes(),
        labels = ?CLASS_LABELS,
        started_at = %start_time.to_rfc3339(),
        "Model loaded"
    );

    let state = Arc::new(AppState::new(config.clone(), Box::new(classifier)));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!(host = %config.host, port = config.port, "Iris inference server starting");
    info!(url = %format!("http://{}", addr), "Form available");
    info!(url = %format!("http://{}/predict", addr), "JSON endpoint available");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, pid = std::process::id(), "Server listening and ready to accept connections");

    // Graceful shutdown on ctrl+c
    let shutdown_signal = async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        let stop_time = chrono::Utc::now();
        let uptime = stop_time.signed_duration_since(start_time);
        info!(
            stopped_at = %stop_time.to_rfc3339(),
            uptime_secs = uptime.num_seconds(),
            "Shutdown signal received, stopping server gracefully"
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.model_path, "iris_model.json");
    }
}
