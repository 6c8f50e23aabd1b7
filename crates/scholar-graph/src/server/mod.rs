//! HTTP server exposing the paper graph endpoint.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;

use crate::service::PaperGraphService;

/// HTTP server for the paper graph service.
pub struct GraphServer {
    service: Arc<PaperGraphService>,
}

impl GraphServer {
    /// Create a new server.
    #[must_use]
    pub fn new(service: PaperGraphService) -> Self {
        Self { service: Arc::new(service) }
    }

    /// Build the router without binding a socket.
    #[must_use]
    pub fn router(&self) -> Router {
        routes::create_router(Arc::clone(&self.service))
    }

    /// Run the server until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        let limits = self.service.limits();
        tracing::info!(
            port,
            max_depth = limits.max_depth,
            max_fan_out = limits.max_fan_out,
            store = self.service.store_backend(),
            "Starting HTTP server"
        );

        let router = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for GraphServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphServer").field("service", &self.service).finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
