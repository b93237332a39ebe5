//! # HTTP Server
//!
//! Combines the catalog and health routers and serves them.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{response::Redirect, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::catalog_routes::{catalog_routes, CatalogState};
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;

/// HTTP server for the book catalog
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<CatalogState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with an empty catalog
    pub fn with_config(config: HttpServerConfig) -> Self {
        let state = Arc::new(CatalogState::new(config.base_path.clone()));
        Self::with_state(config, state)
    }

    /// Create a new HTTP server around existing catalog state
    pub fn with_state(config: HttpServerConfig, state: Arc<CatalogState>) -> Self {
        let router = Self::build_router(&config, Arc::clone(&state));
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<CatalogState>) -> Router {
        let mut router = Router::new()
            .merge(health_routes(Arc::clone(&state)))
            .merge(catalog_routes(state));

        if config.base_path != "/" {
            let base_path = config.base_path.clone();
            router = router.route(
                "/",
                get(move || {
                    let location = base_path.clone();
                    async move { Redirect::to(&location) }
                }),
            );
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared catalog state
    pub fn state(&self) -> &Arc<CatalogState> {
        &self.state
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server, returning after Ctrl+C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        info!(%local_addr, base_path = %self.config.base_path, "catalog server listening");
        info!("catalog available at http://{}{}", local_addr, self.config.base_path);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("catalog server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::with_config(HttpServerConfig::default());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
        assert!(server.state().store().is_empty());
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9000);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_router_builds_at_root() {
        let config = HttpServerConfig {
            base_path: "/".to_string(),
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).router();
    }
}
