//! HTTP backend for the ElyraOS terminal.
//!
//! A stateless axum service that proxies DexScreener token data and forwards
//! questions to an OpenAI-compatible model. All request handling lives in
//! `elyra_core::TerminalService`; this crate wires it to routes, maps errors
//! to status codes and adds request logging and CORS.

pub mod error;
pub mod handlers;

pub use error::{Result, ServerError};
pub use handlers::HealthResponse;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{middleware, Router};
use elyra_core::config::ServerSettings;
use elyra_core::TerminalService;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Configuration for the backend server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Enable CORS
    pub enable_cors: bool,
    /// CORS allowed origins (if None, allows any origin)
    pub cors_origins: Option<Vec<String>>,
    /// Enable request logging
    pub enable_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            enable_cors: true,
            cors_origins: None,
            enable_logging: true,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `server` section of the YAML configuration.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self> {
        let mut config = Self::new()
            .with_bind_addr_str(&settings.bind_addr)?
            .with_cors(settings.enable_cors)
            .with_logging(settings.enable_logging);
        if let Some(origins) = &settings.cors_origins {
            config = config.with_cors_origins(origins.clone());
        }
        Ok(config)
    }

    /// Parse and set the bind address from a string.
    pub fn with_bind_addr_str(mut self, addr: &str) -> Result<Self> {
        self.bind_addr = addr
            .parse()
            .map_err(|e| ServerError::config_error(format!("Invalid bind address '{}': {}", addr, e)))?;
        Ok(self)
    }

    pub fn with_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: TerminalService,
}

/// The ElyraOS backend server.
pub struct ElyraServer {
    service: TerminalService,
    config: ServerConfig,
}

impl ElyraServer {
    pub fn new(service: TerminalService) -> Self {
        Self {
            service,
            config: ServerConfig::default(),
        }
    }

    pub fn with_config(service: TerminalService, config: ServerConfig) -> Self {
        Self { service, config }
    }

    /// Build the Axum router with all routes and middleware.
    pub fn build_router(&self) -> Router {
        let state = AppState {
            service: self.service.clone(),
        };

        let mut router = Router::new()
            .route("/health", get(handlers::health))
            .route("/api/token/{address}", get(handlers::token))
            .route("/api/terminal/trending", get(handlers::trending))
            .route("/api/terminal/newpairs", get(handlers::new_pairs))
            .route("/api/terminal/scan/{address}", get(handlers::scan))
            .route("/api/terminal/ask", post(handlers::ask))
            .route("/api/terminal/sol", get(handlers::sol))
            .with_state(state);

        if self.config.enable_logging {
            router = router.layer(middleware::from_fn(
                |request: axum::http::Request<axum::body::Body>,
                 next: axum::middleware::Next| async {
                    let request_id = uuid::Uuid::new_v4().to_string();
                    let method = request.method().clone();
                    let uri = request.uri().clone();

                    // Health probes are frequent; keep them out of info logs
                    if uri.path() == "/health" {
                        log::debug!("Request {} {} {}", request_id, method, uri);
                    } else {
                        log::info!("Request {} {} {}", request_id, method, uri);
                    }

                    let start = std::time::Instant::now();
                    let response = next.run(request).await;
                    let duration = start.elapsed();

                    log::info!(
                        "Response {} {} completed in {:?}",
                        request_id,
                        response.status(),
                        duration
                    );
                    response
                },
            ));
        }

        router = router.layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors_layer = match self.config.cors_origins {
                Some(ref origins) => {
                    let origins: std::result::Result<Vec<HeaderValue>, _> =
                        origins.iter().map(|s| s.parse::<HeaderValue>()).collect();
                    match origins {
                        Ok(origins) => CorsLayer::new()
                            .allow_origin(origins)
                            .allow_methods(Any)
                            .allow_headers(Any),
                        Err(e) => {
                            log::warn!("Invalid CORS origin ({}), allowing any origin", e);
                            CorsLayer::permissive()
                        }
                    }
                }
                None => CorsLayer::permissive(),
            };
            router = router.layer(cors_layer);
        }

        router
    }

    /// Start the server with graceful shutdown support.
    pub async fn serve_with_shutdown<F>(self, shutdown_signal: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let listener = TcpListener::bind(self.config.bind_addr)
            .await
            .map_err(|e| {
                ServerError::config_error(format!(
                    "Failed to bind to {}: {}",
                    self.config.bind_addr, e
                ))
            })?;

        log::info!("ElyraOS backend listening on {}", self.config.bind_addr);
        log::info!("Health check: http://{}/health", self.config.bind_addr);
        log::info!(
            "Terminal API: http://{}/api/terminal/{{trending,newpairs,scan,ask,sol}}",
            self.config.bind_addr
        );
        if !self.service.has_llm() {
            log::warn!("No language model configured; /api/terminal/ask will fail");
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| ServerError::internal(format!("Server error: {}", e)))?;

        log::info!("ElyraOS backend shut down gracefully");
        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            log::info!("Received SIGTERM, shutting down...");
        },
    }
}

#[cfg(test)]
mod tests;
