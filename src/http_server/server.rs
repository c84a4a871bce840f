//! # HTTP Server
//!
//! Binds the roster API router and serves it. The HTTP layer is a thin
//! adapter over the employee service: routing, CORS, request tracing, and
//! a health probe.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::employee_routes::{employee_routes, EmployeeState};
use crate::config::RosterConfig;
use crate::service::EmployeeService;
use crate::store::RosterStore;

/// HTTP server for the roster API
pub struct HttpServer {
    config: RosterConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: RosterConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    fn build_router(config: &RosterConfig) -> Router {
        let store = RosterStore::new(&config.data_file);
        let service = EmployeeService::new(store, config.lock_wait());
        let state = Arc::new(EmployeeState { service });

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health))
            .merge(employee_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {:?}: {}", self.config.socket_addr(), e),
            )
        })?;

        tracing::info!(%addr, data_file = %self.config.data_file.display(), "starting rosterdb");
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
