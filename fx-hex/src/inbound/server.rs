//! HTTP Server configuration and startup.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use fx_types::RateProvider;

use super::handlers::{self, AppState};
use crate::ConverterService;
use crate::openapi::ApiDoc;

/// HTTP Server for the currency converter.
pub struct HttpServer<P: RateProvider> {
    state: Arc<AppState<P>>,
    static_dir: Option<PathBuf>,
}

impl<P: RateProvider> HttpServer<P> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: ConverterService<P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            static_dir: None,
        }
    }

    /// Serves files from `dir` for any path no route matches.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        let mut router = Router::new()
            .route("/", get(handlers::index::<P>))
            .route("/convert", post(handlers::convert::<P>))
            .route("/history", get(handlers::history::<P>))
            .route("/health", get(handlers::health))
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        if let Some(dir) = &self.static_dir {
            router = router.fallback_service(ServeDir::new(dir));
        }

        router
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
