//! HTTP server with axum router and graceful shutdown.

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    get_article, get_assistant_intro, get_project, list_articles, list_categories, list_faqs,
    list_projects, list_tags, list_testimonials, post_chat, post_contact, AppState,
};
use super::ServerError;
use crate::config::ServerConfig;

/// HTTP server for the portfolio site API.
pub struct FolioServer {
    /// Server configuration.
    config: ServerConfig,
    /// Application state shared across handlers.
    state: AppState,
    /// Triggers graceful shutdown.
    cancel: CancellationToken,
}

impl FolioServer {
    /// Create a new server with default configuration.
    #[must_use]
    pub fn new(state: AppState, cancel: CancellationToken) -> Self {
        Self {
            config: ServerConfig::default(),
            state,
            cancel,
        }
    }

    /// Set the server configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the configured address as a string.
    #[must_use]
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the axum router with all routes and middleware.
    pub fn build_router(&self) -> Router {
        let router = Router::new()
            .route("/api/articles", get(list_articles))
            .route("/api/articles/tags", get(list_tags))
            .route("/api/articles/:slug", get(get_article))
            .route("/api/projects", get(list_projects))
            .route("/api/projects/categories", get(list_categories))
            .route("/api/projects/:slug", get(get_project))
            .route("/api/testimonials", get(list_testimonials))
            .route("/api/faq", get(list_faqs))
            .route("/api/assistant", get(get_assistant_intro))
            .route("/api/chat", post(post_chat))
            .route("/api/contact", post(post_contact))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        if self.config.cors_permissive {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Run the server, binding to the configured address.
    ///
    /// The server will run until the cancellation token is triggered,
    /// at which point it will perform a graceful shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or serve.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.address();
        let cancel = self.cancel.clone();
        let app = self.build_router();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::BindError {
                address: addr.clone(),
                source: e,
            })?;

        tracing::info!(address = %addr, "Starting folio server");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                cancel.cancelled().await;
                tracing::info!("Folio server shutting down gracefully");
            })
            .await?;

        Ok(())
    }
}
