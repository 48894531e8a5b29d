//! Application startup and lifecycle management.

use crate::config::BreachConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::notification::{ConsoleNotifier, Notifier};
use crate::services::providers::TextProvider;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::repository::BreachRepository;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state. The repository is read-only after startup,
/// so concurrent requests share it without locks.
#[derive(Clone)]
pub struct AppState {
    pub config: BreachConfig,
    pub repository: Arc<BreachRepository>,
    pub text_provider: Arc<dyn TextProvider>,
    pub notifier: Arc<dyn Notifier>,
}

/// Build the HTTP router with CORS and tracing layers.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .security
                .allowed_origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::error!("Invalid CORS origin '{}': {}. Skipping.", origin, e);
                        None
                    }
                })
                .collect::<Vec<HeaderValue>>(),
        )
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(handlers::health::root_status))
        .route("/health", get(handlers::health::health_check))
        .route("/check-breach", post(handlers::breach::check_breach))
        .route(
            "/summarize-breach",
            post(handlers::summary::summarize_breach),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the real Gemini provider and the console
    /// notifier.
    pub async fn build(config: BreachConfig) -> Result<Self, AppError> {
        let repository = BreachRepository::load(&config.dataset.path)?;

        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.text_model.clone(),
        };
        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

        let state = AppState {
            config: config.clone(),
            repository: Arc::new(repository),
            text_provider,
            notifier,
        };

        Self::with_state(state).await
    }

    /// Bind a listener for an already-assembled state (port 0 = random
    /// port). Tests use this to inject mock collaborators.
    pub async fn with_state(state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Breach service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
