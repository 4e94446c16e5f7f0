//! Application startup and lifecycle management.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::providers::mock::MockCompletionProvider;
use crate::services::providers::openai::{OpenAiConfig, OpenAiProvider};
use crate::services::providers::CompletionProvider;
use crate::services::CodeGenerator;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub generator: CodeGenerator,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn CompletionProvider> = if config.openai.api_key.is_empty() {
            tracing::warn!("OPENAI_API_KEY not set; using mock completion provider");
            Arc::new(MockCompletionProvider::replying(
                "{\"javascriptFetch\":\"// mock\",\"javascriptAxios\":\"// mock\",\
                 \"javaSpring\":\"// mock\",\"pythonRequests\":\"# mock\"}",
            ))
        } else {
            let openai_config = OpenAiConfig {
                api_key: config.openai.api_key.clone(),
                model: config.openai.model.clone(),
                api_base_url: config.openai.api_base_url.clone(),
            };
            tracing::info!(
                model = %config.openai.model,
                "Initialized OpenAI completion provider"
            );
            Arc::new(OpenAiProvider::new(openai_config))
        };

        let generator = CodeGenerator::new(provider);

        let state = AppState {
            config: config.clone(),
            generator,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("apiscribe service listening on port {}", port);

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
        let router = Router::new()
            .route("/api/generate", post(handlers::generate))
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .with_state(self.state)
            .layer(TraceLayer::new_for_http())
            // The UI is served from a separate origin in development.
            .layer(CorsLayer::permissive());

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
