//! Robo advisor HTTP server
//!
//! Serves the dialog hook over HTTP so the bot can be run and exercised
//! locally. The conversational platform posts one request per turn.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{dialog_handler, health_check};
use crate::state::AppState;

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/dialog", post(dialog_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let dispatcher = robo_advisor::dispatcher();
    tracing::info!("Registered {} intents:", dispatcher.len());
    for name in dispatcher.intent_names() {
        tracing::info!("  • {}", name);
    }

    let state = AppState {
        dispatcher: Arc::new(dispatcher),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("robo advisor listening on http://{}", config.bind_addr);
    tracing::info!("  GET  /health     - Health check");
    tracing::info!("  POST /api/dialog - Dialog hook");

    axum::serve(listener, router(state)).await?;

    Ok(())
}
