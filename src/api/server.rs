use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::config::AppConfig;
use crate::rpc::SuiRpcClient;

pub fn create_router(rpc_client: Arc<SuiRpcClient>) -> Router {
    // Configure CORS based on environment
    // Set ALLOWED_ORIGINS="https://dashboard.example.com" for production.
    // If not set, allows any origin (development mode)
    let cors = match std::env::var("ALLOWED_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            log::info!("CORS configured for origins: {}", origins);
            let origin_list: Vec<_> = origins
                .split(',')
                .map(|s| s.trim().parse().expect("Invalid CORS origin"))
                .collect();
            CorsLayer::new()
                .allow_origin(origin_list)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        _ => {
            log::warn!("CORS: Allowing all origins (development mode). Set ALLOWED_ORIGINS env var for production.");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    Router::new()
        .route("/api/test", get(handlers::test_handler))
        .route("/api/object/:id", get(handlers::get_object_handler))
        .route(
            "/api/expense-group/:group_id",
            get(handlers::get_expense_group_handler),
        )
        .route(
            "/api/create-expense-group",
            post(handlers::create_expense_group_handler),
        )
        .with_state(rpc_client)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(config: &AppConfig) -> anyhow::Result<()> {
    let rpc_client = Arc::new(SuiRpcClient::new(config)?);
    let app = create_router(rpc_client);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    log::info!("Gateway listening on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
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
        _ = ctrl_c => {
            log::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            log::info!("Received SIGTERM signal");
        },
    }

    log::info!("Shutdown signal received, exiting gracefully...");
}
