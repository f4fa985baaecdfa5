//! HTTP surface for the todo service.
//!
//! # Design
//! `app` builds the axum `Router` over an `AppState`; the state owns the
//! `TodoService` and is injected into handlers through `State`. Tests build a
//! fresh state per test and drive the router in-process, while `run` serves
//! it on a listener until a shutdown signal arrives.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;

pub use config::ServerConfig;
pub use error::ApiError;
pub use todo_core::{Todo, TodoPayload, TodoService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub todos: TodoService,
}

impl AppState {
    pub fn new(todos: TodoService) -> Self {
        Self { todos }
    }

    /// State for a freshly started process: the example records, random ids,
    /// and the system clock.
    pub async fn seeded() -> Self {
        Self::new(TodoService::seeded().await)
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todo/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `app(state)` on `listener` until Ctrl+C or SIGTERM.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "todo server listening");
    }
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("todo server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
