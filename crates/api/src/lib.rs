//! `api` crate — HTTP layer in front of the forms gateway.
//!
//! Exposes:
//!   GET    /api/forms/{id}
//!   DELETE /api/forms/{id}/delete
//!   GET    /api/forms/user/{user_id}
//!   GET    /health

pub mod handlers;

use axum::{
    routing::{delete, get},
    Router,
};
use db::DbPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use handlers::AppState;

/// Build the application router.
///
/// Each path only answers the methods it is registered for. Anything else,
/// HEAD included on the form routes, gets `405` with an empty body before any
/// gateway call.
///
/// The static `user` segment wins over `:id`, so a form whose id is literally
/// `user` is unreachable through `/api/forms/{id}` and its delete route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/forms/:id",
            get(handlers::forms::get).head(handlers::method_not_allowed),
        )
        .route("/api/forms/:id/delete", delete(handlers::forms::delete))
        .route(
            "/api/forms/user/:user_id",
            get(handlers::forms::list_for_user).head(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to `bind` and serve until the process is stopped.
pub async fn serve(bind: &str, pool: DbPool) -> std::io::Result<()> {
    let app = router(AppState { pool });
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

#[cfg(test)]
mod router_tests;
