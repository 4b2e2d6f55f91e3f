//! Request handlers.

pub mod forms;

use axum::http::StatusCode;
use db::{DbError, DbPool};
use tracing::error;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

/// Explicit HEAD handler for read routes, which would otherwise run the GET
/// handler and its gateway query.
pub(crate) async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// Log a gateway failure and map it to the status returned to the client.
pub(crate) fn gateway_failure(action: &str, err: DbError) -> StatusCode {
    error!("{action} failed: {err}");
    match err {
        DbError::NotFound => StatusCode::NOT_FOUND,
        DbError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DbError::Http(_)
        | DbError::Gateway { .. }
        | DbError::Decode(_)
        | DbError::UnexpectedShape { .. } => StatusCode::BAD_GATEWAY,
    }
}
