use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;
use super::{gateway_failure, AppState};
use db::repository::forms as form_repo;

/// `GET /api/forms/{id}` — the first matching row, unwrapped.
///
/// An unknown id still answers `200` with a `null` body; there is no 404 here.
pub async fn get(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Option<Value>>, StatusCode> {
    match form_repo::get_form(&state.pool, &id).await {
        Ok(row) => {
            info!(form_id = %id, found = row.is_some(), "form lookup");
            Ok(Json(row))
        }
        Err(e) => Err(gateway_failure("get form", e)),
    }
}

/// `GET /api/forms/user/{user_id}` — every form the user owns.
pub async fn list_for_user(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<db::models::FormRecord>>, StatusCode> {
    match form_repo::list_user_forms(&state.pool, &user_id).await {
        Ok(forms) => Ok(Json(forms)),
        Err(e) => Err(gateway_failure("list forms", e)),
    }
}

/// `DELETE /api/forms/{id}/delete`
pub async fn delete(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, StatusCode> {
    match form_repo::delete_form(&state.pool, &id).await {
        Ok(_) => {
            info!(form_id = %id, "form deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(db::DbError::NotFound) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(gateway_failure("delete form", e)),
    }
}
