//! Form CRUD operations.

use serde_json::Value;
use tracing::instrument;

use crate::{
    models::{DeleteOutcome, FormRecord},
    DbError, DbPool, Operation,
};

/// Column holding the owner's auth subject.
pub const OWNER_ATTRIBUTE: &str = "userId";

/// Fetch a single form by its id and return the raw row.
///
/// The id is sent as a hash value, never as SQL text. Returns `Ok(None)` when
/// the gateway answers with an empty array.
#[instrument(skip(pool))]
pub async fn get_form(pool: &DbPool, id: &str) -> Result<Option<Value>, DbError> {
    let reply = pool
        .execute(&Operation::find_by_id(pool.schema(), pool.table(), id))
        .await?;

    match reply {
        Value::Array(rows) => Ok(rows.into_iter().next()),
        _ => Err(DbError::UnexpectedShape { expected: "array of rows" }),
    }
}

/// Return every form owned by `user_id`, in the order the gateway returns them.
#[instrument(skip(pool))]
pub async fn list_user_forms(pool: &DbPool, user_id: &str) -> Result<Vec<FormRecord>, DbError> {
    let reply = pool
        .execute(&Operation::find_by_value(
            pool.schema(),
            pool.table(),
            OWNER_ATTRIBUTE,
            user_id,
        ))
        .await?;

    if !reply.is_array() {
        return Err(DbError::UnexpectedShape { expected: "array of rows" });
    }
    Ok(serde_json::from_value(reply)?)
}

/// Permanently delete a form by its id.
///
/// Returns `DbError::NotFound` if the gateway reports no deleted hash.
#[instrument(skip(pool))]
pub async fn delete_form(pool: &DbPool, id: &str) -> Result<DeleteOutcome, DbError> {
    let reply = pool
        .execute(&Operation::delete_by_id(pool.schema(), pool.table(), id))
        .await?;

    let outcome: DeleteOutcome = serde_json::from_value(reply)?;
    if outcome.deleted_hashes.is_empty() {
        return Err(DbError::NotFound);
    }

    Ok(outcome)
}
