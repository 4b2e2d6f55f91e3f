//! Raw SQL pass-through for administrative use.

use serde_json::Value;
use tracing::{instrument, warn};

use crate::{DbError, DbPool, Operation};

/// Run `sql` as-is and return the gateway's reply.
///
/// The statement is not inspected or escaped. Never feed it request input.
#[instrument(skip(pool))]
pub async fn run(pool: &DbPool, sql: &str) -> Result<Value, DbError> {
    warn!("executing raw SQL statement");
    pool.execute(&Operation::Sql { sql: sql.to_string() }).await
}
