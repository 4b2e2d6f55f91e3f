//! Repository functions — one function per gateway operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! No business logic, no HTTP types.

pub mod forms;
pub mod sql;
