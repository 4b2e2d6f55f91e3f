//! `db` crate — persistence layer over the hosted database gateway.
//!
//! Provides gateway configuration, an HTTP client, typed operations and rows,
//! and repository functions for the `forms` table. No business logic lives here.

pub mod config;
pub mod error;
pub mod gateway;
pub mod mock;
pub mod models;
pub mod operation;
pub mod pool;
pub mod repository;

pub use config::GatewayConfig;
pub use error::DbError;
pub use gateway::{Gateway, HttpGateway};
pub use operation::Operation;
pub use pool::DbPool;
