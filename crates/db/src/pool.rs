//! Shared gateway handle.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::{DbError, Gateway, GatewayConfig, HttpGateway, Operation};

/// Cheap-to-clone handle used across the whole application.
///
/// Bundles the gateway with the schema and table every form operation targets.
#[derive(Clone)]
pub struct DbPool {
    gateway: Arc<dyn Gateway>,
    schema: String,
    table: String,
}

impl DbPool {
    pub fn new(gateway: Arc<dyn Gateway>, schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            gateway,
            schema: schema.into(),
            table: table.into(),
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub async fn execute(&self, operation: &Operation) -> Result<Value, DbError> {
        self.gateway.execute(operation).await
    }
}

/// Build a pool backed by [`HttpGateway`].
pub fn create_pool(config: &GatewayConfig) -> Result<DbPool, DbError> {
    info!(
        "Connecting to gateway {} ({}.{})",
        config.url, config.schema, config.table
    );
    let gateway = HttpGateway::new(config)?;
    Ok(DbPool::new(Arc::new(gateway), &config.schema, &config.table))
}
