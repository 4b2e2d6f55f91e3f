//! Gateway connection settings.

use std::time::Duration;

use crate::DbError;

pub const ENV_URL: &str = "HARPERDB_URL";
pub const ENV_TOKEN: &str = "HARPERDB_TOKEN";
pub const ENV_SCHEMA: &str = "HARPERDB_SCHEMA";
pub const ENV_TABLE: &str = "HARPERDB_TABLE";

pub const DEFAULT_SCHEMA: &str = "typiform";
pub const DEFAULT_TABLE: &str = "forms";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the gateway lives and how to authenticate against it.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Full URL of the gateway's operations endpoint.
    pub url: String,
    /// Pre-encoded credential sent as `Authorization: Basic {token}`.
    pub token: String,
    pub schema: String,
    pub table: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            schema: DEFAULT_SCHEMA.to_string(),
            table: DEFAULT_TABLE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// `HARPERDB_URL` and `HARPERDB_TOKEN` are required; schema and table
    /// fall back to `typiform.forms`.
    pub fn from_env() -> Result<Self, DbError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GatewayConfig::from_env`] but with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| DbError::Config(format!("{key} is not set")))
        };

        let mut config = Self::new(required(ENV_URL)?, required(ENV_TOKEN)?);
        if let Some(schema) = lookup(ENV_SCHEMA) {
            config.schema = schema;
        }
        if let Some(table) = lookup(ENV_TABLE) {
            config.table = table;
        }
        Ok(config)
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url)
            .field("token", &"***")
            .field("schema", &self.schema)
            .field("table", &self.table)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn reads_required_values_and_defaults() {
        let vars = env(&[(ENV_URL, "https://db.example.com"), (ENV_TOKEN, "dG9rZW4=")]);
        let config = GatewayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.url, "https://db.example.com");
        assert_eq!(config.token, "dG9rZW4=");
        assert_eq!(config.schema, "typiform");
        assert_eq!(config.table, "forms");
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let vars = env(&[(ENV_URL, "https://db.example.com")]);
        let err = GatewayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, DbError::Config(ref msg) if msg.contains(ENV_TOKEN)));
    }

    #[test]
    fn schema_and_table_can_be_overridden() {
        let vars = env(&[
            (ENV_URL, "u"),
            (ENV_TOKEN, "t"),
            (ENV_SCHEMA, "staging"),
            (ENV_TABLE, "drafts"),
        ]);
        let config = GatewayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.schema, "staging");
        assert_eq!(config.table, "drafts");
    }

    #[test]
    fn debug_output_hides_token() {
        let config = GatewayConfig::new("u", "secret-token");
        assert!(!format!("{config:?}").contains("secret-token"));
    }
}
