//! Gateway operations — the JSON bodies POSTed to the database gateway.
//!
//! Every request is a single object tagged by `operation`. Lookups go through
//! the NoSQL operations so caller-supplied values travel as JSON values and are
//! never spliced into SQL text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute list meaning "every column".
pub const ALL_ATTRIBUTES: &str = "*";

/// A single gateway request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Operation {
    /// Raw SQL statement. Only the admin CLI issues these.
    Sql { sql: String },

    /// Fetch rows by primary key.
    SearchByHash {
        schema: String,
        table: String,
        hash_values: Vec<Value>,
        get_attributes: Vec<String>,
    },

    /// Fetch rows whose `search_attribute` equals `search_value`.
    SearchByValue {
        schema: String,
        table: String,
        search_attribute: String,
        search_value: Value,
        get_attributes: Vec<String>,
    },

    /// Delete rows by primary key.
    Delete {
        schema: String,
        table: String,
        hash_values: Vec<Value>,
    },
}

impl Operation {
    /// `search_by_hash` for a single id, returning every attribute.
    pub fn find_by_id(schema: &str, table: &str, id: &str) -> Self {
        Self::SearchByHash {
            schema: schema.to_string(),
            table: table.to_string(),
            hash_values: vec![Value::String(id.to_string())],
            get_attributes: vec![ALL_ATTRIBUTES.to_string()],
        }
    }

    /// `search_by_value` on one attribute, returning every attribute.
    pub fn find_by_value(schema: &str, table: &str, attribute: &str, value: &str) -> Self {
        Self::SearchByValue {
            schema: schema.to_string(),
            table: table.to_string(),
            search_attribute: attribute.to_string(),
            search_value: Value::String(value.to_string()),
            get_attributes: vec![ALL_ATTRIBUTES.to_string()],
        }
    }

    /// `delete` for a single id.
    pub fn delete_by_id(schema: &str, table: &str, id: &str) -> Self {
        Self::Delete {
            schema: schema.to_string(),
            table: table.to_string(),
            hash_values: vec![Value::String(id.to_string())],
        }
    }

    /// The wire name of this operation, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sql { .. } => "sql",
            Self::SearchByHash { .. } => "search_by_hash",
            Self::SearchByValue { .. } => "search_by_value",
            Self::Delete { .. } => "delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn find_by_id_serialises_to_search_by_hash() {
        let op = Operation::find_by_id("typiform", "forms", "abc");
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({
                "operation": "search_by_hash",
                "schema": "typiform",
                "table": "forms",
                "hash_values": ["abc"],
                "get_attributes": ["*"],
            })
        );
    }

    #[test]
    fn quoted_id_stays_a_literal_hash_value() {
        let crafted = "x' OR '1'='1";
        let op = Operation::find_by_id("typiform", "forms", crafted);
        let body = serde_json::to_value(&op).unwrap();

        assert_eq!(body["hash_values"], json!([crafted]));
        assert!(body.get("sql").is_none());
    }

    #[test]
    fn sql_operation_keeps_statement_verbatim() {
        let op = Operation::Sql { sql: "SELECT 1".into() };
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({ "operation": "sql", "sql": "SELECT 1" })
        );
        assert_eq!(op.name(), "sql");
    }

    #[test]
    fn delete_by_id_uses_delete_operation() {
        let op = Operation::delete_by_id("typiform", "forms", "f1");
        let body = serde_json::to_value(&op).unwrap();
        assert_eq!(body["operation"], "delete");
        assert_eq!(body["hash_values"], json!(["f1"]));
    }
}
