//! Row structs for the `forms` table.
//!
//! The gateway is schemaless, so only the columns this workspace actually
//! reads are typed. Everything else is carried through in `extra`.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// forms
// ---------------------------------------------------------------------------

/// A persisted form row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Auth provider subject of the owner.
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub style: Option<Value>,
    #[serde(default)]
    pub options: Option<Value>,
    /// Milliseconds since the epoch, stamped by the gateway.
    #[serde(rename = "__createdtime__", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(rename = "__updatedtime__", default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<i64>,
    /// Any other column (fields, blocks, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FormRecord {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_time.and_then(millis_to_utc)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_time.and_then(millis_to_utc)
    }
}

fn millis_to_utc(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

// ---------------------------------------------------------------------------
// delete
// ---------------------------------------------------------------------------

/// Reply to a `delete` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub deleted_hashes: Vec<Value>,
    #[serde(default)]
    pub skipped_hashes: Vec<Value>,
}
