//! `MockGateway` — a test double for `Gateway`.
//!
//! Records every operation it receives and replies from a script, so the
//! `api` and `editor` crates can be tested without a live database.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{config, DbError, DbPool, Gateway, Operation};

/// A scripted reply.
enum MockReply {
    Ok(Value),
    Fail { status: u16, body: String },
    Shape,
}

/// A mock gateway that returns programmer-specified replies in order.
///
/// When the script runs dry it answers with an empty array.
#[derive(Default)]
pub struct MockGateway {
    replies: Mutex<VecDeque<MockReply>>,
    /// All operations seen by this gateway (in call order).
    calls: Mutex<Vec<Operation>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh mock plus a pool targeting `typiform.forms` through it.
    pub fn pool() -> (DbPool, Arc<MockGateway>) {
        let mock = Arc::new(Self::new());
        let pool = DbPool::new(mock.clone(), config::DEFAULT_SCHEMA, config::DEFAULT_TABLE);
        (pool, mock)
    }

    /// Queue a successful reply.
    pub fn push_ok(&self, value: Value) {
        self.replies.lock().unwrap().push_back(MockReply::Ok(value));
    }

    /// Queue a non-2xx gateway reply.
    pub fn push_gateway_error(&self, status: u16, body: impl Into<String>) {
        self.replies.lock().unwrap().push_back(MockReply::Fail {
            status,
            body: body.into(),
        });
    }

    /// Queue a reply that fails as an unexpected response shape.
    pub fn push_shape_error(&self) {
        self.replies.lock().unwrap().push_back(MockReply::Shape);
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of operations executed so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn execute(&self, operation: &Operation) -> Result<Value, DbError> {
        self.calls.lock().unwrap().push(operation.clone());

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(MockReply::Ok(value)) => Ok(value),
            Some(MockReply::Fail { status, body }) => Err(DbError::Gateway { status, body }),
            Some(MockReply::Shape) => Err(DbError::UnexpectedShape {
                expected: "array of rows",
            }),
            None => Ok(json!([])),
        }
    }
}
