//! The `Gateway` trait and its HTTP implementation.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{DbError, GatewayConfig, Operation};

/// Anything that can run a gateway operation and hand back its JSON reply.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn execute(&self, operation: &Operation) -> Result<Value, DbError>;
}

/// Talks to the hosted SQL-over-HTTP database through a single endpoint.
pub struct HttpGateway {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, DbError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn execute(&self, operation: &Operation) -> Result<Value, DbError> {
        debug!(operation = operation.name(), url = %self.url, "gateway request");

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Basic {}", self.token))
            .json(operation)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(operation = operation.name(), %status, "gateway rejected request");
            return Err(DbError::Gateway {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    /// Start a loopback server that records each request and replies with
    /// `reply`.
    async fn spawn_gateway(status: StatusCode, reply: &'static str) -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();

        let app = Router::new().route(
            "/",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let recorder = recorder.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    recorder.lock().unwrap().push((auth, body));
                    (status, reply)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/"), seen)
    }

    #[tokio::test]
    async fn posts_operation_with_basic_token() {
        let (url, seen) = spawn_gateway(StatusCode::OK, r#"[{"id":"f1"}]"#).await;
        let gateway = HttpGateway::new(&GatewayConfig::new(url, "dG9rZW4=")).unwrap();

        let reply = gateway
            .execute(&Operation::find_by_id("typiform", "forms", "f1"))
            .await
            .unwrap();

        assert_eq!(reply, json!([{ "id": "f1" }]));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("Basic dG9rZW4="));
        assert_eq!(seen[0].1["operation"], "search_by_hash");
        assert_eq!(seen[0].1["hash_values"], json!(["f1"]));
    }

    #[tokio::test]
    async fn non_success_status_is_a_gateway_error() {
        let (url, _) = spawn_gateway(StatusCode::UNAUTHORIZED, "bad creds").await;
        let gateway = HttpGateway::new(&GatewayConfig::new(url, "t")).unwrap();

        let err = gateway
            .execute(&Operation::Sql { sql: "SELECT 1".into() })
            .await
            .unwrap_err();

        match err {
            DbError::Gateway { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad creds");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let (url, _) = spawn_gateway(StatusCode::OK, "<html>oops</html>").await;
        let gateway = HttpGateway::new(&GatewayConfig::new(url, "t")).unwrap();

        let err = gateway
            .execute(&Operation::Sql { sql: "SELECT 1".into() })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_gateway_is_an_http_error() {
        // Bind then drop so the port is very likely closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway =
            HttpGateway::new(&GatewayConfig::new(format!("http://{addr}/"), "t")).unwrap();
        let err = gateway
            .execute(&Operation::Sql { sql: "SELECT 1".into() })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Http(_)));
    }
}
