//! Client for the sibling form endpoints served by the `api` crate.

use async_trait::async_trait;
use db::models::FormRecord;
use reqwest::Url;
use tracing::info;

use crate::EditorError;

#[async_trait]
pub trait FormsApi: Send + Sync {
    /// `DELETE /api/forms/{id}/delete`
    async fn delete_form(&self, id: &str) -> Result<(), EditorError>;

    /// `GET /api/forms/user/{sub}`
    async fn list_user_forms(&self, sub: &str) -> Result<Vec<FormRecord>, EditorError>;
}

/// [`FormsApi`] over HTTP.
pub struct HttpFormsApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpFormsApi {
    /// `base` is the site origin, e.g. `https://typiform.app`.
    pub fn new(base: &str) -> Result<Self, EditorError> {
        let base = Url::parse(base).map_err(|e| EditorError::InvalidUrl(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(EditorError::InvalidUrl(base.to_string()));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    /// Append percent-encoded `segments` to the base URL.
    fn url(&self, segments: &[&str]) -> Result<Url, EditorError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| EditorError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), EditorError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(EditorError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[async_trait]
impl FormsApi for HttpFormsApi {
    async fn delete_form(&self, id: &str) -> Result<(), EditorError> {
        let url = self.url(&["api", "forms", id, "delete"])?;
        info!("DELETE {url}");
        let response = self.client.delete(url).send().await?;
        check_status(&response)
    }

    async fn list_user_forms(&self, sub: &str) -> Result<Vec<FormRecord>, EditorError> {
        let url = self.url(&["api", "forms", "user", sub])?;
        let response = self.client.get(url).send().await?;
        check_status(&response)?;
        Ok(response.json().await?)
    }
}
