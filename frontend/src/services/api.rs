use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use shared::{CreateStoryRequest, DateStory, RecordStore, StoreError};
use web_sys::AbortSignal;

use crate::config::AppConfig;

/// Client for the spreadsheet-backed record store.
///
/// No credentials are sent; the collection URL is the only configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    abort_signal: Option<AbortSignal>,
}

impl ApiClient {
    /// Create a new API client pointed at the configured collection
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(config.record_store_url.clone())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            abort_signal: None,
        }
    }

    /// Requests issued through the returned client are cancelled when `signal` fires
    pub fn with_abort_signal(&self, signal: AbortSignal) -> Self {
        Self {
            base_url: self.base_url.clone(),
            abort_signal: Some(signal),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl RecordStore for ApiClient {
    async fn list(&self) -> Result<Vec<DateStory>, StoreError> {
        let response = Request::get(&self.base_url)
            .abort_signal(self.abort_signal.as_ref())
            .send()
            .await
            .map_err(map_net_error)?;
        let response = ensure_ok(response)?;

        response
            .json::<Vec<DateStory>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn create(&self, story: &DateStory) -> Result<(), StoreError> {
        let body = CreateStoryRequest::new(story.clone());
        let request = Request::post(&self.base_url)
            .abort_signal(self.abort_signal.as_ref())
            .json(&body)
            .map_err(|e| StoreError::Encode(e.to_string()))?;

        let response = request.send().await.map_err(map_net_error)?;
        ensure_ok(response).map(|_| ())
    }
}

fn ensure_ok(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(StoreError::Status(response.status()))
    }
}

fn map_net_error(error: gloo::net::Error) -> StoreError {
    match error {
        gloo::net::Error::JsError(js) if js.name == "AbortError" => StoreError::Aborted,
        gloo::net::Error::SerdeError(e) => StoreError::Decode(e.to_string()),
        other => StoreError::Network(other.to_string()),
    }
}
