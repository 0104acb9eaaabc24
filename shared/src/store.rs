use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::story::DateStory;

/// Failures talking to the record store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("record store responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("request aborted")]
    Aborted,
}

/// Body of a create call: `{"data": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStoryRequest {
    pub data: DateStory,
}

impl CreateStoryRequest {
    pub fn new(story: DateStory) -> Self {
        Self { data: story }
    }
}

/// The external collection of stories.
///
/// Browser futures are not `Send`, so neither are these.
#[async_trait(?Send)]
pub trait RecordStore {
    /// Everything currently stored, in the store's native order
    async fn list(&self) -> Result<Vec<DateStory>, StoreError>;

    /// Persist one new story. The response body is not interpreted.
    async fn create(&self, story: &DateStory) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_wraps_in_data() {
        let story = DateStory {
            id: "1700000000000".to_string(),
            rating: "4".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(CreateStoryRequest::new(story)).unwrap();

        assert_eq!(body["data"]["id"], "1700000000000");
        assert_eq!(body["data"]["rating"], "4");
        assert_eq!(body["data"]["icon_url"], "");
        assert_eq!(body.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::Status(503).to_string(), "record store responded with status 503");
        assert_eq!(
            StoreError::Network("offline".to_string()).to_string(),
            "network error: offline"
        );
    }
}
