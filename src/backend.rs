//! Client for the remote story service.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::UploadFailure;
use crate::intake::NarrativePayload;
use crate::story::StoryText;

/// Something that turns an uploaded export into a story.
#[allow(async_fn_in_trait)]
pub trait StoryBackend {
    async fn generate(&self, payload: &NarrativePayload) -> Result<StoryResponse, UploadFailure>;
}

/// Body returned by the story service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoryResponse {
    #[serde(default)]
    pub autobiography: Option<Value>,
}

impl StoryResponse {
    pub fn from_json(body: &str) -> Result<Self, UploadFailure> {
        serde_json::from_str(body).map_err(|e| UploadFailure::MalformedResponse(e.to_string()))
    }

    /// The generated narrative, if the service produced one.
    ///
    /// Empty and falsy values count as missing. A string is taken as the story
    /// text; any other value is kept as its compact JSON text.
    pub fn narrative(&self) -> Option<StoryText> {
        match self.autobiography.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(StoryText::new(text.clone())),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(StoryText::new(other.to_string())),
        }
    }
}

/// Story service reached over HTTP: one JSON POST per upload.
#[derive(Debug, Clone)]
pub struct HttpStoryBackend {
    endpoint: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl HttpStoryBackend {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.backend_url.clone(), config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn exchange(&self, payload: &NarrativePayload) -> Result<StoryResponse, UploadFailure> {
        let request = self.http.post(&self.endpoint).json(payload);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadFailure::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        StoryResponse::from_json(&body)
    }

    fn transport_error(&self, err: reqwest::Error) -> UploadFailure {
        if err.is_timeout() {
            UploadFailure::Timeout(self.timeout.as_secs())
        } else {
            UploadFailure::Transport(err.to_string())
        }
    }
}

impl StoryBackend for HttpStoryBackend {
    async fn generate(&self, payload: &NarrativePayload) -> Result<StoryResponse, UploadFailure> {
        log::info!("Requesting story from {}", self.endpoint);

        // The browser fetch has no deadline of its own; race it against a timer.
        #[cfg(target_arch = "wasm32")]
        {
            use futures::future::{select, Either};

            let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
            let exchange = std::pin::pin!(self.exchange(payload));
            let deadline = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(millis));
            match select(exchange, deadline).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => Err(UploadFailure::Timeout(self.timeout.as_secs())),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.exchange(payload).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrative_of(body: &str) -> Option<String> {
        StoryResponse::from_json(body)
            .unwrap()
            .narrative()
            .map(StoryText::into_string)
    }

    #[test]
    fn test_string_narrative() {
        assert_eq!(
            narrative_of(r#"{"autobiography": "It began with a search."}"#),
            Some("It began with a search.".to_string())
        );
    }

    #[test]
    fn test_missing_or_empty_narrative() {
        assert_eq!(narrative_of(r#"{"status": "ok"}"#), None);
        assert_eq!(narrative_of(r#"{"autobiography": ""}"#), None);
        assert_eq!(narrative_of(r#"{"autobiography": null}"#), None);
        assert_eq!(narrative_of(r#"{"autobiography": false}"#), None);
        assert_eq!(narrative_of(r#"{"autobiography": 0}"#), None);
    }

    #[test]
    fn test_structured_narrative_kept_as_json() {
        assert_eq!(
            narrative_of(r#"{"autobiography": {"chapters": ["one", "two"]}}"#),
            Some(r#"{"chapters":["one","two"]}"#.to_string())
        );
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            StoryResponse::from_json("<html>Bad Gateway</html>"),
            Err(UploadFailure::MalformedResponse(_))
        ));
        assert!(matches!(
            StoryResponse::from_json("42"),
            Err(UploadFailure::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let config = AppConfig::default();
        let backend = HttpStoryBackend::from_config(&config);
        assert_eq!(backend.endpoint(), config.backend_url);
    }
}
