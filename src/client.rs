//! HTTP client for the sentiment inference endpoint

use crate::constants::PROBE_TIMEOUT;
use crate::types::SentimentResult;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failure modes of a single request. Only surfaced in logs.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Thin wrapper around a shared `reqwest::Client` bound to one endpoint.
#[derive(Clone)]
pub struct SentimentClient {
    http: reqwest::Client,
    endpoint: String,
    probe_timeout: Duration,
}

impl SentimentClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("sentiment-analyzer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            probe_timeout: PROBE_TIMEOUT,
        })
    }

    #[cfg(test)]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `text` as a url-encoded form and decode `{label, score}`.
    pub async fn analyze(&self, text: &str) -> Result<SentimentResult, AnalyzeError> {
        debug!(endpoint = %self.endpoint, chars = text.chars().count(), "Posting text for analysis");

        let response = self
            .http
            .post(&self.endpoint)
            .form(&[("text", text)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::Status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| AnalyzeError::Decode(e.to_string()))
    }

    /// GET the endpoint root to see whether the server is up.
    /// Unlike `analyze`, this gives up after `probe_timeout`.
    pub async fn probe(&self) -> Result<(), AnalyzeError> {
        let response = self
            .http
            .get(&self.endpoint)
            .timeout(self.probe_timeout)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AnalyzeError::Status(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Form, Json, Router};
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://127.0.0.1:{port}/")
    }

    async fn echo_label(Form(form): Form<HashMap<String, String>>) -> Json<serde_json::Value> {
        let text = form.get("text").cloned().unwrap_or_default();
        let label = if text.contains("love") { "POSITIVE" } else { "NEGATIVE" };
        Json(serde_json::json!({ "label": label, "score": 0.87 }))
    }

    #[tokio::test]
    async fn posts_form_field_and_decodes_result() {
        let url = serve(Router::new().route("/", post(echo_label))).await;
        let client = SentimentClient::new(url).unwrap();

        let result = client.analyze("I love it & more").await.unwrap();
        assert_eq!(result.label, "POSITIVE");
        assert_eq!(result.score, Some(0.87));

        let result = client.analyze("broke after a day").await.unwrap();
        assert_eq!(result.label, "NEGATIVE");
    }

    #[tokio::test]
    async fn label_only_response_is_accepted() {
        let app = Router::new().route(
            "/",
            post(|| async { Json(serde_json::json!({ "label": "NEGATIVE" })) }),
        );
        let client = SentimentClient::new(serve(app).await).unwrap();

        let result = client.analyze("meh").await.unwrap();
        assert_eq!(result.score, None);
    }

    #[tokio::test]
    async fn server_error_maps_to_status() {
        let app = Router::new().route("/", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let client = SentimentClient::new(serve(app).await).unwrap();

        let err = client.analyze("anything").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Status(s) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_decode() {
        let app = Router::new().route("/", post(|| async { "Hello world" }));
        let client = SentimentClient::new(serve(app).await).unwrap();

        let err = client.analyze("anything").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_network() {
        // Nothing listens on port 1
        let client = SentimentClient::new("http://127.0.0.1:1/").unwrap();
        let err = client.analyze("anything").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Network(_)));
        assert!(client.probe().await.is_err());
    }

    #[tokio::test]
    async fn reachability_check_gives_up_on_silent_server() {
        // Accepts connections but never answers
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        let client = SentimentClient::new(format!("http://127.0.0.1:{port}/"))
            .unwrap()
            .with_probe_timeout(Duration::from_millis(200));
        let result = tokio::time::timeout(Duration::from_secs(5), client.probe()).await;
        let err = result.expect("probe should time out on its own").unwrap_err();
        assert!(matches!(err, AnalyzeError::Network(ref e) if e.is_timeout()));
    }

    #[tokio::test]
    async fn probe_hits_root_with_get() {
        let app = Router::new().route("/", get(|| async { "Hello world" }));
        let client = SentimentClient::new(serve(app).await).unwrap();
        assert!(client.probe().await.is_ok());
    }
}
