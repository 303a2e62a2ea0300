//! Client for the application's own proxy endpoint.
//!
//! The terminal front end never talks to Gemini directly; it posts prompts
//! to `POST /api/gemini` on the proxy server, which holds the credential.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use jibun_core::advice::AdviceProvider;
use jibun_core::error::{JibunError, Result};

/// Default proxy base URL when none is configured.
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";

/// Request body for `POST /api/gemini`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Success body from `POST /api/gemini`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub result: String,
}

/// Error body from `POST /api/gemini`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Advice provider that forwards prompts through the proxy server.
#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    /// Creates a client targeting `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a client from `JIBUN_SERVER_URL`, defaulting to localhost.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("JIBUN_SERVER_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string());
        Self::new(base_url)
    }
}

#[async_trait::async_trait]
impl AdviceProvider for ProxyClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/gemini", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .json(&GenerateRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await
            .map_err(|err| JibunError::advice(format!("Proxy request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "Failed to read proxy error body".to_string());
            tracing::warn!("Proxy returned {}: {}", status, message);
            return Err(JibunError::advice(format!(
                "Proxy returned {status}: {message}"
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|err| JibunError::advice(format!("Failed to parse proxy response: {err}")))?;
        Ok(body.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_request_body_shape() {
        let json = serde_json::to_value(GenerateRequest {
            prompt: "こんにちは".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "prompt": "こんにちは" }));
    }

    #[test]
    fn test_response_body_shapes() {
        let ok: GenerateResponse = serde_json::from_str(r#"{ "result": "text" }"#).unwrap();
        assert_eq!(ok.result, "text");
        let err: ErrorResponse = serde_json::from_str(r#"{ "error": "no key" }"#).unwrap();
        assert_eq!(err.error, "no key");
    }

    #[tokio::test]
    async fn test_successful_generation_returns_result_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/gemini"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": "やったね" })),
            )
            .mount(&server)
            .await;

        let client = ProxyClient::new(server.uri());
        assert_eq!(client.generate("prompt").await.unwrap(), "やったね");
    }

    #[tokio::test]
    async fn test_error_status_surfaces_the_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/gemini"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({ "error": "APIキーが設定されていません" })),
            )
            .mount(&server)
            .await;

        let client = ProxyClient::new(server.uri());
        let err = client.generate("prompt").await.unwrap_err();
        assert!(err.is_advice());
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("APIキーが設定されていません"));
    }

    #[tokio::test]
    async fn test_unreadable_error_body_still_reports_the_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/gemini"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = ProxyClient::new(server.uri());
        let err = client.generate("prompt").await.unwrap_err();
        assert!(err.to_string().contains("502"));
    }
}
