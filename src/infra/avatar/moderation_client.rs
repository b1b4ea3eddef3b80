use crate::core::avatar::{ModerationClient, ModerationError, ModerationResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Error bodies longer than this are cut before they reach a job record.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for the external moderation API.
///
/// Every request carries the bearer token and is bounded by the timeout
/// given at construction; there is no retry.
pub struct HttpModerationClient {
    client: Client,
    api_url: String,
    api_token: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct ModerationRequest<'a> {
    content: &'a str,
    user_id: &'a str,
}

/// Wire shape of the API's answer. `approved` is required; a body without
/// it is a malformed response, not a silent rejection.
#[derive(Deserialize)]
struct ModerationResponse {
    approved: bool,
    reason: Option<String>,
}

impl HttpModerationClient {
    pub fn new(
        api_url: impl Into<String>,
        api_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_token: api_token.into(),
            timeout,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> ModerationError {
        if err.is_timeout() {
            ModerationError::Timeout(self.timeout)
        } else {
            ModerationError::Network(err.to_string())
        }
    }

    fn truncate_body(body: &[u8]) -> String {
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if text.chars().count() > MAX_ERROR_BODY_CHARS {
            let cut: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
            format!("{}...", cut)
        } else if text.is_empty() {
            "<empty body>".to_string()
        } else {
            text.to_string()
        }
    }
}

#[async_trait]
impl ModerationClient for HttpModerationClient {
    async fn moderate(
        &self,
        content: &str,
        user_id: &str,
    ) -> Result<ModerationResult, ModerationError> {
        let started = std::time::Instant::now();

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(&ModerationRequest { content, user_id })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        tracing::debug!(
            user_id,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Moderation API responded"
        );

        if !status.is_success() {
            return Err(ModerationError::HttpStatus {
                status: status.as_u16(),
                body: Self::truncate_body(&body),
            });
        }

        let parsed: ModerationResponse = serde_json::from_slice(&body)
            .map_err(|e| ModerationError::MalformedResponse(e.to_string()))?;

        Ok(ModerationResult {
            approved: parsed.approved,
            reason: parsed.reason,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
