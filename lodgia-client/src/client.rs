use lodgia_session::SessionStore;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::ClientConfig;
use crate::error::ApiError;

/// HTTP client for the reservation backend. Cheap to clone; holds the
/// session store so bearer attachment and expiry checking happen in one
/// place instead of at every call site.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.backend.base_url.trim_end_matches('/'),
            path
        )
    }

    /// Token for an authenticated request. Runs the expiry check first so an
    /// expired session is evicted here rather than bounced by the backend.
    pub(crate) fn bearer(&self) -> Result<String, ApiError> {
        self.session.check_expiry();
        self.session.bearer_token().ok_or(ApiError::Unauthorized)
    }

    /// Sends the request and applies the uniform response policy: a non-2xx
    /// status is a hard error (with the body's `error` text when present),
    /// and a 2xx body is additionally inspected for an `error` field before
    /// being treated as success.
    pub(crate) async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            // The backend carries failure text under `error` on most
            // endpoints and `message` on the auth ones.
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("error")
                        .or_else(|| value.get("message"))
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        status.to_string()
                    } else {
                        body.clone()
                    }
                });
            tracing::warn!("backend returned {} for request: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let value: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body).map_err(|e| ApiError::MalformedBody(e.to_string()))?
        };
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(ApiError::Rejected(message.to_owned()));
        }
        Ok(value)
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let value = self.execute(request).await?;
        decode(value)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::MalformedBody(e.to_string()))
}
