//! Hosted push-delivery service adapter
//!
//! Registers the worker with the delivery service and long-polls for
//! messages. The service holds a poll request open until a message
//! arrives or its window elapses, then answers 204.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::application::ports::{PushSource, ReceiveError};
use crate::domain::push::ServiceCredentials;

/// Hosted delivery service base URL
const DEFAULT_SERVICE_URL: &str = "https://relay.push-bridge.dev";

/// Client-side poll timeout; longer than the service's delivery window
const POLL_TIMEOUT_SECS: u64 = 30;

// Request types for the delivery API

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    project_id: &'a str,
    sender_id: &'a str,
    app_id: &'a str,
}

#[derive(Debug, Serialize)]
struct PollRequest<'a> {
    token: &'a str,
}

// Response types for the delivery API

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct PollResponse {
    message: Option<serde_json::Value>,
}

/// Hosted push-delivery client
pub struct HostedPushSource {
    credentials: ServiceCredentials,
    base_url: String,
    client: reqwest::Client,
    /// Worker token issued at registration; present once registered
    token: Mutex<Option<String>>,
}

impl HostedPushSource {
    /// Create a client against the default hosted service
    pub fn new(credentials: ServiceCredentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_SERVICE_URL)
    }

    /// Create a client against a custom base URL (self-hosted deployments)
    pub fn with_base_url(credentials: ServiceCredentials, base_url: impl Into<String>) -> Self {
        Self {
            credentials,
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            token: Mutex::new(None),
        }
    }

    /// Build the registration endpoint URL
    fn register_url(&self) -> String {
        format!("{}/v1/register", self.base_url)
    }

    /// Build the poll endpoint URL
    fn poll_url(&self) -> String {
        format!("{}/v1/poll", self.base_url)
    }

    /// Build the Authorization header value
    fn auth_header(&self) -> String {
        format!("key={}", self.credentials.api_key())
    }
}

#[async_trait]
impl PushSource for HostedPushSource {
    async fn register(&self) -> Result<(), ReceiveError> {
        let mut token = self.token.lock().await;
        if token.is_some() {
            // Already registered; repeat calls are no-ops
            return Ok(());
        }

        let body = RegisterRequest {
            project_id: self.credentials.project_id(),
            sender_id: self.credentials.sender_id(),
            app_id: self.credentials.app_id(),
        };

        let response = self
            .client
            .post(self.register_url())
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| ReceiveError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ReceiveError::Unauthorized);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ReceiveError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let registered: RegisterResponse = response
            .json()
            .await
            .map_err(|e| ReceiveError::ParseError(e.to_string()))?;

        *token = Some(registered.token);
        Ok(())
    }

    async fn next_message(&self) -> Result<Option<serde_json::Value>, ReceiveError> {
        let token = self
            .token
            .lock()
            .await
            .clone()
            .ok_or(ReceiveError::NotRegistered)?;

        let result = self
            .client
            .post(self.poll_url())
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS))
            .json(&PollRequest { token: &token })
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            // A timed-out poll is an empty delivery window, not a failure
            Err(e) if e.is_timeout() => return Ok(None),
            Err(e) => return Err(ReceiveError::RequestFailed(e.to_string())),
        };

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ReceiveError::Unauthorized);
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ReceiveError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let poll: PollResponse = response
            .json()
            .await
            .map_err(|e| ReceiveError::ParseError(e.to_string()))?;

        Ok(poll.message)
    }
}
