//! Minimal GraphQL-over-HTTP client for the sign-in API.
//!
//! Every operation aliases its root field to `result`, so one envelope type
//! decodes all of them.

use std::time::Duration;

use anyhow::{Context, Result};
use nuber_core::config::Config;
use nuber_core::error::{RequestError, RequestResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::retry::RetryPolicy;

/// Requests an SMS one-time passcode.
pub const REQUEST_PHONE_SIGN_IN: &str = "\
mutation requestPhoneSignIn($phoneNumber: String!) {
  result: StartPhoneVerification(phoneNumber: $phoneNumber) { ok error }
}";

/// Links a Facebook identity to a local account and returns a session token.
pub const FACEBOOK_CONNECT: &str = "\
mutation facebookConnect($email: String, $firstName: String!, $lastName: String!, $userID: String!) {
  result: FacebookConnect(email: $email, firstName: $firstName, lastName: $lastName, fbId: $userID) { ok error token }
}";

/// Longest slice of an error body kept in messages.
const MAX_ERROR_BODY: usize = 200;

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<Payload<T>>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct Payload<T> {
    result: T,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

/// GraphQL client.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    endpoint: String,
    http: reqwest::Client,
    retry: RetryPolicy,
}

impl GraphqlClient {
    /// Builds a client for `endpoint`; `timeout` of `None` waits indefinitely.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>, retry: RetryPolicy) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
            retry,
        })
    }

    /// Builds a client from the `[api]` section (and `NUBER_API_URL`).
    ///
    /// # Errors
    /// Returns an error if the endpoint is invalid or the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let endpoint = config.api_endpoint()?;
        let timeout = (config.api.timeout_secs > 0).then(|| Duration::from_secs(config.api.timeout_secs));
        Self::new(endpoint, timeout, RetryPolicy::from_config(&config.api))
    }

    /// Runs `query` with `variables`, retrying transient transport failures.
    ///
    /// # Errors
    /// Returns a `RequestError` classified by where the request failed.
    pub async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> RequestResult<T> {
        let mut attempt = 1;
        loop {
            match self.execute_once(query, &variables).await {
                Err(err) if err.retryable && self.retry.allows_retry(attempt) => {
                    let delay = self.retry.backoff_delay(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retrying GraphQL request"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    async fn execute_once<T: DeserializeOwned>(&self, query: &str, variables: &Value) -> RequestResult<T> {
        debug!(endpoint = %self.endpoint, "sending GraphQL request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = format!("HTTP {status}: {}", truncate(&body));
            return Err(if status.is_server_error() {
                RequestError::retryable_transport(message)
            } else {
                RequestError::transport(message)
            });
        }

        let envelope: GraphqlResponse<T> = response
            .json()
            .await
            .map_err(|e| RequestError::transport(format!("Invalid response body: {e}")))?;

        if let Some(first) = envelope.errors.into_iter().next() {
            return Err(RequestError::external(first.message));
        }
        envelope
            .data
            .map(|payload| payload.result)
            .ok_or_else(|| RequestError::transport("Response carried no data"))
    }
}

fn classify_reqwest_error(e: &reqwest::Error) -> RequestError {
    if e.is_timeout() {
        RequestError::retryable_transport(format!("Request timed out: {e}"))
    } else if e.is_connect() {
        RequestError::retryable_transport(format!("Connection failed: {e}"))
    } else if e.is_request() {
        RequestError::transport(format!("Request error: {e}"))
    } else {
        RequestError::transport(format!("Network error: {e}"))
    }
}

fn truncate(body: &str) -> &str {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate("  bad gateway \n"), "bad gateway");
    }

    #[test]
    fn truncate_cuts_on_char_boundary() {
        let body = "가".repeat(MAX_ERROR_BODY + 10);
        assert_eq!(truncate(&body).chars().count(), MAX_ERROR_BODY);
    }

    #[test]
    fn envelope_prefers_errors_over_null_data() {
        let json = r#"{"data":null,"errors":[{"message":"first"},{"message":"second"}]}"#;
        let envelope: GraphqlResponse<Value> = serde_json::from_str(json).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors[0].message, "first");
    }
}
