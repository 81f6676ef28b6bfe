//! Mail API client
//!
//! Thin request/response wrapper for the mail service behind the contact
//! and newsletter forms. One POST per call, JSON in and out, no retry and
//! no caching. Field-level server errors are surfaced through
//! [`ErrorPayload::field_errors`] for form display.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Base URL used when `MAIL_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

const CONTACT_PATH: &str = "/mail/contact";
const NEWSLETTER_PATH: &str = "/mail/newsletter";

/// Returns the mail API base URL.
///
/// Priority:
/// 1. Environment variable `MAIL_API_BASE_URL`
/// 2. [`DEFAULT_BASE_URL`]
pub fn mail_api_base_url() -> String {
    std::env::var("MAIL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

#[derive(Error, Debug)]
pub enum MailError {
    /// Transport-level failure (connection, timeout, body read).
    #[error("mail API request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-success HTTP status with a structured error body.
    #[error("mail API returned status {status}: {}", .payload.message)]
    Api { status: u16, payload: ErrorPayload },
    /// Non-success HTTP status whose body was not a structured error.
    #[error("mail API returned status {status} with an unreadable error body")]
    MalformedError {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Structured error body returned by the mail API on non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    /// Field name to list of validation messages.
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ErrorPayload {
    /// Flattens `errors` to the first message per field, for form display.
    pub fn field_errors(&self) -> HashMap<String, String> {
        self.errors
            .iter()
            .filter_map(|(field, messages)| {
                messages.first().map(|m| (field.clone(), m.clone()))
            })
            .collect()
    }
}

/// Contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Newsletter subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}

/// Success envelope returned by both mail endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailResponse {
    pub success: bool,
    pub message: String,
}

/// Stateless client for the mail API.
pub struct MailClient {
    http: reqwest::Client,
    base_url: String,
}

impl MailClient {
    /// Creates a client against [`mail_api_base_url`].
    pub fn new() -> Self {
        Self::with_base_url(mail_api_base_url())
    }

    /// Creates a client against a specific base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("mail client created for {}", base_url);

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Sends a contact form message.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Api`] when the server rejects the submission;
    /// inspect [`ErrorPayload::field_errors`] for per-field messages.
    pub async fn send_contact_message(
        &self,
        data: &ContactRequest,
    ) -> Result<MailResponse, MailError> {
        self.post_json(CONTACT_PATH, data).await
    }

    /// Subscribes an address to the newsletter.
    pub async fn subscribe_newsletter(
        &self,
        data: &NewsletterRequest,
    ) -> Result<MailResponse, MailError> {
        self.post_json(NEWSLETTER_PATH, data).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<MailResponse, MailError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<MailResponse>().await?);
        }

        #[cfg(feature = "tracing")]
        tracing::error!("mail API POST {} failed with status {}", path, status);

        let text = response.text().await?;
        match serde_json::from_str::<ErrorPayload>(&text) {
            Ok(payload) => Err(MailError::Api {
                status: status.as_u16(),
                payload,
            }),
            Err(source) => Err(MailError::MalformedError {
                status: status.as_u16(),
                source,
            }),
        }
    }
}

impl Default for MailClient {
    fn default() -> Self {
        Self::new()
    }
}
