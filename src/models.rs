use serde::Serialize;
use std::fmt;

use crate::error::Result;

/// Immutable snapshot of a completed SpamExperts API exchange.
///
/// reqwest bodies can only be read once, so the client materializes the
/// whole response up front and the handlers re-read it as often as needed.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    /// Value of the `Content-Type` header, empty when the header was absent.
    pub content_type: String,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// Consume a reqwest response into a re-readable snapshot.
    pub async fn from_response(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await?;

        Ok(Self {
            status,
            content_type,
            body,
        })
    }
}

/// Diagnostic payload attached to a missing-ticket failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TicketDebug {
    pub http_code: u16,
    pub content_type: String,
    pub body: String,
    /// `None` when the response failed before a candidate was produced,
    /// otherwise the raw (invalid) candidate value.
    pub ticket: Option<String>,
}

impl fmt::Display for TicketDebug {
    /// Renders the payload as a single JSON line for log output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
    }
}
