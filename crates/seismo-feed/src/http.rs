//! HTTP response checks for the feed client.

use crate::error::FeedError;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Pass successful responses through; turn anything else into [`FeedError::Status`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FeedError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
    tracing::warn!(status = status.as_u16(), body = %message, "feed returned error status");

    Err(FeedError::Status {
        status: status.as_u16(),
        message,
    })
}
