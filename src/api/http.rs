//! Blocking HTTP helpers on top of ureq

use serde::de::DeserializeOwned;

use super::types::ErrorBody;
use crate::ApiError;

pub(super) fn encode_url_path_segment(segment: &str) -> String {
    // RFC3986 unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
    let mut out = String::with_capacity(segment.len());
    for &b in segment.as_bytes() {
        let is_unreserved =
            matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~');
        if is_unreserved {
            out.push(b as char);
        } else {
            out.push('%');
            out.push_str(&format!("{:02X}", b));
        }
    }
    out
}

/// Build an [`ApiError::Status`] from a non-success response body
pub(super) fn status_error(code: u16, body: &str) -> ApiError {
    let body = body.trim();
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

    let message = parsed
        .message
        .clone()
        .or_else(|| parsed.error.clone())
        .or_else(|| Some(body.to_string()).filter(|b| !b.is_empty() && b.len() < 200))
        .unwrap_or_else(|| "request failed".to_string());

    ApiError::Status {
        status: code,
        message,
        description: parsed.error_description,
    }
}

/// Map a ureq failure into an [`ApiError`], reading the error body if any
pub(super) fn map_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(code, resp) => {
            let body = resp.into_string().unwrap_or_default();
            status_error(code, &body)
        }
        ureq::Error::Transport(t) => ApiError::Transport(t.to_string()),
    }
}

pub(super) fn read_json<T: DeserializeOwned>(resp: ureq::Response) -> Result<T, ApiError> {
    let body = resp
        .into_string()
        .map_err(|e| ApiError::Decode(format!("Failed to read response body: {e}")))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
