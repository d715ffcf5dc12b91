//! Response primitives shared by all client operations
//!
//! Every HTTP exchange is reduced to a [`RawResponse`] with the body read
//! to completion, so error payloads are never lost. Decoding classifies:
//! non-success statuses become server errors carrying the verbatim body,
//! and unparseable bodies on success statuses become protocol errors.

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use rp_core::{Error, Result};

/// A fully-read HTTP response: status plus raw body bytes
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RawResponse {
    /// Canonical reason phrase for the status, empty if unknown
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// Body as text, lossily decoded for display
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Convert this response into a server error, body passed through
    pub fn into_server_error(self) -> Error {
        Error::Server {
            status: self.status.as_u16(),
            status_text: self.status_text().to_string(),
            body: self.body_text(),
        }
    }
}

/// Decode a JSON body, requiring a success (2xx) status
///
/// `what` names the operation for protocol error messages.
pub(crate) fn decode_json<T: DeserializeOwned>(resp: RawResponse, what: &str) -> Result<T> {
    if !resp.status.is_success() {
        return Err(resp.into_server_error());
    }
    serde_json::from_slice(&resp.body)
        .map_err(|e| Error::Protocol(format!("Invalid JSON in {what} response: {e}")))
}

/// Require one exact status code and return the body verbatim
///
/// Write operations succeed on a single contractual status; anything else,
/// including other 2xx codes, is surfaced as a server error.
pub(crate) fn require_status(resp: RawResponse, expected: StatusCode) -> Result<String> {
    if resp.status != expected {
        return Err(resp.into_server_error());
    }
    Ok(resp.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    #[test]
    fn test_decode_json_success() {
        let value: Vec<u32> = decode_json(raw(200, "[1,2,3]"), "test").unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_json_non_success_is_server_error() {
        let err = decode_json::<Vec<u32>>(raw(404, "bucket not found"), "test").unwrap_err();
        assert!(err.is_server());
        assert!(err.to_string().contains("bucket not found"));
    }

    #[test]
    fn test_decode_json_bad_body_is_protocol_error() {
        let err = decode_json::<Vec<u32>>(raw(200, "<html>oops</html>"), "test").unwrap_err();
        assert!(err.is_protocol());
    }

    #[test]
    fn test_require_status_exact_match_only() {
        let body = require_status(raw(201, "created"), StatusCode::CREATED).unwrap();
        assert_eq!(body, "created");

        // 200 is success-class but not the contractual code for a create
        let err = require_status(raw(200, "ok"), StatusCode::CREATED).unwrap_err();
        assert!(err.is_server());
    }

    #[test]
    fn test_server_error_carries_non_json_body() {
        let err = raw(500, "stack trace, not json").into_server_error();
        match err {
            Error::Server { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "stack trace, not json");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }
}
