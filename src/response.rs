//! Response normalization.
//!
//! Raw wire responses become a tagged outcome: [`Envelope`] on success,
//! [`ApiFailure`] on rejection. Both carry the status and parsed
//! headers; the payload side is parsed JSON, degrading to a
//! `{"message": <raw text>}` object when the body is empty or not
//! valid JSON.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Response headers, name → value.
pub type ResponseHeaders = BTreeMap<String, String>;

/// Parse a raw header block of `Name: value` lines.
///
/// Each line splits on the first `": "` occurrence; names and values
/// are whitespace-trimmed, and entries with an empty name or value are
/// dropped.
pub fn parse_header_block(block: &str) -> ResponseHeaders {
    let mut headers = ResponseHeaders::new();
    for line in block.trim().lines() {
        if let Some((name, value)) = line.trim().split_once(": ") {
            let (name, value) = (name.trim(), value.trim());
            if !name.is_empty() && !value.is_empty() {
                headers.insert(name.to_string(), value.to_string());
            }
        }
    }
    headers
}

/// Parse a body as JSON, falling back to `{"message": <raw text>}`.
pub fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "message": text }))
}

/// Successful outcome of one exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub status: u16,
    pub headers: ResponseHeaders,
    pub payload: T,
}

/// Error payload supplied by the remote API.
///
/// `error` and `message` are the conventional Helix fields; any other
/// fields the payload carried are preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Failed outcome of one exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub status: u16,
    pub headers: ResponseHeaders,
    pub error: ErrorPayload,
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let detail = self
            .error
            .message
            .as_deref()
            .or(self.error.error.as_deref())
            .unwrap_or("");
        write!(f, "status {}: {}", self.status, detail)
    }
}

impl ApiFailure {
    /// Shape the parsed payload into an [`ErrorPayload`]. Non-object
    /// payloads (a bare array, say) cannot be field-mapped and degrade
    /// to the raw text as `message`, same as a parse failure.
    pub(crate) fn from_parts(
        status: u16,
        headers: ResponseHeaders,
        payload: Value,
        raw: &str,
    ) -> Self {
        let error = serde_json::from_value(payload).unwrap_or_else(|_| ErrorPayload {
            message: Some(raw.to_string()),
            ..ErrorPayload::default()
        });
        Self {
            status,
            headers,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_block_round_trips() {
        let headers =
            parse_header_block("Content-Type: application/json\r\nX-Rate-Limit: 10");

        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(headers.get("X-Rate-Limit").map(String::as_str), Some("10"));
    }

    #[test]
    fn header_value_keeps_later_colon_separators() {
        let headers = parse_header_block("Link: <https://example.com>; rel: next");

        assert_eq!(
            headers.get("Link").map(String::as_str),
            Some("<https://example.com>; rel: next")
        );
    }

    #[test]
    fn header_block_drops_incomplete_lines() {
        let headers = parse_header_block("Valid: yes\r\nnovalue\r\n: orphan\r\n");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Valid").map(String::as_str), Some("yes"));
    }

    #[test]
    fn empty_header_block_parses_to_empty_map() {
        assert!(parse_header_block("").is_empty());
    }

    #[test]
    fn valid_json_body_parses_structurally() {
        let payload = parse_body(r#"{"data":[{"id":"1"}],"total":3}"#);

        assert_eq!(payload["data"][0]["id"], "1");
        assert_eq!(payload["total"], 3);
    }

    #[test]
    fn non_json_body_falls_back_to_message() {
        let payload = parse_body("service unavailable");

        assert_eq!(payload, serde_json::json!({ "message": "service unavailable" }));
    }

    #[test]
    fn empty_body_falls_back_to_empty_message() {
        let payload = parse_body("");

        assert_eq!(payload, serde_json::json!({ "message": "" }));
    }

    #[test]
    fn error_payload_keeps_extra_fields() {
        let failure = ApiFailure::from_parts(
            401,
            ResponseHeaders::new(),
            serde_json::json!({
                "error": "Unauthorized",
                "message": "Invalid OAuth token",
                "status": 401
            }),
            "",
        );

        assert_eq!(failure.error.error.as_deref(), Some("Unauthorized"));
        assert_eq!(failure.error.message.as_deref(), Some("Invalid OAuth token"));
        assert_eq!(failure.error.extra["status"], 401);
    }

    #[test]
    fn non_object_error_payload_degrades_to_raw_text() {
        let failure = ApiFailure::from_parts(
            500,
            ResponseHeaders::new(),
            serde_json::json!([1, 2, 3]),
            "[1,2,3]",
        );

        assert_eq!(failure.error.message.as_deref(), Some("[1,2,3]"));
        assert_eq!(failure.error.error, None);
    }
}
