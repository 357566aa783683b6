//! Outgoing response type and its gateway serialization.
//!
//! Every dispatch cycle starts from the same default response: not-found
//! status, the fixed body `Route not found!`, and an empty header list. That
//! default is exactly what the host receives when no route matches; a matched
//! handler overwrites it in place.

use bytes::Bytes;
use serde_json::Value;

use crate::status::Status;

// ── Payload ──────────────────────────────────────────────────────────────────

/// A body value accepted by [`Response::send`].
///
/// Text is stored as-is; JSON is serialized to compact JSON text at `send`
/// time. Build JSON payloads with `serde_json::json!` or
/// `serde_json::to_value`.
pub enum Payload {
    Text(String),
    Json(Value),
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing response, mutated in place by the matched handler.
///
/// ```rust
/// use umi::{Response, Status};
/// use serde_json::json;
///
/// let mut res = Response::new();
/// res.send(Status::Created, json!({"id": 42}))
///     .header("location", "/users/42");
/// ```
pub struct Response {
    status: Status,
    body: String,
    headers: Vec<(String, String)>,
}

impl Response {
    /// A fresh response in the unmatched-route default state: `404`, body
    /// `Route not found!`, no headers.
    pub fn new() -> Self {
        Self {
            status: Status::NotFound,
            body: "Route not found!".to_owned(),
            headers: Vec::new(),
        }
    }

    /// Sets the status and body in one step.
    ///
    /// A JSON payload is serialized to compact JSON text. `send` then appends
    /// `Content-Type: application/json` and `Content-Length` (the body's byte
    /// length) to the header list. Appends, never replaces: calling `send`
    /// twice leaves two of each pair, and the content-type is stamped even on
    /// plain-text payloads. Hosts that need exact headers should set them
    /// with [`Response::header`] and a final `send`.
    pub fn send(&mut self, status: Status, body: impl Into<Payload>) -> &mut Self {
        self.status = status;
        self.body = match body.into() {
            Payload::Text(text) => text,
            Payload::Json(value) => value.to_string(),
        };
        self.headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        self.headers.push(("Content-Length".to_owned(), self.body.len().to_string()));
        self
    }

    /// Replaces the status, leaving body and headers untouched.
    pub fn status(&mut self, status: Status) -> &mut Self {
        self.status = status;
        self
    }

    /// Appends one header pair. Duplicate names are permitted and preserved
    /// in insertion order.
    pub fn header(&mut self, name: &str, value: &str) -> &mut Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Serializes into the gateway shape: invokes `start_response` exactly
    /// once with the status line (e.g. `"200 OK"`) and the accumulated header
    /// list, then returns the body as a single byte chunk.
    pub(crate) fn into_gateway<F>(self, start_response: F) -> Vec<Bytes>
    where
        F: FnOnce(&str, &[(String, String)]),
    {
        let status_line = self.status.to_string();
        start_response(&status_line, &self.headers);
        vec![Bytes::from(self.body.into_bytes())]
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}
