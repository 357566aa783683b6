//! Incoming request type and the adapter from the raw environment.

use std::collections::HashMap;
use std::io::Read;

use serde_json::Value;

use crate::environ::{self, Environ};
use crate::method::Method;

/// A request body, as decoded by the adapter.
///
/// Bodies are read for POST and PUT requests only, and only when the
/// environment carries a parsable `content-length`. Any decode failure, an
/// unreadable stream, undecodable JSON, or invalid UTF-8 text, is recovered
/// as [`Body::None`]; a handler can never tell a malformed body from an
/// absent one, and dispatch proceeds either way.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// No body was sent, or it could not be decoded.
    None,
    /// A decoded text body.
    Text(String),
    /// A decoded `application/json` body.
    Json(Value),
}

impl Body {
    /// `true` for [`Body::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Body::None)
    }

    /// Returns the text body, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the decoded JSON body, if any.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Body::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// An incoming request, adapted once per dispatch cycle from the raw
/// [`Environ`].
///
/// Everything here is read-only: middleware and handlers observe the same
/// request, and only the [`Response`](crate::Response) accumulates state.
pub struct Request {
    method: Option<Method>,
    path: String,
    headers: HashMap<String, String>,
    queries: HashMap<String, String>,
    body: Body,
    vars: HashMap<String, String>,
}

impl Request {
    /// Adapts the raw environment, consuming its input stream.
    pub(crate) fn from_environ(environ: Environ) -> Self {
        let Environ { vars, input } = environ;

        let method: Option<Method> = vars
            .get(environ::REQUEST_METHOD)
            .and_then(|name| name.parse().ok());
        let path = vars.get(environ::PATH_INFO).cloned().unwrap_or_default();

        let mut headers = HashMap::new();
        for (key, value) in &vars {
            if let Some(name) = key.strip_prefix(environ::HEADER_PREFIX) {
                headers.insert(normalize_header(name), value.clone());
            }
        }
        // CONTENT_TYPE and CONTENT_LENGTH arrive unprefixed; promote them
        // into the same mapping.
        if let Some(value) = vars.get(environ::CONTENT_TYPE) {
            headers.insert("content-type".to_owned(), value.clone());
        }
        if let Some(value) = vars.get(environ::CONTENT_LENGTH) {
            headers.insert("content-length".to_owned(), value.clone());
        }

        let mut queries = HashMap::new();
        if let Some(query) = vars.get(environ::QUERY_STRING).filter(|q| !q.is_empty()) {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    queries.insert(key.to_owned(), value.to_owned());
                }
            }
        }

        let body = match method {
            Some(Method::Post | Method::Put) => read_body(&headers, input),
            _ => Body::None,
        };

        Self { method, path, headers, queries, body, vars }
    }

    /// The request method, or `None` when the environment carried a string
    /// outside the supported set. A method-less request matches no route.
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// The request path, e.g. `/users/42`. Empty when `PATH_INFO` is absent.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Case-insensitive header lookup: `req.header("Content-Type")` and
    /// `req.header("content-type")` see the same value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&normalize_header(name)).map(String::as_str)
    }

    /// All request headers, keyed by lowercased hyphenated name.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns a query parameter by key.
    ///
    /// For `?page=2&sort=name`, `req.query("page")` returns `Some("2")`. A
    /// repeated key keeps its last value.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.queries.get(key).map(String::as_str)
    }

    /// The full query-parameter mapping.
    pub fn queries(&self) -> &HashMap<String, String> {
        &self.queries
    }

    /// The decoded request body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Returns a raw environment variable, consumed by the adapter or not.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

fn normalize_header(name: &str) -> String {
    name.to_ascii_lowercase().replace('_', "-")
}

fn read_body(headers: &HashMap<String, String>, input: Option<Box<dyn Read + Send>>) -> Body {
    let Some(length) = headers
        .get("content-length")
        .and_then(|value| value.trim().parse::<u64>().ok())
    else {
        return Body::None;
    };
    let Some(reader) = input else {
        return Body::None;
    };

    let mut buf = Vec::new();
    if reader.take(length).read_to_end(&mut buf).is_err() {
        return Body::None;
    }

    let json = headers
        .get("content-type")
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .is_some_and(|media| media.eq_ignore_ascii_case("application/json"));

    if json {
        match serde_json::from_slice(&buf) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::None,
        }
    } else {
        match String::from_utf8(buf) {
            Ok(text) => Body::Text(text),
            Err(_) => Body::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn adapts_method_path_and_query() {
        let req = Request::from_environ(
            Environ::new("GET", "/users/42").query("page=2&sort=name"),
        );
        assert_eq!(req.method(), Some(Method::Get));
        assert_eq!(req.path(), "/users/42");
        assert_eq!(req.query("page"), Some("2"));
        assert_eq!(req.query("sort"), Some("name"));
        assert_eq!(req.queries().len(), 2);
    }

    #[test]
    fn unsupported_method_string_adapts_to_none() {
        let req = Request::from_environ(Environ::new("BREW", "/coffee"));
        assert_eq!(req.method(), None);
        assert_eq!(req.path(), "/coffee");
    }

    #[test]
    fn missing_path_defaults_to_empty() {
        let mut environ = Environ::new("GET", "/");
        environ.vars.remove(environ::PATH_INFO);
        let req = Request::from_environ(environ);
        assert_eq!(req.path(), "");
    }

    #[test]
    fn empty_query_string_yields_no_parameters() {
        let req = Request::from_environ(Environ::new("GET", "/").query(""));
        assert!(req.queries().is_empty());
    }

    #[test]
    fn valueless_query_pairs_are_skipped_and_duplicates_keep_last() {
        let req = Request::from_environ(Environ::new("GET", "/").query("flag&page=1&page=2"));
        assert_eq!(req.query("flag"), None);
        assert_eq!(req.query("page"), Some("2"));
    }

    #[test]
    fn headers_are_unprefixed_and_normalized() {
        let req = Request::from_environ(
            Environ::new("GET", "/")
                .header("User-Agent", "curl/8.5.0")
                .content_type("text/plain"),
        );
        assert_eq!(req.header("user-agent"), Some("curl/8.5.0"));
        assert_eq!(req.header("USER-AGENT"), Some("curl/8.5.0"));
        assert_eq!(req.header("content-type"), Some("text/plain"));
        assert_eq!(req.header("x-missing"), None);
    }

    #[test]
    fn raw_exposes_unconsumed_variables() {
        let req = Request::from_environ(
            Environ::new("GET", "/").var("SERVER_PROTOCOL", "HTTP/1.1"),
        );
        assert_eq!(req.raw("SERVER_PROTOCOL"), Some("HTTP/1.1"));
        assert_eq!(req.raw("REQUEST_METHOD"), Some("GET"));
    }

    #[test]
    fn json_body_is_decoded_for_post() {
        let req = Request::from_environ(
            Environ::new("POST", "/users")
                .content_type("application/json; charset=utf-8")
                .body(r#"{"name": "Ada"}"#),
        );
        assert_eq!(req.body().as_json(), Some(&json!({"name": "Ada"})));
    }

    #[test]
    fn non_json_body_is_decoded_as_text() {
        let req = Request::from_environ(
            Environ::new("PUT", "/notes/1")
                .content_type("text/plain")
                .body("hello"),
        );
        assert_eq!(req.body().as_text(), Some("hello"));
    }

    #[test]
    fn body_without_content_type_is_text() {
        let req = Request::from_environ(Environ::new("POST", "/echo").body("raw"));
        assert_eq!(req.body().as_text(), Some("raw"));
    }

    #[test]
    fn body_is_skipped_for_get() {
        let req = Request::from_environ(
            Environ::new("GET", "/users")
                .content_type("application/json")
                .body(r#"{"name": "Ada"}"#),
        );
        assert!(req.body().is_none());
    }

    #[test]
    fn unparsable_content_length_reads_as_absent() {
        let req = Request::from_environ(
            Environ::new("POST", "/users")
                .var(environ::CONTENT_LENGTH, "banana")
                .input(std::io::Cursor::new(b"{}".to_vec())),
        );
        assert!(req.body().is_none());
    }

    #[test]
    fn undecodable_json_reads_as_absent() {
        let req = Request::from_environ(
            Environ::new("POST", "/users")
                .content_type("application/json")
                .body("{not json"),
        );
        assert!(req.body().is_none());
    }

    #[test]
    fn invalid_utf8_text_reads_as_absent() {
        let req = Request::from_environ(
            Environ::new("POST", "/bin").body(vec![0xff, 0xfe, 0xfd]),
        );
        assert!(req.body().is_none());
    }

    #[test]
    fn body_read_stops_at_content_length() {
        let req = Request::from_environ(
            Environ::new("POST", "/echo")
                .var(environ::CONTENT_LENGTH, "5")
                .input(std::io::Cursor::new(b"hello trailing garbage".to_vec())),
        );
        assert_eq!(req.body().as_text(), Some("hello"));
    }
}
