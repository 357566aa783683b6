//! The raw request environment handed over by the host gateway.
//!
//! The host server describes one incoming request as a string-keyed variable
//! mapping plus an input byte-stream for the request body. The keys follow
//! the CGI convention: the constants below name the ones the dispatch layer
//! consumes, and request headers arrive prefixed with `HTTP_`, uppercased,
//! with hyphens folded to underscores (`user-agent` → `HTTP_USER_AGENT`).
//! Every variable, consumed or not, stays reachable on the adapted request
//! through [`Request::raw`](crate::Request::raw).
//!
//! Tests and demos build environments by hand:
//!
//! ```rust
//! use umi::Environ;
//!
//! let environ = Environ::new("POST", "/users")
//!     .query("notify=1")
//!     .content_type("application/json")
//!     .header("user-agent", "curl/8.5.0")
//!     .body(r#"{"name": "Ada"}"#);
//!
//! assert_eq!(environ.get("REQUEST_METHOD"), Some("POST"));
//! assert_eq!(environ.get("CONTENT_LENGTH"), Some("15"));
//! assert_eq!(environ.get("HTTP_USER_AGENT"), Some("curl/8.5.0"));
//! ```

use std::collections::HashMap;
use std::io::{Cursor, Read};

/// Environment key: the request method, e.g. `"GET"`.
pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
/// Environment key: the request path, e.g. `"/users/42"`.
pub const PATH_INFO: &str = "PATH_INFO";
/// Environment key: the raw query string, e.g. `"page=2&sort=name"`.
pub const QUERY_STRING: &str = "QUERY_STRING";
/// Environment key: the request body's media type.
pub const CONTENT_TYPE: &str = "CONTENT_TYPE";
/// Environment key: the request body's length in bytes.
pub const CONTENT_LENGTH: &str = "CONTENT_LENGTH";

/// Key prefix marking request headers in the environment.
pub(crate) const HEADER_PREFIX: &str = "HTTP_";

/// One raw request environment.
///
/// Owns the variable mapping and the body input stream for a single dispatch
/// cycle; [`App::handle`](crate::App::handle) consumes it.
pub struct Environ {
    pub(crate) vars: HashMap<String, String>,
    pub(crate) input: Option<Box<dyn Read + Send>>,
}

impl Environ {
    /// Creates an environment for a `method` and `path`, with no query
    /// string, headers, or body.
    pub fn new(method: &str, path: &str) -> Self {
        let mut vars = HashMap::new();
        vars.insert(REQUEST_METHOD.to_owned(), method.to_owned());
        vars.insert(PATH_INFO.to_owned(), path.to_owned());
        Self { vars, input: None }
    }

    /// Sets one raw environment variable. Later calls with the same key
    /// overwrite.
    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Sets the raw query string (`QUERY_STRING`), without a leading `?`.
    pub fn query(self, query: &str) -> Self {
        self.var(QUERY_STRING, query)
    }

    /// Sets the request body's media type (`CONTENT_TYPE`).
    pub fn content_type(self, value: &str) -> Self {
        self.var(CONTENT_TYPE, value)
    }

    /// Adds a request header under its environment key: `user-agent` is
    /// stored as `HTTP_USER_AGENT`.
    pub fn header(self, name: &str, value: &str) -> Self {
        let key = format!("{HEADER_PREFIX}{}", name.to_ascii_uppercase().replace('-', "_"));
        self.var(key, value)
    }

    /// Sets the body input stream.
    ///
    /// The request adapter reads up to `CONTENT_LENGTH` bytes from it, so
    /// that variable must be set as well. [`Environ::body`] does both.
    pub fn input(mut self, reader: impl Read + Send + 'static) -> Self {
        self.input = Some(Box::new(reader));
        self
    }

    /// Sets an in-memory request body and its matching `CONTENT_LENGTH`.
    pub fn body(self, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        self.var(CONTENT_LENGTH, bytes.len().to_string())
            .input(Cursor::new(bytes))
    }

    /// Returns a raw environment variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}
