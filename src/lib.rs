//! # umi
//!
//! A minimal synchronous HTTP dispatch layer for gateway-hosted Rust
//! services. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The host gateway handles connections, TLS, timeouts, and the process or
//! thread model. umi does not — by design. The host does host things. The
//! dispatch layer does dispatch things. Per request the host hands over one
//! raw environment and one responder callback; umi hands back the body as
//! byte chunks.
//!
//! What the host already owns — umi intentionally ignores:
//!
//! - **Sockets and TLS** — accept loops, handshakes, keep-alive
//! - **Concurrency** — threads, processes, or an event loop; umi is
//!   re-entrant and shares state with nobody
//! - **Protocol parsing** — the environment arrives pre-parsed, CGI style
//!
//! What's left for umi — the only part that changes between applications:
//!
//! - **Route registry** — ordered (template, method) entries, first match wins
//! - **Path templates** — literal segments plus `{name}` captures
//! - **Middleware** — compile-time-checked `Fn(&Request)` hooks, global and
//!   per-route
//! - **Request/response adaptation** — environment in; status line, headers,
//!   and body bytes out
//!
//! ## Quick start
//!
//! ```rust
//! use umi::{middleware, App, Captures, Environ, Request, Response, Router, Status};
//!
//! fn health(_req: &Request, res: &mut Response, _params: &Captures) {
//!     res.send(Status::Ok, serde_json::json!({"message": "Service is healthy"}));
//! }
//!
//! fn get_user(_req: &Request, res: &mut Response, params: &Captures) {
//!     let id = params.get("id").unwrap_or("unknown");
//!     res.send(Status::Ok, serde_json::json!({"id": id}));
//! }
//!
//! let app = App::new(
//!     Router::new()
//!         .get("/health", health)
//!         .get("/users/{id}", get_user),
//! )
//! .middleware(middleware::request_logger);
//!
//! // One dispatch cycle, exactly as a host gateway would drive it:
//! let body = app.handle(Environ::new("GET", "/users/42"), |status_line, _headers| {
//!     assert_eq!(status_line, "200 OK");
//! });
//! assert_eq!(body[0].as_ref(), br#"{"id":"42"}"#);
//! ```

mod app;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod status;
mod template;

pub mod environ;
pub mod health;
pub mod middleware;

pub use app::App;
pub use environ::Environ;
pub use error::Error;
pub use handler::{Handler, HandlerFn};
pub use method::Method;
pub use request::{Body, Request};
pub use response::{Payload, Response};
pub use router::{RouteEntry, Router};
pub use status::Status;
pub use template::{Captures, Template};
