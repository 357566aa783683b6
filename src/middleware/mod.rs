//! Middleware layer.
//!
//! Middleware observes requests and is the right place for cross-cutting
//! concerns: structured request logging, metrics, request-id extraction, and
//! authentication-header inspection.
//!
//! Two scopes exist. Global middleware, added with
//! [`App::middleware`](crate::App::middleware), runs on every dispatch cycle
//! before the route scan, so it fires even when no route will match.
//! Route-scoped middleware, attached at registration, runs only when its
//! route is selected, after the global chain and before the handler.
//!
//! A middleware sees the [`Request`] and nothing else. The contract is any
//! `Fn(&Request)`, checked at compile time, which keeps the response out of
//! reach by construction: only the matched handler writes it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::environ;
use crate::request::Request;

// ── Type erasure ──────────────────────────────────────────────────────────────

/// Internal dispatch interface, mirroring `ErasedHandler`.
#[doc(hidden)]
pub trait ErasedMiddleware {
    fn call(&self, req: &Request);
}

/// A heap-allocated, type-erased middleware, as stored in middleware lists.
///
/// `Arc` so grouped registration can attach one shared list to several
/// entries without cloning the middleware itself.
pub type BoxedMiddleware = Arc<dyn ErasedMiddleware + Send + Sync + 'static>;

/// Implemented for every valid middleware.
///
/// You never implement this yourself. It is automatically satisfied for any
/// function or closure with the signature `fn(req: &Request)`, and sealed so
/// nothing else can slip into a middleware list.
pub trait Middleware: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_middleware(self) -> BoxedMiddleware;
}

mod private {
    pub trait Sealed {}
}

impl<F> private::Sealed for F where F: Fn(&Request) + Send + Sync + 'static {}

impl<F> Middleware for F
where
    F: Fn(&Request) + Send + Sync + 'static,
{
    fn into_boxed_middleware(self) -> BoxedMiddleware {
        Arc::new(FnMiddleware(self))
    }
}

struct FnMiddleware<F>(F);

impl<F> ErasedMiddleware for FnMiddleware<F>
where
    F: Fn(&Request),
{
    fn call(&self, req: &Request) {
        (self.0)(req)
    }
}

/// Erases a middleware for storage in a route-scoped middleware list.
///
/// ```rust,no_run
/// use umi::{middleware, Router};
///
/// Router::new().get_with(
///     "/users",
///     vec![middleware::boxed(middleware::request_logger)],
///     |_req: &umi::Request, res: &mut umi::Response, _params: &umi::Captures| {
///         res.send(umi::Status::Ok, "[]");
///     },
/// );
/// ```
pub fn boxed(middleware: impl Middleware) -> BoxedMiddleware {
    middleware.into_boxed_middleware()
}

// ── Built-in middleware ───────────────────────────────────────────────────────

/// Built-in request logger.
///
/// Emits one `info` event per request carrying the raw method string, the
/// path, and the query mapping, plus a `debug` event when a body was decoded.
/// Wire it globally:
///
/// ```rust,no_run
/// use umi::{middleware, App, Router};
///
/// App::new(Router::new()).middleware(middleware::request_logger);
/// ```
pub fn request_logger(req: &Request) {
    info!(
        method = req.raw(environ::REQUEST_METHOD).unwrap_or("-"),
        path = req.path(),
        queries = ?req.queries(),
        "request received"
    );
    if !req.body().is_none() {
        debug!(body = ?req.body(), "request body");
    }
}
