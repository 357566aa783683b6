//! The gateway-facing application and its dispatch cycle.
//!
//! # The host contract
//!
//! umi never touches a socket. The host gateway owns connections, TLS,
//! timeouts, and the process or thread model; per request it hands over one
//! [`Environ`] and one responder callback, and gets back the response body as
//! byte chunks. [`App::handle`] is that boundary, and everything the crate
//! does happens inside one synchronous call to it.
//!
//! A threaded host may share one `App` by reference across calls: dispatch
//! keeps no per-call state in the `App`, and the registry is immutable after
//! startup.

use bytes::Bytes;
use tracing::debug;

use crate::environ::Environ;
use crate::middleware::{BoxedMiddleware, Middleware};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// The dispatch entry point: a route registry plus a global middleware chain.
///
/// ```rust,no_run
/// use umi::{middleware, App, Captures, Request, Response, Router, Status};
///
/// fn health(_req: &Request, res: &mut Response, _params: &Captures) {
///     res.send(Status::Ok, "ok");
/// }
///
/// let app = App::new(Router::new().get("/health", health))
///     .middleware(middleware::request_logger);
/// ```
pub struct App {
    router: Router,
    middlewares: Vec<BoxedMiddleware>,
}

impl App {
    /// Wraps a fully populated router.
    pub fn new(router: Router) -> Self {
        Self { router, middlewares: Vec::new() }
    }

    /// Appends a global middleware. Returns `self` for chaining.
    ///
    /// Global middlewares run once per dispatch cycle, in the order added,
    /// before the route scan, so they fire even when no route matches.
    pub fn middleware(mut self, middleware: impl Middleware) -> Self {
        self.middlewares.push(middleware.into_boxed_middleware());
        self
    }

    /// Core hot path: runs one full dispatch cycle.
    ///
    /// Adapts `environ` into a [`Request`], runs the global middleware chain,
    /// scans the registry in registration order for the first entry whose
    /// template matches the request path and whose method matches the request
    /// method, runs that entry's middlewares, and invokes its handler. When
    /// nothing matches, including a request whose method string is outside
    /// the supported set, the response keeps its default not-found state.
    ///
    /// `start_response` is invoked exactly once, with the status line (e.g.
    /// `"200 OK"`) and the accumulated header list, before the body chunks
    /// are returned. Handler panics are not caught; a host that must survive
    /// them wraps this call itself.
    pub fn handle<F>(&self, environ: Environ, start_response: F) -> Vec<Bytes>
    where
        F: FnOnce(&str, &[(String, String)]),
    {
        let mut response = Response::new();
        let request = Request::from_environ(environ);

        for middleware in &self.middlewares {
            middleware.call(&request);
        }

        let selected = self.router.iter().find_map(|entry| {
            entry
                .template
                .captures(request.path())
                .filter(|_| request.method() == Some(entry.method))
                .map(|params| (entry, params))
        });

        match selected {
            Some((entry, params)) => {
                debug!(method = %entry.method(), template = entry.template(), "route matched");
                for middleware in &entry.middlewares {
                    middleware.call(&request);
                }
                entry.handler.call(&request, &mut response, &params);
            }
            None => {
                debug!(path = request.path(), "no route matched");
            }
        }

        response.into_gateway(start_response)
    }
}
