//! Ordered-scan route registry.
//!
//! One flat list of entries, scanned in registration order. No radix tree, no
//! specificity scoring, no reflection. You register a route, the first match
//! wins. That is all.

use std::slice;

use tracing::debug;

use crate::error::Error;
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::BoxedMiddleware;
use crate::template::Template;

/// One registered route: a (template, method) pair bound to a handler and
/// its route-scoped middleware list. Built at registration, immutable after.
pub struct RouteEntry {
    pub(crate) template: Template,
    pub(crate) method: Method,
    pub(crate) handler: BoxedHandler,
    pub(crate) middlewares: Vec<BoxedMiddleware>,
}

impl RouteEntry {
    /// The raw template string as registered.
    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    /// The method this entry answers to.
    pub fn method(&self) -> Method {
        self.method
    }
}

/// The application route registry.
///
/// Registration order is the contract: dispatch scans entries oldest-first
/// and the first entry whose template and method both match wins, even when
/// a later entry is more specific. Register the exceptional route before the
/// general one. Build the registry once at startup; pass it to
/// [`App::new`](crate::App::new). Each [`Router::on`] call returns `self` so
/// registrations chain naturally.
pub struct Router {
    routes: Vec<RouteEntry>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a handler for a method + template pair.
    ///
    /// Fails with [`Error::DuplicateRoute`] when the exact (template, method)
    /// pair is already present; the comparison is on the raw template string,
    /// so `/users/{id}` and `/users/{name}` are distinct. On success the new
    /// entry is appended and returned. The same handler value may back any
    /// number of routes.
    pub fn register(
        &mut self,
        method: Method,
        path: &str,
        handler: impl Handler,
        middlewares: Vec<BoxedMiddleware>,
    ) -> Result<&RouteEntry, Error> {
        if self
            .routes
            .iter()
            .any(|entry| entry.template.as_str() == path && entry.method == method)
        {
            return Err(Error::DuplicateRoute { method, path: path.to_owned() });
        }

        debug!(method = %method, template = path, "route registered");
        let index = self.routes.len();
        self.routes.push(RouteEntry {
            template: Template::parse(path),
            method,
            handler: handler.into_boxed_handler(),
            middlewares,
        });
        Ok(&self.routes[index])
    }

    /// Registers a handler for a method + template pair, panicking on a
    /// duplicate. Returns `self` for chaining.
    ///
    /// Path captures use `{name}` syntax; `params.get("name")` retrieves them:
    ///
    /// ```rust,no_run
    /// # use umi::{Captures, Method, Request, Response, Router};
    /// # fn get_user(_: &Request, _: &mut Response, _: &Captures) {}
    /// # fn create_user(_: &Request, _: &mut Response, _: &Captures) {}
    /// # fn delete_user(_: &Request, _: &mut Response, _: &Captures) {}
    /// Router::new()
    ///     .on(Method::Delete, "/users/{id}", delete_user)
    ///     .on(Method::Get,    "/users/{id}", get_user)
    ///     .on(Method::Post,   "/users",      create_user);
    /// ```
    pub fn on(self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.on_with(method, path, Vec::new(), handler)
    }

    /// Like [`Router::on`], with a route-scoped middleware list that runs
    /// after the global chain whenever this route is selected.
    pub fn on_with(
        mut self,
        method: Method,
        path: &str,
        middlewares: Vec<BoxedMiddleware>,
        handler: impl Handler,
    ) -> Self {
        if let Err(e) = self.register(method, path, handler, middlewares) {
            panic!("invalid route `{path}`: {e}");
        }
        self
    }

    /// `GET` shorthand for [`Router::on`].
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    /// `POST` shorthand for [`Router::on`].
    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    /// `PUT` shorthand for [`Router::on`].
    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Put, path, handler)
    }

    /// `DELETE` shorthand for [`Router::on`].
    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Delete, path, handler)
    }

    /// `GET` shorthand for [`Router::on_with`].
    pub fn get_with(
        self,
        path: &str,
        middlewares: Vec<BoxedMiddleware>,
        handler: impl Handler,
    ) -> Self {
        self.on_with(Method::Get, path, middlewares, handler)
    }

    /// `POST` shorthand for [`Router::on_with`].
    pub fn post_with(
        self,
        path: &str,
        middlewares: Vec<BoxedMiddleware>,
        handler: impl Handler,
    ) -> Self {
        self.on_with(Method::Post, path, middlewares, handler)
    }

    /// `PUT` shorthand for [`Router::on_with`].
    pub fn put_with(
        self,
        path: &str,
        middlewares: Vec<BoxedMiddleware>,
        handler: impl Handler,
    ) -> Self {
        self.on_with(Method::Put, path, middlewares, handler)
    }

    /// `DELETE` shorthand for [`Router::on_with`].
    pub fn delete_with(
        self,
        path: &str,
        middlewares: Vec<BoxedMiddleware>,
        handler: impl Handler,
    ) -> Self {
        self.on_with(Method::Delete, path, middlewares, handler)
    }

    /// Grouped registration: one template shared by several verbs.
    ///
    /// `handlers` is an explicit (verb name, handler) table. Names are
    /// matched against the supported method set case-insensitively; a name
    /// that is not a method is skipped, so a table can carry non-verb entries
    /// without breaking registration. The shared middleware list is attached
    /// to every produced entry. This is also the registration surface for the
    /// verbs without a shorthand: HEAD, CONNECT, OPTIONS, TRACE, and PATCH.
    ///
    /// ```rust,no_run
    /// use umi::{HandlerFn, Router};
    /// # fn list(_: &umi::Request, _: &mut umi::Response, _: &umi::Captures) {}
    /// # fn create(_: &umi::Request, _: &mut umi::Response, _: &umi::Captures) {}
    /// # fn probe(_: &umi::Request, _: &mut umi::Response, _: &umi::Captures) {}
    ///
    /// Router::new().group("/users", Vec::new(), [
    ///     ("get", list as HandlerFn),
    ///     ("post", create),
    ///     ("head", probe),
    /// ]);
    /// ```
    pub fn group<H: Handler>(
        mut self,
        path: &str,
        middlewares: Vec<BoxedMiddleware>,
        handlers: impl IntoIterator<Item = (&'static str, H)>,
    ) -> Self {
        for (name, handler) in handlers {
            let Ok(method) = name.to_ascii_uppercase().parse::<Method>() else {
                debug!(name, template = path, "skipped non-method group entry");
                continue;
            };
            if let Err(e) = self.register(method, path, handler, middlewares.clone()) {
                panic!("invalid route `{path}`: {e}");
            }
        }
        self
    }

    /// Entries in registration order, the order dispatch scans them in.
    /// Restartable: every call scans from the oldest entry again.
    pub fn iter(&self) -> slice::Iter<'_, RouteEntry> {
        self.routes.iter()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
