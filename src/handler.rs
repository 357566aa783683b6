//! Handler trait and type erasure.
//!
//! # How handlers are stored
//!
//! Every route entry carries a handler, and each handler has its own
//! concrete type (a fn item or a capturing closure), so the registry's
//! `Vec<RouteEntry>` stores them behind a trait object (`dyn
//! ErasedHandler`) with one uniform call interface.
//!
//! The chain from user code to vtable call:
//!
//! ```text
//! fn hello(req: &Request, res: &mut Response, params: &Captures) { … }
//!        ↓ router.get("/", hello)
//! hello.into_boxed_handler()                       ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(hello))                       ← heap-allocated wrapper
//!        ↓  stored as BoxedHandler = Arc<dyn ErasedHandler>
//! handler.call(&req, &mut res, &params)            ← one vtable dispatch
//! ```
//!
//! The only runtime cost per dispatch is **one virtual call**.

use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;
use crate::template::Captures;

// ── Internal types ────────────────────────────────────────────────────────────

/// Internal dispatch interface.
///
/// Must be `pub` (hidden) because [`BoxedHandler`] mentions it and
/// `Handler::into_boxed_handler` returns that alias; nothing outside the
/// crate can do anything useful with it.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: &Request, res: &mut Response, params: &Captures);
}

/// A heap-allocated, type-erased handler, as stored in a route entry.
///
/// `Arc` rather than `Box` so one handler value can back several routes and
/// a threaded host can share the registry freely.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Plain-function handler signature.
///
/// Handy for building mixed [`Router::group`](crate::Router::group) tables,
/// where every entry must share one concrete type:
///
/// ```rust,no_run
/// use umi::{HandlerFn, Router};
/// # fn list(_: &umi::Request, _: &mut umi::Response, _: &umi::Captures) {}
/// # fn create(_: &umi::Request, _: &mut umi::Response, _: &umi::Captures) {}
///
/// Router::new().group("/users", Vec::new(), [
///     ("get", list as HandlerFn),
///     ("post", create),
/// ]);
/// ```
pub type HandlerFn = fn(&Request, &mut Response, &Captures);

/// Implemented for every valid route handler.
///
/// You never implement this yourself. It is automatically satisfied for any
/// function or closure with the signature:
///
/// ```text
/// fn name(req: &Request, res: &mut Response, params: &Captures)
/// ```
///
/// The trait is **sealed** (via the private `Sealed` supertrait): only the
/// blanket impl below can satisfy it, so the registry can only ever hold
/// values with this exact shape.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

/// `Sealed` lives in a private module, so no external crate can name it or
/// implement `Handler` on its own types.
mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

impl<F> private::Sealed for F where F: Fn(&Request, &mut Response, &Captures) + Send + Sync + 'static
{}

/// Implement `Handler` for any function with the right signature.
impl<F> Handler for F
where
    F: Fn(&Request, &mut Response, &Captures) + Send + Sync + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Holds a concrete handler `F` and implements [`ErasedHandler`], bridging
/// the typed world to the trait-object world.
struct FnHandler<F>(F);

impl<F> ErasedHandler for FnHandler<F>
where
    F: Fn(&Request, &mut Response, &Captures) + Send + Sync,
{
    fn call(&self, req: &Request, res: &mut Response, params: &Captures) {
        (self.0)(req, res, params)
    }
}
