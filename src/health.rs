//! Built-in health-check handlers.
//!
//! Orchestrators probe two things, and the answers want to be boring:
//!
//! | Probe | Typical path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can it serve traffic? Failure → pulled from rotation. |
//!
//! Both handlers here answer `200 OK` unconditionally; register them on any
//! path you like:
//!
//! ```rust,no_run
//! use umi::{Router, health};
//!
//! let router = Router::new()
//!     .get("/healthz", health::liveness)
//!     .get("/readyz", health::readiness);
//! ```
//!
//! When readiness must gate on dependencies (database connections,
//! downstream services), write your own handler instead:
//!
//! ```rust,no_run
//! use umi::{Captures, Request, Response, Status};
//!
//! fn readiness(_req: &Request, res: &mut Response, _params: &Captures) {
//!     if dependencies_are_healthy() {
//!         res.send(Status::Ok, "ready");
//!     } else {
//!         res.send(Status::ServiceUnavailable, "not ready");
//!     }
//! }
//!
//! fn dependencies_are_healthy() -> bool { true }
//! ```

use crate::{Captures, Request, Response, Status};

/// Liveness probe handler.
///
/// Always answers `200 OK` with body `"ok"`. If the process can run a
/// dispatch cycle at all, it is alive; this handler intentionally has no
/// dependencies.
pub fn liveness(_req: &Request, res: &mut Response, _params: &Captures) {
    res.send(Status::Ok, "ok");
}

/// Readiness probe handler, the permissive default.
///
/// Always answers `200 OK` with body `"ready"`. Replace it with a handler of
/// your own when the application needs a warm-up period or must verify
/// dependency health before taking traffic.
pub fn readiness(_req: &Request, res: &mut Response, _params: &Captures) {
    res.send(Status::Ok, "ready");
}
