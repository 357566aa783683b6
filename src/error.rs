//! Unified error type.

use thiserror::Error;

use crate::method::Method;

/// The error type returned by umi's fallible operations.
///
/// Application-level outcomes (404, 422, etc.) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// setup mistakes: registering the same route twice, naming a method outside
/// the supported set, or looking up a status code outside the closed set. A
/// live dispatch cycle never produces an `Error`; malformed request data is
/// recovered by the request adapter as an absent body.
#[derive(Debug, Error)]
pub enum Error {
    /// A (template, method) pair was registered twice.
    #[error("duplicate route: {method} {path} is already registered")]
    DuplicateRoute {
        /// Method of the rejected registration.
        method: Method,
        /// Raw template string of the rejected registration.
        path: String,
    },

    /// A method name outside the fixed supported set.
    #[error("unsupported request method `{0}`")]
    UnsupportedMethod(String),

    /// A numeric status code outside the closed status set.
    #[error("unknown status code {0}")]
    UnknownStatus(u16),
}
