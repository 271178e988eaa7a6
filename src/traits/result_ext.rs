//! Extension trait for annotating the error side of a `Result`.
//!
//! This module provides [`ResultExt`], which converts the error into an
//! [`Error`] and adds a message, types or tags without a `.map_err()` chain.
//!
//! # Examples
//!
//! ```
//! use error_tree::ResultExt;
//!
//! fn load_config() -> Result<String, error_tree::Error> {
//!     std::fs::read_to_string("/nonexistent/config.toml")
//!         .wrap_err("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.to_string().starts_with("loading configuration file: "));
//! ```

use crate::types::{Error, StackTrace, Tag};

/// Extension trait for adding context to `Result` types ergonomically.
///
/// Every method leaves `Ok` values untouched. The error is converted with
/// `Into<Error>` and adapted by the builder that wraps it.
///
/// # Examples
///
/// ```
/// use error_tree::{tag, ResultExt};
///
/// let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
/// let err = result
///     .with_tags([tag("stage", "render")])
///     .wrap_err_with(|| format!("rendering page {}", 7))
///     .unwrap_err();
///
/// assert_eq!(err.to_string(), "rendering page 7: an error occurred when formatting an argument");
/// assert_eq!(error_tree::lookup_tag(&err, "stage"), Some("render"));
/// ```
pub trait ResultExt<T> {
    /// Prefixes the error message and records the caller's stack trace.
    fn wrap_err(self, message: impl Into<String>) -> Result<T, Error>;

    /// Like [`wrap_err`](ResultExt::wrap_err), building the message only on error.
    fn wrap_err_with<S, F>(self, f: F) -> Result<T, Error>
    where
        S: Into<String>,
        F: FnOnce() -> S;

    fn with_types<I, S>(self, types: I) -> Result<T, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>;

    fn with_tags<I, G>(self, tags: I) -> Result<T, Error>
    where
        I: IntoIterator<Item = G>,
        G: Into<Tag>;
}

impl<T, E: Into<Error>> ResultExt<T> for Result<T, E> {
    #[inline(never)]
    fn wrap_err(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into().wrap_with(message.into(), StackTrace::capture(1))),
        }
    }

    #[inline(never)]
    fn wrap_err_with<S, F>(self, f: F) -> Result<T, Error>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into().wrap_with(f().into(), StackTrace::capture(1))),
        }
    }

    #[inline]
    fn with_types<I, S>(self, types: I) -> Result<T, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.map_err(|err| err.into().with_types(types))
    }

    #[inline]
    fn with_tags<I, G>(self, tags: I) -> Result<T, Error>
    where
        I: IntoIterator<Item = G>,
        G: Into<Tag>,
    {
        self.map_err(|err| err.into().with_tags(tags))
    }
}
