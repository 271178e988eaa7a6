//! Macros for building errors and declaring classifications.
//!
//! - [`macro@crate::format_err`] - Creates a new error from a format string, capturing the
//!   caller's stack trace.
//! - [`macro@crate::join`] - Joins any mix of `Error` and `Option<Error>` values.
//! - [`macro@crate::predicates`] - Implements the classification predicates of a
//!   [`Node`](crate::Node).
//!
//! # Examples
//!
//! ```
//! use error_tree::{format_err, join, Error};
//!
//! let missing: Option<Error> = None;
//! let err = join!(format_err!("shard {} offline", 3), missing, Error::new("replica lagging"));
//!
//! assert_eq!(err.unwrap().to_string(), "shard 3 offline; replica lagging");
//! ```

/// Creates an [`Error`](crate::Error) whose message is built like `format!`.
///
/// The stack trace starts at the macro call site.
///
/// # Examples
///
/// ```
/// use error_tree::format_err;
///
/// let answer = 42;
/// let err = format_err!("unexpected answer: {answer}");
/// assert_eq!(err.to_string(), "unexpected answer: 42");
/// ```
#[macro_export]
macro_rules! format_err {
    ($($arg:tt)*) => {
        $crate::Error::new(::std::format!($($arg)*))
    };
}

/// Variadic form of [`join`](crate::join()).
///
/// Each argument is either an [`Error`](crate::Error) or an
/// `Option<Error>`; absent ones are dropped.
#[macro_export]
macro_rules! join {
    ($($err:expr),* $(,)?) => {
        $crate::join([$(::core::option::Option::<$crate::Error>::from($err)),*])
    };
}

/// Implements [`Node::predicate`](crate::Node::predicate) and
/// [`Node::predicate_names`](crate::Node::predicate_names) inside an
/// `impl Node` block.
///
/// Each entry names a classification and the expression answering it; the
/// identifier between the bars is bound to `&Self`.
///
/// # Examples
///
/// ```
/// use error_tree::{predicates, Error, Node};
/// use std::fmt;
///
/// struct HttpStatus(u16);
///
/// impl fmt::Display for HttpStatus {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "HTTP {}", self.0)
///     }
/// }
///
/// impl Node for HttpStatus {
///     predicates! {
///         Temporary => |status| status.0 == 503 || status.0 == 429,
///         NotFound => |status| status.0 == 404,
///     }
/// }
///
/// let err = Error::from_node(HttpStatus(503));
/// assert!(error_tree::is("Temporary", &err));
/// assert!(!error_tree::is("NotFound", &err));
/// assert_eq!(error_tree::types(&err), ["Temporary"]);
/// ```
#[macro_export]
macro_rules! predicates {
    ($($name:ident => |$node:ident| $body:expr),* $(,)?) => {
        fn predicate(&self, name: &str) -> ::core::option::Option<bool> {
            match name {
                $(::core::stringify!($name) => {
                    let $node: &Self = self;
                    ::core::option::Option::Some($body)
                })*
                _ => ::core::option::Option::None,
            }
        }

        fn predicate_names(&self) -> &'static [&'static str] {
            &[$(::core::stringify!($name)),*]
        }
    };
}
