//! Composable error trees.
//!
//! An [`Error`] is an immutable node in a graph of causes. Builders wrap an
//! error with a message, a stack trace, classification types or key/value
//! tags, or join several errors into one; the walker functions then read the
//! graph back, the formatter renders it as a tree and [`Value`] snapshots it
//! for another process.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_tree::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Wrapping and classifying
//!
//! ```
//! use error_tree::{tag, Error, ResultExt};
//!
//! fn connect() -> Result<(), Error> {
//!     Err(Error::new("connection refused")
//!         .with_types(["Temporary"])
//!         .with_tags([tag("host", "db-1")]))
//! }
//!
//! let err = connect().wrap_err("loading user").unwrap_err();
//! assert_eq!(err.to_string(), "loading user: connection refused");
//! assert!(error_tree::is("Temporary", &err));
//! assert_eq!(error_tree::lookup_tag(&err, "host"), Some("db-1"));
//! ```
//!
//! ## Trees
//!
//! ```
//! use error_tree::{join, Error};
//!
//! let err = join([Error::new("B"), Error::new("C")])
//!     .unwrap()
//!     .with_message("answer 42");
//!
//! assert_eq!(format!("{err:#}"), "answer 42\n├── B\n└── C");
//! ```
//!
//! ## Snapshots
//!
//! ```
//! use error_tree::{Error, Value};
//!
//! let value = Value::of(&Error::new("boom").with_types(["Fatal"]));
//! let rebuilt = value.to_error().unwrap();
//! assert_eq!(rebuilt.to_string(), "boom");
//! assert_eq!(error_tree::types(&rebuilt), ["Fatal"]);
//! ```

mod log;

/// Builders over optional errors
pub mod compose;
/// Cause, type and tag lookups over error graphs
pub mod inspect;
/// Error construction and classification macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Process-wide adapter registry
pub mod registry;
/// Conformance checks for adapters
pub mod testing;
/// Node, adapter and result extension traits
pub mod traits;
/// The error node, tags, stack traces, formatting and snapshots
pub mod types;

/// Async collectors (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

pub use compose::{
    from_any, join, recv, with_message, with_stack, with_stack_trace, with_tags, with_types, wrap,
};
pub use inspect::{cause, causes, is, lookup_tag, tags, types, walk, Walk};
pub use registry::{adapt, register};
pub use traits::*;
pub use types::{
    tag, value_of, Error, ErrorFormatBuilder, ErrorVec, FormatConfig, Frame, StackTrace, Tag,
    Value, Verbosity, TODO_MESSAGE,
};
