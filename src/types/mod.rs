//! Error types and utilities.
//!
//! This module provides the [`Error`] node handle together with the pieces it
//! is made of: [`Tag`]s, [`StackTrace`]s, the tree formatter and the
//! serializable [`Value`] snapshot.
//!
//! # Examples
//!
//! ```
//! use error_tree::{join, Error};
//!
//! let err = join([Error::new("disk full"), Error::new("quota exceeded")])
//!     .map(|err| err.with_message("saving report"));
//!
//! if let Some(err) = err {
//!     println!("{err:#}");
//!     // saving report
//!     // ├── disk full
//!     // └── quota exceeded
//! }
//! ```
use smallvec::SmallVec;

pub mod error;
pub mod error_formatter;
pub(crate) mod repr;
pub mod stack;
pub mod tag;
pub mod value;

pub use error::{Error, TODO_MESSAGE};
pub use error_formatter::{ErrorFormatBuilder, FormatConfig, Verbosity};
pub use stack::{Frame, StackTrace};
pub use tag::{tag, Tag};
pub use value::{value_of, Value};

/// SmallVec-backed collection used for the children of multi-cause nodes.
///
/// Uses inline storage for up to 2 elements, the common shape of a join.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
