//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_tree::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`format_err!`], [`join!`], [`predicates!`]
//! - **Types**: [`Error`], [`Tag`], [`Value`]
//! - **Traits**: [`ResultExt`], [`Node`]
//! - **Functions**: [`tag`], [`is`], [`lookup_tag`]
//!
//! # Examples
//!
//! ```
//! use error_tree::prelude::*;
//!
//! fn load(path: &str) -> Result<String, Error> {
//!     std::fs::read_to_string(path)
//!         .with_tags([tag("path", path)])
//!         .wrap_err("loading configuration")
//! }
//!
//! let err = load("/nonexistent/app.toml").unwrap_err();
//! assert_eq!(lookup_tag(&err, "path"), Some("/nonexistent/app.toml"));
//! ```

// Macros
pub use crate::{format_err, join, predicates};

// Core types
pub use crate::types::{tag, Error, Tag, Value};

// Traits
pub use crate::traits::{Node, ResultExt};

// Lookups
pub use crate::inspect::{is, lookup_tag};
