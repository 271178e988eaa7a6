//! Core traits for error handling and composition.
//!
//! - [`Node`]: the capabilities an error node exposes to the walker
//! - [`Adapter`]: normalization of foreign errors into nodes
//! - [`ResultExt`]: annotating the error side of a `Result`

pub mod adapter;
pub mod node;
pub mod result_ext;

pub use adapter::Adapter;
pub use node::{AsAny, Node};
pub use result_ext::ResultExt;
