//! The capability surface of an error node.
//!
//! Every internal variant of [`Error`](crate::Error) answers these questions
//! itself; [`Node`] lets other types join the graph with the same answers.
//! Adapters typically return a small `Node` type that wraps the foreign error
//! as its cause and adds classifications.
//!
//! # Examples
//!
//! ```
//! use error_tree::{predicates, Error, Node};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct Timeout {
//!     cause: Error,
//! }
//!
//! impl fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         fmt::Display::fmt(&self.cause, f)
//!     }
//! }
//!
//! impl Node for Timeout {
//!     fn cause(&self) -> Option<&Error> {
//!         Some(&self.cause)
//!     }
//!
//!     predicates! {
//!         Timeout => |_e| true,
//!         Temporary => |_e| true,
//!     }
//! }
//!
//! let err = Error::from_node(Timeout { cause: Error::new("dial tcp: i/o timeout") });
//! assert!(error_tree::is("Timeout", &err));
//! assert_eq!(error_tree::types(&err), ["Temporary", "Timeout"]);
//! ```

use core::any::Any;
use core::fmt::Display;

use crate::types::{Error, StackTrace, Tag};

/// Upcast helper so `dyn Node` values can be downcast to their concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Optional capabilities of an error node.
///
/// Each method defaults to "not supported". `Display` is the full error
/// string; [`message`](Node::message) is the node's own text, which the tree
/// formatter and the snapshot codec prefer so a wrapper's message is not
/// printed twice.
pub trait Node: Display + AsAny + Send + Sync {
    /// The single error this node wraps.
    fn cause(&self) -> Option<&Error> {
        None
    }

    /// The errors this node aggregates. Takes precedence over [`cause`](Node::cause).
    fn causes(&self) -> Option<&[Error]> {
        None
    }

    /// Own message, distinct from the full `Display` string.
    fn message(&self) -> Option<&str> {
        None
    }

    /// Explicit classification names.
    fn types(&self) -> &[String] {
        &[]
    }

    fn tags(&self) -> &[Tag] {
        &[]
    }

    fn stack_trace(&self) -> Option<&StackTrace> {
        None
    }

    /// Evaluates the zero-argument classification predicate called `name`.
    ///
    /// `None` means this node has no such predicate. Usually generated with
    /// [`predicates!`](crate::predicates).
    fn predicate(&self, _name: &str) -> Option<bool> {
        None
    }

    /// Names of every predicate [`predicate`](Node::predicate) knows about.
    fn predicate_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// Name shown by the structural dump.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
