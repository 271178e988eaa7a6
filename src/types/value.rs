//! Serializable error snapshots.
//!
//! A [`Value`] carries everything a reader of an error can observe (message,
//! types, tags, stack and the tree of causes) in plain owned data, so it can
//! cross a process boundary and be turned back into an [`Error`] on the other
//! side.
//!
//! # Examples
//!
//! ```
//! use error_tree::{tag, Error, Value};
//!
//! let err = Error::new("timeout").with_types(["Temporary"]).with_tags([tag("op", "read")]);
//! let value = Value::of(&err);
//!
//! assert_eq!(value.message, "timeout");
//! assert_eq!(value.types, ["Temporary"]);
//!
//! let rebuilt = value.to_error().unwrap();
//! assert!(error_tree::is("Temporary", &rebuilt));
//! assert_eq!(error_tree::lookup_tag(&rebuilt, "op"), Some("read"));
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::inspect::inspect;
use crate::log::trace;
use crate::types::repr::Repr;
use crate::types::tag::{tags_from_map, tags_to_map};
use crate::types::{Error, StackTrace};

/// Plain-data snapshot of an error and its causes.
///
/// Single-cause chains are collapsed into one value exactly as they are
/// collapsed into one line of the tree rendering; only multi-cause nodes
/// produce entries in `causes`. Stack frames are rendered as
/// `file:line:function`, with an empty string between two captured traces.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Value {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub message: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub types: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "BTreeMap::is_empty"))]
    pub tags: BTreeMap<String, String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub stack: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub causes: Vec<Value>,
}

impl Value {
    /// Snapshots `err`.
    pub fn of(err: &Error) -> Self {
        let inspection = inspect(err);

        let stacks: Vec<&StackTrace> =
            inspection.stacks.iter().copied().filter(|stack| !stack.is_empty()).collect();
        let mut stack = Vec::with_capacity(stacks.iter().map(|s| s.len() + 1).sum());
        for (i, trace) in stacks.iter().enumerate() {
            if i != 0 {
                stack.push(String::new());
            }
            stack.extend(trace.iter().map(|frame| format!("{frame}:{}", frame.short_function())));
        }

        Self {
            message: inspection.message(),
            tags: tags_to_map(&inspection.tags),
            causes: inspection.causes.iter().map(Value::of).collect(),
            types: inspection.types,
            stack,
        }
    }

    /// Whether this is the snapshot of no error at all.
    pub fn is_nil(&self) -> bool {
        self.message.is_empty()
            && self.types.is_empty()
            && self.tags.is_empty()
            && self.stack.is_empty()
            && self.causes.is_empty()
    }

    /// Rebuilds an error carrying the stored message, types, tags and causes.
    ///
    /// The stored stack is not carried over: frames from another process mean
    /// nothing here, so the rebuilt error records the caller's stack instead.
    /// Returns `None` for a nil snapshot.
    #[inline(never)]
    pub fn to_error(&self) -> Option<Error> {
        self.to_error_with(StackTrace::capture(1))
    }

    fn to_error_with(&self, stack: StackTrace) -> Option<Error> {
        if self.is_nil() {
            return None;
        }
        trace!(causes = self.causes.len(), "rebuilding error from snapshot");

        let causes = self
            .causes
            .iter()
            .filter_map(|cause| cause.to_error_with(stack.clone()))
            .collect();
        Some(Error::from_repr(Repr::Value {
            msg: self.message.clone(),
            causes,
            types: self.types.clone(),
            tags: tags_from_map(&self.tags),
            stack,
        }))
    }
}

impl From<&Error> for Value {
    #[inline]
    fn from(err: &Error) -> Self {
        Self::of(err)
    }
}

/// Snapshots an optional error; `None` gives the nil snapshot.
#[inline]
pub fn value_of(err: Option<&Error>) -> Value {
    err.map(Value::of).unwrap_or_default()
}
