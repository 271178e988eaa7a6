//! Conformance checks for [`Adapter`] implementations.
//!
//! [`check_adapter`] runs an adapter over a set of foreign errors and reports
//! every way its output differs from what is expected, so adapter crates can
//! assert on the result in their own tests.
//!
//! # Examples
//!
//! ```
//! use error_tree::testing::{check_adapter, AdapterCase};
//! use error_tree::{tag, Error};
//!
//! let adapter = |err: &Error| {
//!     err.downcast_ref::<std::fmt::Error>()
//!         .map(|_| err.clone().with_tags([tag("layer", "fmt")]).with_types(["Format"]))
//! };
//!
//! let mismatches = check_adapter(
//!     &adapter,
//!     [AdapterCase::new(Error::from(std::fmt::Error))
//!         .types(["Format"])
//!         .tags([tag("layer", "fmt")])],
//! );
//! assert!(mismatches.is_empty(), "{mismatches:#?}");
//! ```

use crate::inspect;
use crate::traits::Adapter;
use crate::types::{Error, Tag};

/// One foreign error and what an adapter is expected to make of it.
#[derive(Debug, Clone)]
pub struct AdapterCase {
    pub error: Error,
    /// Own message of the adapted node, empty when it has none.
    pub message: String,
    /// Every type of the adapted error, sorted.
    pub types: Vec<String>,
    /// Every tag of the adapted error, sorted.
    pub tags: Vec<Tag>,
}

impl AdapterCase {
    /// A case expecting `error` to be recognized, with no own message, types or tags.
    pub fn new(error: Error) -> Self {
        Self { error, message: String::new(), types: Vec::new(), tags: Vec::new() }
    }

    /// Sets the message expected on the adapted node itself.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the expected types, in sorted order.
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the expected tags, in sorted order.
    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Checks `adapter` against `cases`, returning one description per mismatch.
///
/// For each case the adapter must recognize the error, and the result must
/// report the expected types (both through [`is`](crate::is) and
/// [`types`](crate::types())), tags and own message, must render a non-empty
/// message, and must lead back to the original error through
/// [`cause`](crate::cause). Finally a plain error created by this crate must
/// not be recognized.
pub fn check_adapter<I>(adapter: &dyn Adapter, cases: I) -> Vec<String>
where
    I: IntoIterator<Item = AdapterCase>,
{
    let mut mismatches = Vec::new();

    for case in cases {
        let name = format!("{}({})", case.error.type_name(), case.error);
        let Some(adapted) = adapter.adapt(&case.error) else {
            mismatches.push(format!("{name}: the error was not recognized"));
            continue;
        };

        for kind in &case.types {
            if !inspect::is(kind, &adapted) {
                mismatches.push(format!("{name}: {adapted:?} was expected to be a {kind:?} error"));
            }
        }

        let types = inspect::types(&adapted);
        if types != case.types {
            mismatches.push(format!(
                "{name}: types mismatch: expected {:?}, found {types:?}",
                case.types
            ));
        }

        let tags = inspect::tags(&adapted);
        if tags != case.tags {
            mismatches.push(format!(
                "{name}: tags mismatch: expected {:?}, found {tags:?}",
                case.tags
            ));
        }

        let message = adapted.message().unwrap_or_default();
        if message != case.message {
            mismatches.push(format!(
                "{name}: message mismatch: expected {:?}, found {message:?}",
                case.message
            ));
        }

        if adapted.to_string().is_empty() {
            mismatches.push(format!("{name}: {adapted:?} has no error message"));
        }

        let cause = inspect::cause(&adapted);
        if !cause.ptr_eq(&case.error) {
            mismatches.push(format!("{name}: invalid cause: {cause:?}"));
        }
    }

    let plain = Error::new("non-adaptable");
    if let Some(adapted) = adapter.adapt(&plain) {
        mismatches.push(format!("a plain error must not be recognized, got {adapted:?}"));
    }

    mismatches
}
