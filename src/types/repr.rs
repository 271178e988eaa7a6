use std::error::Error as StdError;

use crate::traits::{AsAny, Node};
use crate::types::{Error, ErrorVec, StackTrace, Tag};

/// A foreign error that can still be downcast to its concrete type.
pub(crate) trait ForeignError: StdError + AsAny + Send + Sync {
    fn as_std(&self) -> &(dyn StdError + 'static);
}

impl<E: StdError + Send + Sync + 'static> ForeignError for E {
    #[inline]
    fn as_std(&self) -> &(dyn StdError + 'static) {
        self
    }
}

/// Carries an already type-erased error into the graph.
#[derive(Debug)]
pub(crate) struct BoxedError(pub(crate) Box<dyn StdError + Send + Sync + 'static>);

impl std::fmt::Display for BoxedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// The node variants behind an [`Error`] handle.
///
/// Everything except `Foreign` and `Custom` is an internal variant: those are
/// never passed through the adapter registry again.
pub(crate) enum Repr {
    Base {
        msg: String,
        stack: StackTrace,
    },
    Multi {
        causes: ErrorVec<Error>,
    },
    WithMessage {
        cause: Error,
        msg: String,
    },
    WithStack {
        cause: Error,
        stack: StackTrace,
    },
    WithTypes {
        cause: Error,
        types: Vec<String>,
    },
    WithTags {
        cause: Error,
        tags: Vec<Tag>,
    },
    /// Rebuilt from a [`Value`](crate::Value) snapshot.
    Value {
        msg: String,
        causes: Vec<Error>,
        types: Vec<String>,
        tags: Vec<Tag>,
        stack: StackTrace,
    },
    Todo,
    Foreign {
        error: Box<dyn ForeignError>,
        type_name: &'static str,
    },
    Custom(Box<dyn Node>),
}

impl Repr {
    #[inline]
    pub(crate) fn is_internal(&self) -> bool {
        !matches!(self, Repr::Foreign { .. } | Repr::Custom(_))
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Repr::Base { .. } => "Base",
            Repr::Multi { .. } => "Multi",
            Repr::WithMessage { .. } => "WithMessage",
            Repr::WithStack { .. } => "WithStack",
            Repr::WithTypes { .. } => "WithTypes",
            Repr::WithTags { .. } => "WithTags",
            Repr::Value { .. } => "Value",
            Repr::Todo => "Todo",
            Repr::Foreign { type_name, .. } => *type_name,
            Repr::Custom(node) => node.type_name(),
        }
    }
}
