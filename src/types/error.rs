//! The error handle and its node variants.
//!
//! An [`Error`] is an immutable node in a graph of causes. Builders never
//! modify the node they wrap: each one returns a new node pointing at the
//! (adapted) previous one, so a graph is always built bottom-up and cannot
//! contain cycles.
//!
//! # Examples
//!
//! ```
//! use error_tree::{tag, Error};
//!
//! let err = Error::new("connection refused")
//!     .with_types(["Temporary"])
//!     .with_tags([tag("host", "db-1")])
//!     .wrap("loading user");
//!
//! assert_eq!(err.to_string(), "loading user: connection refused");
//! assert!(error_tree::is("Temporary", &err));
//! ```

use core::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::traits::Node;
use crate::types::repr::{BoxedError, Repr};
use crate::types::tag::sorted_tags;
use crate::types::{ErrorVec, StackTrace, Tag};

/// Message of the [`Error::todo`] placeholder.
pub const TODO_MESSAGE: &str = "TODO";

static TODO: LazyLock<Error> = LazyLock::new(|| Error::from_repr(Repr::Todo));

/// Shared handle to an immutable error node.
///
/// Cloning is cheap and clones are the same node (see [`Error::ptr_eq`]).
///
/// Formatting:
/// - `{}` writes the full message, e.g. `outer: inner`.
/// - `{:#}` writes the cause tree.
/// - `{:#?}` writes the cause tree with stack traces.
/// - `{:?}` writes a structural dump of the nodes.
///
/// [`Error::fmt`] exposes the same renderings explicitly, plus a quoted form.
#[derive(Clone)]
pub struct Error {
    repr: Arc<Repr>,
}

impl Error {
    #[inline]
    pub(crate) fn from_repr(repr: Repr) -> Self {
        Self { repr: Arc::new(repr) }
    }

    #[inline]
    pub(crate) fn repr(&self) -> &Repr {
        &self.repr
    }

    /// Creates a leaf error with `message` and the caller's stack trace.
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        Self::base(message.into(), StackTrace::capture(1))
    }

    #[inline]
    pub(crate) fn base(msg: String, stack: StackTrace) -> Self {
        Self::from_repr(Repr::Base { msg, stack })
    }

    #[inline]
    pub(crate) fn multi(causes: ErrorVec<Error>) -> Self {
        Self::from_repr(Repr::Multi { causes })
    }

    /// Placeholder for code paths that are not written yet.
    ///
    /// Every call returns the same node.
    pub fn todo() -> Self {
        TODO.clone()
    }

    /// Brings a foreign error into the graph as is, without adapting it.
    ///
    /// The builders adapt their input, so this is rarely needed directly;
    /// `From` does the same thing.
    pub fn from_std<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_repr(Repr::Foreign {
            error: Box::new(error),
            type_name: core::any::type_name::<E>(),
        })
    }

    /// Brings a type-erased foreign error into the graph.
    ///
    /// [`downcast_ref`](Error::downcast_ref) cannot see through the box.
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::from_repr(Repr::Foreign {
            error: Box::new(BoxedError(error)),
            type_name: "Box<dyn Error>",
        })
    }

    /// Wraps a custom [`Node`] implementation.
    pub fn from_node<N: Node>(node: N) -> Self {
        Self::from_repr(Repr::Custom(Box::new(node)))
    }

    /// Normalizes this error through the registered adapters.
    ///
    /// Internal variants are returned as they are.
    #[inline]
    pub fn adapt(self) -> Self {
        crate::registry::adapt_error(self)
    }

    /// Whether this node is one of the crate's own variants, as opposed to a
    /// foreign error or a custom [`Node`].
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.repr.is_internal()
    }

    /// Prefixes the message with `message`.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self::from_repr(Repr::WithMessage { cause: self.adapt(), msg: message.into() })
    }

    /// Prefixes the message with `message` and records the caller's stack trace.
    #[inline(never)]
    pub fn wrap(self, message: impl Into<String>) -> Self {
        self.wrap_with(message.into(), StackTrace::capture(1))
    }

    pub(crate) fn wrap_with(self, msg: String, stack: StackTrace) -> Self {
        let cause = Self::from_repr(Repr::WithStack { cause: self.adapt(), stack });
        Self::from_repr(Repr::WithMessage { cause, msg })
    }

    /// Records the caller's stack trace.
    #[inline(never)]
    pub fn with_stack(self) -> Self {
        self.with_stack_trace(StackTrace::capture(1))
    }

    /// Attaches a stack trace captured elsewhere.
    pub fn with_stack_trace(self, stack: StackTrace) -> Self {
        Self::from_repr(Repr::WithStack { cause: self.adapt(), stack })
    }

    /// Classifies the error so that [`is`](crate::is) answers `true` for each name.
    pub fn with_types<I, S>(self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_repr(Repr::WithTypes {
            cause: self.adapt(),
            types: types.into_iter().map(Into::into).collect(),
        })
    }

    /// Attaches tags to the error; they are kept sorted by name.
    pub fn with_tags<I, T>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        Self::from_repr(Repr::WithTags { cause: self.adapt(), tags: sorted_tags(tags) })
    }

    /// The single error this node wraps.
    pub fn cause(&self) -> Option<&Error> {
        match self.repr() {
            Repr::WithMessage { cause, .. }
            | Repr::WithStack { cause, .. }
            | Repr::WithTypes { cause, .. }
            | Repr::WithTags { cause, .. } => Some(cause),
            Repr::Custom(node) => node.cause(),
            _ => None,
        }
    }

    /// The errors this node aggregates, if it is a multi-cause node.
    pub fn causes(&self) -> Option<&[Error]> {
        match self.repr() {
            Repr::Multi { causes } => Some(causes.as_slice()),
            Repr::Value { causes, .. } => Some(causes.as_slice()),
            Repr::Custom(node) => node.causes(),
            _ => None,
        }
    }

    /// The node's own message, without the messages of its causes.
    pub fn message(&self) -> Option<&str> {
        match self.repr() {
            Repr::Base { msg, .. } | Repr::WithMessage { msg, .. } | Repr::Value { msg, .. } => {
                Some(msg.as_str())
            }
            Repr::Custom(node) => node.message(),
            _ => None,
        }
    }

    /// Types declared on this node only; see [`types`](crate::types()) for the
    /// whole graph.
    pub fn own_types(&self) -> &[String] {
        match self.repr() {
            Repr::WithTypes { types, .. } | Repr::Value { types, .. } => types.as_slice(),
            Repr::Custom(node) => node.types(),
            _ => &[],
        }
    }

    /// Tags declared on this node only; see [`tags`](crate::tags()) for the
    /// whole graph.
    pub fn own_tags(&self) -> &[Tag] {
        match self.repr() {
            Repr::WithTags { tags, .. } | Repr::Value { tags, .. } => tags.as_slice(),
            Repr::Custom(node) => node.tags(),
            _ => &[],
        }
    }

    /// The stack trace recorded on this node, if any.
    pub fn stack_trace(&self) -> Option<&StackTrace> {
        match self.repr() {
            Repr::Base { stack, .. } | Repr::WithStack { stack, .. } | Repr::Value { stack, .. } => {
                Some(stack)
            }
            Repr::Custom(node) => node.stack_trace(),
            _ => None,
        }
    }

    /// Evaluates this node's classification predicate called `name`, if it has one.
    pub fn predicate(&self, name: &str) -> Option<bool> {
        match self.repr() {
            Repr::Custom(node) => node.predicate(name),
            _ => None,
        }
    }

    pub(crate) fn predicate_names(&self) -> &'static [&'static str] {
        match self.repr() {
            Repr::Custom(node) => node.predicate_names(),
            _ => &[],
        }
    }

    /// Variant name for internal nodes, the concrete type name otherwise.
    pub fn type_name(&self) -> &'static str {
        self.repr.variant_name()
    }

    /// Whether both handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Error) -> bool {
        Arc::ptr_eq(&self.repr, &other.repr)
    }

    /// Borrows the wrapped foreign error or custom node as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self.repr() {
            Repr::Foreign { error, .. } => (**error).as_any().downcast_ref(),
            Repr::Custom(node) => (**node).as_any().downcast_ref(),
            _ => None,
        }
    }

    /// Converts into a standard boxed error whose `source` chain follows
    /// [`causes`](crate::causes()) one step at a time.
    pub fn into_std(self) -> Box<dyn StdError + Send + Sync + 'static> {
        Box::new(StdCompat::new(self))
    }

    /// Writes the full message: own messages of a chain joined by `": "`,
    /// the messages of multiple causes joined by `"; "`.
    pub(crate) fn write_plain<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        match self.repr() {
            Repr::Base { msg, .. } | Repr::Value { msg, .. } => w.write_str(msg),
            Repr::Multi { causes } => {
                for (i, cause) in causes.iter().enumerate() {
                    if i != 0 {
                        w.write_str("; ")?;
                    }
                    cause.write_plain(w)?;
                }
                Ok(())
            }
            Repr::WithMessage { cause, msg } => {
                w.write_str(msg)?;
                w.write_str(": ")?;
                cause.write_plain(w)
            }
            Repr::WithStack { cause, .. }
            | Repr::WithTypes { cause, .. }
            | Repr::WithTags { cause, .. } => cause.write_plain(w),
            Repr::Todo => w.write_str(TODO_MESSAGE),
            Repr::Foreign { error, .. } => write!(w, "{error}"),
            Repr::Custom(node) => write!(w, "{node}"),
        }
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::from_std(error)
    }
}

/// `std::error::Error` view of an [`Error`].
struct StdCompat {
    error: Error,
    source: Option<Box<StdCompat>>,
}

impl StdCompat {
    fn new(error: Error) -> Self {
        let source = crate::inspect::causes(&error)
            .into_iter()
            .next()
            .map(|cause| Box::new(StdCompat::new(cause)));
        Self { error, source }
    }
}

impl fmt::Debug for StdCompat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.error, f)
    }
}

impl fmt::Display for StdCompat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.write_plain(f)
    }
}

impl StdError for StdCompat {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        if let Some(source) = &self.source {
            return Some(source.as_ref());
        }
        match self.error.repr() {
            Repr::Foreign { error, .. } => error.as_std().source(),
            _ => None,
        }
    }
}
