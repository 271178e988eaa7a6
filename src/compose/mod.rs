//! Builders over optional errors.
//!
//! Code that tracks "maybe an error" as an `Option<Error>` can annotate it
//! without unpacking it first: every function here returns `None` when given
//! `None`, and otherwise behaves like the [`Error`] method of the same name.
//! Every error received is passed through the adapter registry before being
//! wrapped.
//!
//! # Examples
//!
//! ```
//! use error_tree::{join, with_types, wrap, Error};
//!
//! let first: Option<Error> = None;
//! let second = Some(Error::new("disk full"));
//!
//! let err = wrap(join([first, second]), "saving report");
//! let err = with_types(err, ["Storage"]).unwrap();
//!
//! assert_eq!(err.to_string(), "saving report: disk full");
//! assert!(error_tree::is("Storage", &err));
//! assert!(wrap(None, "unused").is_none());
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::sync::mpsc::Receiver;

use crate::log::trace;
use crate::types::{Error, ErrorVec, StackTrace, Tag, Value};

/// Combines the present errors into one multi-cause error.
///
/// Absent entries are dropped. Returns `None` when nothing is left. The
/// result is a multi-cause node even when only one error was present, and
/// the order of the input is kept.
pub fn join<I>(errs: I) -> Option<Error>
where
    I: IntoIterator,
    I::Item: Into<Option<Error>>,
{
    let causes: ErrorVec<Error> =
        errs.into_iter().filter_map(Into::into).map(Error::adapt).collect();
    if causes.is_empty() {
        return None;
    }
    Some(Error::multi(causes))
}

/// Drains `receiver` until every sender is gone and joins what was received.
///
/// Blocks the calling thread. There is no timeout: drop the senders to
/// finish.
pub fn recv<T>(receiver: Receiver<T>) -> Option<Error>
where
    T: Into<Option<Error>>,
{
    let mut received = 0usize;
    let causes: ErrorVec<Error> = receiver
        .iter()
        .inspect(|_| received += 1)
        .filter_map(Into::into)
        .map(Error::adapt)
        .collect();
    trace!(received = received, errors = causes.len(), "error channel drained");
    if causes.is_empty() {
        return None;
    }
    Some(Error::multi(causes))
}

/// Prefixes the error's message.
pub fn with_message(err: Option<Error>, message: impl Into<String>) -> Option<Error> {
    err.map(|err| err.with_message(message))
}

/// Prefixes the message and records the caller's stack trace.
#[inline(never)]
pub fn wrap(err: Option<Error>, message: impl Into<String>) -> Option<Error> {
    let err = err?;
    Some(err.wrap_with(message.into(), StackTrace::capture(1)))
}

/// Records the caller's stack trace.
#[inline(never)]
pub fn with_stack(err: Option<Error>) -> Option<Error> {
    let err = err?;
    Some(err.with_stack_trace(StackTrace::capture(1)))
}

/// Attaches `stack` as the error's stack trace.
pub fn with_stack_trace(err: Option<Error>, stack: StackTrace) -> Option<Error> {
    err.map(|err| err.with_stack_trace(stack))
}

/// Classifies the error under each of `types`.
pub fn with_types<I, S>(err: Option<Error>, types: I) -> Option<Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    err.map(|err| err.with_types(types))
}

/// Attaches tags to the error.
pub fn with_tags<I, T>(err: Option<Error>, tags: I) -> Option<Error>
where
    I: IntoIterator<Item = T>,
    T: Into<Tag>,
{
    err.map(|err| err.with_tags(tags))
}

/// Turns a value of unknown type, typically a panic payload, into an error.
///
/// - a `String` or `&'static str` becomes a new error with that message and
///   the caller's stack trace;
/// - an [`Error`] (or `Option<Error>`) is returned unchanged;
/// - a [`Value`] snapshot is rebuilt with [`Value::to_error`];
/// - a boxed `std::error::Error` is brought in as a foreign error;
/// - anything else becomes a new error carrying the payload's `Debug`
///   rendering, which for an opaque payload is `Any { .. }`.
///
/// ```
/// use error_tree::from_any;
///
/// let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
/// let err = from_any(Some(payload)).unwrap();
/// assert_eq!(err.to_string(), "boom");
/// ```
#[inline(never)]
pub fn from_any(value: Option<Box<dyn Any + Send>>) -> Option<Error> {
    let value = value?;
    let value = match value.downcast::<String>() {
        Ok(msg) => return Some(Error::base(*msg, StackTrace::capture(1))),
        Err(value) => value,
    };
    let value = match value.downcast::<&'static str>() {
        Ok(msg) => return Some(Error::base((*msg).to_owned(), StackTrace::capture(1))),
        Err(value) => value,
    };
    let value = match value.downcast::<Error>() {
        Ok(err) => return Some(*err),
        Err(value) => value,
    };
    let value = match value.downcast::<Option<Error>>() {
        Ok(err) => return *err,
        Err(value) => value,
    };
    let value = match value.downcast::<Value>() {
        Ok(snapshot) => return snapshot.to_error(),
        Err(value) => value,
    };
    let value = match value.downcast::<Box<dyn StdError + Send + Sync>>() {
        Ok(err) => return Some(Error::from_boxed(*err)),
        Err(value) => value,
    };
    Some(Error::base(format!("{value:?}"), StackTrace::capture(1)))
}
