//! Normalization of foreign errors.
//!
//! An [`Adapter`] recognizes errors coming from some other library and
//! returns a node that exposes what the model understands: causes, types,
//! tags. Adapters are installed once with [`register`](crate::register) and
//! consulted by every builder.

use crate::types::Error;

/// Converts a foreign error into a richer node.
///
/// Returning `None` means "not recognized": the caller keeps using the input
/// as it is. An adapter must not panic on input it does not understand, and
/// must not recognize its own output.
///
/// Plain closures are adapters:
///
/// ```
/// use error_tree::{Adapter, Error};
///
/// let adapter = |err: &Error| {
///     err.downcast_ref::<std::fmt::Error>()
///         .map(|_| err.clone().with_types(["Format"]))
/// };
///
/// let err = Error::from(std::fmt::Error);
/// assert!(adapter.adapt(&err).is_some());
/// assert!(adapter.adapt(&Error::new("other")).is_none());
/// ```
pub trait Adapter: Send + Sync + 'static {
    fn adapt(&self, err: &Error) -> Option<Error>;
}

impl<F> Adapter for F
where
    F: Fn(&Error) -> Option<Error> + Send + Sync + 'static,
{
    #[inline]
    fn adapt(&self, err: &Error) -> Option<Error> {
        self(err)
    }
}
