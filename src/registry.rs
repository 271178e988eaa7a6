//! Process-wide adapter registry.
//!
//! Adapters are appended during program setup with [`register`] and consulted
//! by [`adapt`] each time a builder receives an error. The list only grows and
//! lives for the whole process; it is guarded by a reader-writer lock so any
//! number of threads can adapt concurrently.
//!
//! # Examples
//!
//! ```
//! use error_tree::{register, Error};
//!
//! #[derive(Debug)]
//! struct Throttled;
//!
//! impl std::fmt::Display for Throttled {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("throttled")
//!     }
//! }
//!
//! impl std::error::Error for Throttled {}
//!
//! register(|err: &Error| {
//!     err.downcast_ref::<Throttled>()
//!         .map(|_| err.clone().with_types(["Temporary"]))
//! });
//!
//! let err = Error::from(Throttled).wrap("fetching quota");
//! assert!(error_tree::is("Temporary", &err));
//! ```

use std::cell::Cell;
use std::sync::{PoisonError, RwLock};

use crate::log::{debug, trace};
use crate::traits::Adapter;
use crate::types::Error;

static ADAPTERS: RwLock<Vec<Box<dyn Adapter>>> = RwLock::new(Vec::new());

thread_local! {
    static ADAPTING: Cell<bool> = const { Cell::new(false) };
}

/// Appends `adapter` to the global list.
///
/// Adapters are tried in registration order. There is no removal and no
/// de-duplication. Must not be called from inside an adapter.
pub fn register<A: Adapter>(adapter: A) {
    let mut adapters = ADAPTERS.write().unwrap_or_else(PoisonError::into_inner);
    adapters.push(Box::new(adapter));
    debug!(adapters = adapters.len(), "registered error adapter");
}

/// Number of registered adapters.
pub fn len() -> usize {
    ADAPTERS.read().unwrap_or_else(PoisonError::into_inner).len()
}

/// Adapts an optional error; `None` stays `None`.
#[inline]
pub fn adapt(err: Option<Error>) -> Option<Error> {
    err.map(adapt_error)
}

/// Runs `err` through the registered adapters.
///
/// Internal variants skip the scan. Otherwise the first adapter that
/// recognizes the error wins; when none does, `err` is returned unchanged.
/// Builders called from inside an adapter do not adapt again.
pub(crate) fn adapt_error(err: Error) -> Error {
    if err.is_internal() || ADAPTING.with(Cell::get) {
        return err;
    }

    let adapters = ADAPTERS.read().unwrap_or_else(PoisonError::into_inner);
    if adapters.is_empty() {
        return err;
    }

    let _guard = AdaptingGuard::enter();
    for (index, adapter) in adapters.iter().enumerate() {
        if let Some(adapted) = adapter.adapt(&err) {
            trace!(adapter = index, foreign = err.type_name(), "error recognized by adapter");
            return adapted;
        }
    }
    err
}

struct AdaptingGuard;

impl AdaptingGuard {
    fn enter() -> Self {
        ADAPTING.with(|flag| flag.set(true));
        AdaptingGuard
    }
}

impl Drop for AdaptingGuard {
    fn drop(&mut self) {
        ADAPTING.with(|flag| flag.set(false));
    }
}
