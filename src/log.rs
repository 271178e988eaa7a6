//! Logging shim: forwards to `tracing` when the `tracing` feature is on and
//! compiles to nothing (besides borrowing the field values) otherwise.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($key:ident = $value:expr,)* $msg:literal) => {{
        $( let _ = &$value; )*
    }};
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($key:ident = $value:expr,)* $msg:literal) => {{
        $( let _ = &$value; )*
    }};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {debug, trace};
