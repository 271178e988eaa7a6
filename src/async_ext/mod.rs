//! Async collectors.
//!
//! The async counterparts of [`recv`](crate::recv): drain a stream or a
//! channel of optional errors and join what arrives.
//!
//! # Feature Flag
//!
//! Requires the `async` feature; [`recv_channel`] additionally requires
//! `async-tokio`:
//!
//! ```toml
//! [dependencies]
//! error-tree = { version = "0.3", features = ["async-tokio"] }
//! ```

mod recv;
#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use recv::{recv_stream, RecvFuture};
#[cfg(feature = "async-tokio")]
pub use tokio_ext::{recv_channel, recv_unbounded};
