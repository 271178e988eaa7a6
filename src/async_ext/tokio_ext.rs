//! Tokio channel collectors.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! error-tree = { version = "0.3", features = ["async-tokio"] }
//! ```

use tokio::sync::mpsc::{Receiver, UnboundedReceiver};

use crate::log::trace;
use crate::types::{Error, ErrorVec};

/// Receives from `receiver` until every sender is dropped and joins the
/// errors received.
///
/// # Example
///
/// ```rust
/// use error_tree::{async_ext::recv_channel, Error};
///
/// #[tokio::main]
/// async fn main() {
///     let (tx, rx) = tokio::sync::mpsc::channel::<Option<Error>>(8);
///     for i in 0..3 {
///         let tx = tx.clone();
///         tokio::spawn(async move {
///             let err = (i != 1).then(|| Error::new(format!("task {i} failed")));
///             let _ = tx.send(err).await;
///         });
///     }
///     drop(tx);
///
///     let err = recv_channel(rx).await.unwrap();
///     assert_eq!(err.causes().unwrap().len(), 2);
/// }
/// ```
pub async fn recv_channel<T>(mut receiver: Receiver<T>) -> Option<Error>
where
    T: Into<Option<Error>>,
{
    let mut causes = ErrorVec::new();
    while let Some(item) = receiver.recv().await {
        if let Some(err) = item.into() {
            causes.push(err.adapt());
        }
    }
    finish(causes)
}

/// [`recv_channel`] for unbounded channels.
pub async fn recv_unbounded<T>(mut receiver: UnboundedReceiver<T>) -> Option<Error>
where
    T: Into<Option<Error>>,
{
    let mut causes = ErrorVec::new();
    while let Some(item) = receiver.recv().await {
        if let Some(err) = item.into() {
            causes.push(err.adapt());
        }
    }
    finish(causes)
}

fn finish(causes: ErrorVec<Error>) -> Option<Error> {
    trace!(errors = causes.len(), "error channel closed");
    if causes.is_empty() {
        return None;
    }
    Some(Error::multi(causes))
}
