//! Stream draining future.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use futures_core::Stream;
use pin_project_lite::pin_project;

use crate::log::trace;
use crate::types::{Error, ErrorVec};

pin_project! {
    /// Future that drains a stream of optional errors and joins them.
    ///
    /// Resolves once the stream ends, to `None` when no error was received.
    /// There is no timeout; dropping the future stops the collection.
    ///
    /// # Cancel Safety
    ///
    /// Items already pulled from the stream are lost when the future is
    /// dropped before completion.
    #[must_use = "futures do nothing unless polled"]
    pub struct RecvFuture<S> {
        #[pin]
        stream: S,
        causes: ErrorVec<Error>,
        done: bool,
    }
}

impl<S> RecvFuture<S> {
    #[inline]
    pub fn new(stream: S) -> Self {
        Self { stream, causes: ErrorVec::new(), done: false }
    }
}

impl<S, T> Future for RecvFuture<S>
where
    S: Stream<Item = T>,
    T: Into<Option<Error>>,
{
    type Output = Option<Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    if let Some(err) = item.into() {
                        this.causes.push(err.adapt());
                    }
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    let causes = core::mem::take(this.causes);
                    trace!(errors = causes.len(), "error stream drained");
                    if causes.is_empty() {
                        return Poll::Ready(None);
                    }
                    return Poll::Ready(Some(Error::multi(causes)));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<S, T> FusedFuture for RecvFuture<S>
where
    S: Stream<Item = T>,
    T: Into<Option<Error>>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

/// Drains `stream` until it ends and joins the errors it yielded.
///
/// # Examples
///
/// ```rust,ignore
/// use error_tree::async_ext::recv_stream;
///
/// let err = recv_stream(results).await;
/// ```
#[inline]
pub fn recv_stream<S, T>(stream: S) -> RecvFuture<S>
where
    S: Stream<Item = T>,
    T: Into<Option<Error>>,
{
    RecvFuture::new(stream)
}
