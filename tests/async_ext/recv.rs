//! Tests for the stream collector.

use core::pin::Pin;
use core::task::{Context, Poll};

use error_tree::async_ext::recv_stream;
use error_tree::Error;
use futures_core::future::FusedFuture;
use futures_core::Stream;

/// Yields the items of an iterator, returning `Pending` before each one.
struct Trickle<I> {
    items: I,
    ready: bool,
}

impl<I: Iterator + Unpin> Stream for Trickle<I> {
    type Item = I::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if !self.ready {
            self.ready = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        self.ready = false;
        Poll::Ready(self.items.next())
    }
}

fn trickle<I: IntoIterator>(items: I) -> Trickle<I::IntoIter> {
    Trickle { items: items.into_iter(), ready: false }
}

#[tokio::test]
async fn recv_stream_joins_present_errors() {
    let items = vec![Some(Error::new("A")), None, Some(Error::new("B"))];

    let err = recv_stream(trickle(items)).await.unwrap();

    assert_eq!(err.type_name(), "Multi");
    assert_eq!(err.to_string(), "A; B");
}

#[tokio::test]
async fn recv_stream_of_nothing_is_absent() {
    assert!(recv_stream(trickle(Vec::<Option<Error>>::new())).await.is_none());
    assert!(recv_stream(trickle([None::<Error>, None])).await.is_none());
}

#[tokio::test]
async fn recv_future_is_terminated_after_completion() {
    let mut future = Box::pin(recv_stream(trickle([Error::new("A")])));
    assert!(!future.is_terminated());

    let err = future.as_mut().await;
    assert_eq!(err.unwrap().to_string(), "A");
    assert!(future.is_terminated());
}
