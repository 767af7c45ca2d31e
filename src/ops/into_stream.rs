//! Bridge from an `Observable` to a `futures::Stream`.
//!
//! ```rust
//! use futures::{executor::block_on, StreamExt};
//! use rxsink::prelude::*;
//!
//! let values: Vec<_> = block_on(observable::from_iter(1..=3).into_stream().collect());
//! assert_eq!(values, vec![Ok(1), Ok(2), Ok(3)]);
//! ```

use std::{
  pin::Pin,
  task::{Context, Poll},
};

use futures::{
  channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender},
  Stream,
};
use pin_project_lite::pin_project;

use crate::{
  disposable::{Disposable, DisposeGuard},
  event::Event,
  observable::Observable,
  observer::Observer,
};

pin_project! {
  /// A `Stream` yielding `Ok` for every `Next` and one `Err` for an `Error`
  /// event, ending after the terminal event.
  ///
  /// Dropping the stream disposes the subscription.
  pub struct IntoStream<Item, Err, U>
  where
    U: Disposable,
  {
    #[pin]
    receiver: UnboundedReceiver<Result<Item, Err>>,
    subscription: DisposeGuard<U>,
  }
}

impl<Item, Err, U> IntoStream<Item, Err, U>
where
  Item: Send + 'static,
  Err: Send + 'static,
  U: Disposable,
{
  pub fn new<S>(source: &S) -> Self
  where
    S: Observable<Item = Item, Err = Err, Unsub = U>,
  {
    let (sender, receiver) = unbounded();
    let subscription = source.subscribe(StreamObserver { sender }).dispose_when_dropped();
    IntoStream { receiver, subscription }
  }
}

impl<Item, Err, U: Disposable> Stream for IntoStream<Item, Err, U> {
  type Item = Result<Item, Err>;

  fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
    self.project().receiver.poll_next(cx)
  }
}

struct StreamObserver<Item, Err> {
  sender: UnboundedSender<Result<Item, Err>>,
}

impl<Item, Err> Observer<Item, Err> for StreamObserver<Item, Err> {
  fn on(&mut self, event: Event<Item, Err>) {
    // A send only fails once the stream was dropped; the subscription is
    // being disposed at that point.
    match event {
      Event::Next(v) => {
        let _ = self.sender.unbounded_send(Ok(v));
      }
      Event::Error(e) => {
        let _ = self.sender.unbounded_send(Err(e));
        self.sender.close_channel();
      }
      Event::Completed => self.sender.close_channel(),
    }
  }

  fn is_closed(&self) -> bool { self.sender.is_closed() }
}

#[cfg(test)]
mod tests {
  use std::{
    convert::Infallible,
    sync::{Arc, Mutex},
  };

  use futures::{executor::block_on, StreamExt};

  use crate::prelude::*;

  #[rxsink_macro::test]
  fn yields_values_then_ends() {
    let values: Vec<_> = block_on(observable::from_iter(0..3).map(|v| v * 2).into_stream().collect());
    assert_eq!(values, vec![Ok(0), Ok(2), Ok(4)]);
  }

  #[rxsink_macro::test]
  fn error_ends_the_stream() {
    let source = observable::create(|emitter: Emitter<i32, &'static str>| {
      emitter.next(1);
      emitter.error("boom");
      emitter.next(2);
    });
    let values: Vec<_> = block_on(source.into_stream().collect());
    assert_eq!(values, vec![Ok(1), Err("boom")]);
  }

  #[rxsink_macro::test]
  fn dropping_the_stream_disposes() {
    let slot: Arc<Mutex<Option<Emitter<i32, Infallible>>>> = Arc::default();
    let c_slot = slot.clone();
    let stream = observable::create(move |emitter| {
      *c_slot.lock().unwrap() = Some(emitter);
    })
    .into_stream();

    let emitter = slot.lock().unwrap().take().unwrap();
    assert!(!emitter.is_closed());
    drop(stream);
    assert!(emitter.is_closed());
  }

  #[rxsink_macro::test]
  async fn awaits_values_pushed_later() {
    let slot: Arc<Mutex<Option<Emitter<&'static str, Infallible>>>> = Arc::default();
    let c_slot = slot.clone();
    let mut stream = observable::create(move |emitter| {
      *c_slot.lock().unwrap() = Some(emitter);
    })
    .compact_map(|s: &str| s.parse::<u8>().ok())
    .into_stream();

    let emitter = slot.lock().unwrap().take().unwrap();
    emitter.next("1");
    emitter.next("x");
    emitter.next("2");
    emitter.complete();

    assert_eq!(stream.next().await, Some(Ok(1)));
    assert_eq!(stream.next().await, Some(Ok(2)));
    assert_eq!(stream.next().await, None);
  }
}
