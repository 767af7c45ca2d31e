//! The producer side of a stream.
//!
//! An [`Observable`] is an immutable description of how to produce events.
//! Subscribing is its only side effect, and a value may be subscribed any
//! number of times: every subscription gets its own sinks and its own
//! disposal handle.

use crate::{
  disposable::Disposable,
  event::Event,
  observer::{EventFn, NextFn, Observer, ObserverFns},
  ops::{
    compact_map::{CompactMap, TransformOp, TryCompactMap},
    filter::FilterFn,
    into_stream::IntoStream,
    map::MapFn,
  },
};

mod create;
pub use create::*;
mod from_iter;
pub use from_iter::*;
mod producer;
pub use producer::*;
mod trivial;
pub use trivial::*;

/// A source of `Event<Item, Err>` values.
///
/// Implementations must honor the source contract:
///
/// 1. events are delivered only after `subscribe` is called;
/// 2. no event is delivered once the returned subscription is disposed;
/// 3. at most one terminal event is delivered.
pub trait Observable {
  type Item;
  type Err;
  /// The handle returned by `subscribe`; disposing it cancels the
  /// subscription.
  type Unsub: Disposable + Send + 'static;

  fn subscribe<O>(&self, observer: O) -> Self::Unsub
  where
    O: Observer<Self::Item, Self::Err> + Send + 'static;
}

/// Operators and subscribe helpers available on every [`Observable`].
pub trait ObservableExt: Observable + Sized {
  /// Applies `f` to every element, forwarding `Some` results and dropping
  /// `None`.
  ///
  /// A map and a filter in one step: `f` runs once per element.
  ///
  /// ```
  /// use rxsink::prelude::*;
  /// use std::sync::{Arc, Mutex};
  ///
  /// let res = Arc::new(Mutex::new(vec![]));
  /// let c_res = res.clone();
  /// observable::from_iter(["1", "lol", "3", "NaN", "5"])
  ///   .compact_map(|s: &str| s.parse::<i32>().ok())
  ///   .subscribe_next(move |v| c_res.lock().unwrap().push(v));
  ///
  /// assert_eq!(*res.lock().unwrap(), [1, 3, 5]);
  /// ```
  fn compact_map<F, R>(self, f: F) -> TransformOp<Self, CompactMap<F>, Self::Err>
  where
    F: FnMut(Self::Item) -> Option<R>,
  {
    TransformOp::new(self, CompactMap(f))
  }

  /// Like [`compact_map`](ObservableExt::compact_map), but `f` may fail.
  ///
  /// An `Err` returned by `f` terminates the stream with that error and
  /// cancels the source. Errors coming from the source are converted with
  /// `Into`; for sources that cannot fail (`Err = Infallible`) give `E` a
  /// `From<Infallible>` impl.
  fn try_compact_map<F, R, E>(self, f: F) -> TransformOp<Self, TryCompactMap<F>, E>
  where
    F: FnMut(Self::Item) -> Result<Option<R>, E>,
    Self::Err: Into<E>,
  {
    TransformOp::new(self, TryCompactMap(f))
  }

  /// Applies `f` to every element.
  fn map<F, R>(self, f: F) -> TransformOp<Self, MapFn<F>, Self::Err>
  where
    F: FnMut(Self::Item) -> R,
  {
    TransformOp::new(self, MapFn(f))
  }

  /// Forwards only the elements for which `f` returns `true`.
  fn filter<F>(self, f: F) -> TransformOp<Self, FilterFn<F>, Self::Err>
  where
    F: FnMut(&Self::Item) -> bool,
  {
    TransformOp::new(self, FilterFn(f))
  }

  /// Converts the stream into a `futures::Stream` of `Result`s.
  fn into_stream(self) -> IntoStream<Self::Item, Self::Err, Self::Unsub>
  where
    Self::Item: Send + 'static,
    Self::Err: Send + 'static,
  {
    IntoStream::new(&self)
  }

  /// Subscribes with a `Next` handler only. Errors are dropped.
  fn subscribe_next<N>(&self, next: N) -> Self::Unsub
  where
    N: FnMut(Self::Item) + Send + 'static,
  {
    self.subscribe(NextFn::new(next))
  }

  /// Subscribes with one handler per event kind.
  fn subscribe_with<N, E, C>(&self, next: N, error: E, complete: C) -> Self::Unsub
  where
    N: FnMut(Self::Item) + Send + 'static,
    E: FnOnce(Self::Err) + Send + 'static,
    C: FnOnce() + Send + 'static,
  {
    self.subscribe(ObserverFns::new(next, error, complete))
  }

  /// Subscribes with a single handler that receives every [`Event`].
  fn subscribe_event<F>(&self, f: F) -> Self::Unsub
  where
    F: FnMut(Event<Self::Item, Self::Err>) + Send + 'static,
  {
    self.subscribe(EventFn(f))
  }
}

impl<T: Observable> ObservableExt for T {}
