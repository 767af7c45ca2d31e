//! The transform operator.
//!
//! [`TransformOp`] is the Observable half: it owns its source and its
//! transform, and on every subscribe builds a fresh [`TransformSink`] around
//! the subscriber. The sink is the Observer half: it applies the transform to
//! each upstream `Next`, forwards what comes out, and ends the stream on the
//! first transform failure or upstream terminal event.
//!
//! `compact_map`, `try_compact_map`, `map` and `filter` are all this operator
//! with a different [`Transform`].

use std::marker::PhantomData;

use crate::{
  disposable::SinkDisposer,
  event::Event,
  observable::{produce, Observable},
  observer::Observer,
  sink::Sink,
};

/// A per-element transform that may drop the element or fail.
///
/// `Ok(Some(r))` forwards `r`, `Ok(None)` suppresses the element, `Err(e)`
/// terminates the stream with `e`.
pub trait Transform<Item, Err> {
  type Output;

  fn apply(&mut self, item: Item) -> Result<Option<Self::Output>, Err>;
}

/// Transform of [`compact_map`](crate::observable::ObservableExt::compact_map).
#[derive(Clone)]
pub struct CompactMap<F>(pub F);

impl<F, Item, Err, R> Transform<Item, Err> for CompactMap<F>
where
  F: FnMut(Item) -> Option<R>,
{
  type Output = R;

  #[inline]
  fn apply(&mut self, item: Item) -> Result<Option<R>, Err> { Ok((self.0)(item)) }
}

/// Transform of
/// [`try_compact_map`](crate::observable::ObservableExt::try_compact_map).
#[derive(Clone)]
pub struct TryCompactMap<F>(pub F);

impl<F, Item, Err, R> Transform<Item, Err> for TryCompactMap<F>
where
  F: FnMut(Item) -> Result<Option<R>, Err>,
{
  type Output = R;

  #[inline]
  fn apply(&mut self, item: Item) -> Result<Option<R>, Err> { (self.0)(item) }
}

/// An observable that runs every element of `source` through a [`Transform`].
///
/// `E` is the error type downstream sees; source errors are converted with
/// `Into<E>`.
pub struct TransformOp<S, T, E> {
  source: S,
  transform: T,
  _err: PhantomData<fn() -> E>,
}

impl<S, T, E> TransformOp<S, T, E> {
  pub fn new(source: S, transform: T) -> Self { Self { source, transform, _err: PhantomData } }
}

impl<S: Clone, T: Clone, E> Clone for TransformOp<S, T, E> {
  fn clone(&self) -> Self { Self::new(self.source.clone(), self.transform.clone()) }
}

impl<S, T, E> Observable for TransformOp<S, T, E>
where
  S: Observable,
  S::Err: Into<E>,
  T: Transform<S::Item, E> + Clone + Send + 'static,
  E: 'static,
{
  type Item = T::Output;
  type Err = E;
  type Unsub = SinkDisposer;

  fn subscribe<O>(&self, observer: O) -> SinkDisposer
  where
    O: Observer<T::Output, E> + Send + 'static,
  {
    produce(|cancel| {
      let sink = TransformSink {
        sink: Sink::new(observer, cancel),
        transform: self.transform.clone(),
        _err: PhantomData,
      };
      self.source.subscribe(sink)
    })
  }
}

/// The per-subscription observer of a [`TransformOp`].
pub struct TransformSink<O, T, E> {
  sink: Sink<O>,
  transform: T,
  _err: PhantomData<fn() -> E>,
}

impl<O, T, E, Item, Err> Observer<Item, Err> for TransformSink<O, T, E>
where
  T: Transform<Item, E>,
  O: Observer<T::Output, E>,
  Err: Into<E>,
{
  fn on(&mut self, event: Event<Item, Err>) {
    if self.sink.is_disposed() {
      // The source kept going after the stream ended; the transform must not
      // see those elements.
      #[cfg(feature = "tracing")]
      tracing::trace!(terminal = event.is_terminal(), "upstream event after disposal ignored");
      return;
    }
    match event {
      Event::Next(item) => match self.transform.apply(item) {
        Ok(Some(value)) => self.sink.forward_on(Event::Next(value)),
        Ok(None) => {}
        Err(err) => {
          #[cfg(feature = "tracing")]
          tracing::debug!("transform failed, terminating stream");
          self.sink.forward_on(Event::Error(err));
          self.sink.dispose();
        }
      },
      Event::Error(err) => {
        self.sink.forward_on(Event::Error(err.into()));
        self.sink.dispose();
      }
      Event::Completed => {
        self.sink.forward_on(Event::Completed);
        self.sink.dispose();
      }
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.sink.is_disposed() || self.sink.observer().is_closed() }
}
