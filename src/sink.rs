//! The base every operator sink is built on.
//!
//! A [`Sink`] owns the downstream observer and the [`SinkDisposer`] of the
//! subscription that created it. It offers two primitives:
//!
//! - [`Sink::forward_on`] pushes an event downstream, unless the sink has
//!   already been disposed;
//! - [`Sink::dispose`] cancels the subscription, which also releases the
//!   upstream subscription.
//!
//! The base never disposes on its own. A concrete sink forwards a terminal
//! event and then calls `dispose` itself, on both the `Error` and the
//! `Completed` path; forgetting either leaks the upstream subscription.
//!
//! Because `forward_on` takes `&mut self`, a sink has exactly one writer at a
//! time. Concurrent delivery into one sink cannot be expressed without a lock
//! at the source boundary, which is where it belongs.

use crate::{
  disposable::{Cancelable, Disposable, SinkDisposer},
  event::Event,
  observer::Observer,
};

pub struct Sink<O> {
  observer: O,
  cancel: SinkDisposer,
}

impl<O> Sink<O> {
  pub fn new(observer: O, cancel: SinkDisposer) -> Self { Self { observer, cancel } }

  /// Pushes `event` to the downstream observer.
  ///
  /// Once the sink is disposed (after a terminal event, or because the
  /// subscriber cancelled) nothing is forwarded any more.
  pub fn forward_on<Item, Err>(&mut self, event: Event<Item, Err>)
  where
    O: Observer<Item, Err>,
  {
    if self.cancel.is_disposed() {
      #[cfg(feature = "tracing")]
      tracing::trace!(terminal = event.is_terminal(), "event dropped by disposed sink");
      return;
    }
    self.observer.on(event)
  }

  /// Cancels the subscription this sink belongs to. Idempotent.
  #[inline]
  pub fn dispose(&self) { self.cancel.dispose() }

  #[inline]
  pub fn is_disposed(&self) -> bool { self.cancel.is_disposed() }

  #[inline]
  pub fn observer(&self) -> &O { &self.observer }
}

/// A sink used directly as an observer forwards everything unchanged and
/// disposes itself after a terminal event. Leaf sources push through it.
impl<O, Item, Err> Observer<Item, Err> for Sink<O>
where
  O: Observer<Item, Err>,
{
  fn on(&mut self, event: Event<Item, Err>) {
    let terminal = event.is_terminal();
    self.forward_on(event);
    if terminal {
      self.dispose();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.is_disposed() || self.observer.is_closed() }
}
