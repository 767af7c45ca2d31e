//! Observer trait and closure adapters
//!
//! An `Observer` consumes the events of a stream through a single entry point,
//! [`Observer::on`]. The `on_next`/`on_error`/`on_completed` helpers only wrap
//! the value in the matching [`Event`] variant.

use crate::event::Event;

// ============================================================================
// Observer Trait
// ============================================================================

/// The consumer side of a stream.
///
/// `on` takes `&mut self`: a given observer has exactly one writer at a time.
/// Sources that emit from several threads serialize at their boundary (see
/// [`Emitter`](crate::observable::Emitter)) before events reach an observer.
pub trait Observer<Item, Err> {
  /// Receive one event.
  fn on(&mut self, event: Event<Item, Err>);

  /// `true` once the observer accepts no more events.
  ///
  /// Synchronous sources poll this to stop emitting early, e.g. after a
  /// downstream transform failed.
  fn is_closed(&self) -> bool { false }

  #[inline]
  fn on_next(&mut self, value: Item) { self.on(Event::Next(value)) }

  #[inline]
  fn on_error(&mut self, err: Err) { self.on(Event::Error(err)) }

  #[inline]
  fn on_completed(&mut self) { self.on(Event::Completed) }
}

impl<Item, Err, O> Observer<Item, Err> for Box<O>
where
  O: Observer<Item, Err> + ?Sized,
{
  #[inline]
  fn on(&mut self, event: Event<Item, Err>) { (**self).on(event) }

  #[inline]
  fn is_closed(&self) -> bool { (**self).is_closed() }
}

/// Type-erased observer that can cross threads.
pub type BoxedObserver<Item, Err> = Box<dyn Observer<Item, Err> + Send>;

// ============================================================================
// Closure adapters
// ============================================================================

/// Observer made of one closure per event kind.
///
/// The terminal closures run at most once; events after a terminal event are
/// ignored.
pub struct ObserverFns<N, E, C> {
  next: N,
  error: Option<E>,
  complete: Option<C>,
}

impl<N, E, C> ObserverFns<N, E, C> {
  pub fn new(next: N, error: E, complete: C) -> Self {
    Self { next, error: Some(error), complete: Some(complete) }
  }

  fn stopped(&self) -> bool { self.error.is_none() || self.complete.is_none() }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for ObserverFns<N, E, C>
where
  N: FnMut(Item),
  E: FnOnce(Err),
  C: FnOnce(),
{
  fn on(&mut self, event: Event<Item, Err>) {
    if self.stopped() {
      return;
    }
    match event {
      Event::Next(v) => (self.next)(v),
      Event::Error(e) => {
        self.complete = None;
        if let Some(error) = self.error.take() {
          error(e);
        }
      }
      Event::Completed => {
        self.error = None;
        if let Some(complete) = self.complete.take() {
          complete();
        }
      }
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.stopped() }
}

/// Observer that only cares about `Next` values.
///
/// An error reaching it has nowhere to go; it is dropped (and logged at `warn`
/// when the `tracing` feature is on).
#[derive(Clone)]
pub struct NextFn<F> {
  next: F,
  stopped: bool,
}

impl<F> NextFn<F> {
  pub fn new(next: F) -> Self { Self { next, stopped: false } }
}

impl<Item, Err, F> Observer<Item, Err> for NextFn<F>
where
  F: FnMut(Item),
{
  fn on(&mut self, event: Event<Item, Err>) {
    if self.stopped {
      return;
    }
    match event {
      Event::Next(v) => (self.next)(v),
      Event::Error(_) => {
        self.stopped = true;
        #[cfg(feature = "tracing")]
        tracing::warn!("unhandled error event dropped by next-only observer");
      }
      Event::Completed => self.stopped = true,
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.stopped }
}

/// Observer that hands every event to one closure.
#[derive(Clone)]
pub struct EventFn<F>(pub F);

impl<Item, Err, F> Observer<Item, Err> for EventFn<F>
where
  F: FnMut(Event<Item, Err>),
{
  #[inline]
  fn on(&mut self, event: Event<Item, Err>) { (self.0)(event) }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use super::*;

  struct Collect {
    values: Vec<i32>,
  }

  impl Observer<i32, ()> for Collect {
    fn on(&mut self, event: Event<i32, ()>) {
      if let Event::Next(v) = event {
        self.values.push(v);
      }
    }
  }

  #[rxsink_macro::test]
  fn helpers_wrap_events() {
    let mut obs = Collect { values: vec![] };
    obs.on_next(1);
    obs.on_next(2);
    obs.on_completed();
    assert_eq!(obs.values, vec![1, 2]);
    assert!(!Observer::<i32, ()>::is_closed(&obs));
  }

  #[rxsink_macro::test]
  fn boxed_observer_delegates() {
    let mut boxed: Box<dyn Observer<i32, ()>> = Box::new(Collect { values: vec![] });
    boxed.on_next(7);
    assert!(!boxed.is_closed());
  }

  #[rxsink_macro::test]
  fn fns_observer_runs_terminal_once() {
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());
    let mut obs = ObserverFns::new(
      move |v: i32| l1.borrow_mut().push(format!("next {v}")),
      move |e: &str| l2.borrow_mut().push(format!("error {e}")),
      move || l3.borrow_mut().push("completed".to_string()),
    );

    obs.on_next(1);
    obs.on_error("boom");
    obs.on_completed();
    obs.on_next(2);

    assert!(Observer::<i32, &str>::is_closed(&obs));
    assert_eq!(*log.borrow(), vec!["next 1", "error boom"]);
  }

  #[rxsink_macro::test]
  fn next_fn_stops_after_error() {
    let mut seen = vec![];
    let mut obs = NextFn::new(|v: i32| seen.push(v));
    obs.on(Event::<_, &str>::Next(1));
    obs.on(Event::Error("ignored"));
    obs.on(Event::<_, &str>::Next(2));
    assert!(Observer::<i32, &str>::is_closed(&obs));
    drop(obs);
    assert_eq!(seen, vec![1]);
  }
}
