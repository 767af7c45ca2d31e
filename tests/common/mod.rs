use std::{
  convert::Infallible,
  num::ParseIntError,
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
  },
};

use rxsink::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
  #[error("invalid number: {0}")]
  Parse(#[from] ParseIntError),
  #[error("network timeout")]
  NetworkTimeout,
}

impl From<Infallible> for FeedError {
  fn from(never: Infallible) -> Self { match never {} }
}

/// Records every event an observer receives.
pub struct Recorder<T, E>(Arc<Mutex<Vec<Event<T, E>>>>);

impl<T, E> Clone for Recorder<T, E> {
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T, E> Default for Recorder<T, E> {
  fn default() -> Self { Self(Arc::default()) }
}

impl<T: Clone, E: Clone> Recorder<T, E> {
  pub fn events(&self) -> Vec<Event<T, E>> { self.0.lock().unwrap().clone() }

  pub fn terminal_count(&self) -> usize {
    self.0.lock().unwrap().iter().filter(|e| e.is_terminal()).count()
  }
}

impl<T, E> Observer<T, E> for Recorder<T, E> {
  fn on(&mut self, event: Event<T, E>) { self.0.lock().unwrap().push(event) }
}

/// A source whose emitters the test drives by hand, one per subscription.
pub fn manual<T: 'static, E: 'static>(
) -> (Arc<Mutex<Vec<Emitter<T, E>>>>, impl Observable<Item = T, Err = E> + Clone) {
  let emitters: Arc<Mutex<Vec<Emitter<T, E>>>> = Arc::default();
  let c_emitters = emitters.clone();
  let source = observable::create(move |emitter| c_emitters.lock().unwrap().push(emitter));
  (emitters, source)
}

/// Sets a shared flag when dropped; moved into a closure it reports when the
/// closure is released.
pub struct DropFlag(Arc<AtomicBool>);

impl DropFlag {
  pub fn new() -> (Self, Arc<AtomicBool>) {
    let dropped = Arc::new(AtomicBool::new(false));
    (Self(dropped.clone()), dropped)
  }
}

impl Drop for DropFlag {
  fn drop(&mut self) { self.0.store(true, Ordering::SeqCst) }
}
