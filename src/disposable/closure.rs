use super::{Cancelable, Disposable};
use crate::rc::MutArc;

/// Runs a teardown closure the first time it is disposed.
///
/// ```rust
/// use rxsink::prelude::*;
///
/// let d = ClosureDisposable::new(|| println!("released"));
/// d.dispose();
/// d.dispose(); // prints nothing
/// ```
pub struct ClosureDisposable<F>(MutArc<Option<F>>);

impl<F: FnOnce()> ClosureDisposable<F> {
  pub fn new(teardown: F) -> Self { Self(MutArc::own(Some(teardown))) }
}

impl<F> Clone for ClosureDisposable<F> {
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<F: FnOnce()> Disposable for ClosureDisposable<F> {
  fn dispose(&self) {
    // Release the lock before running user code.
    let teardown = self.0.rc_deref_mut().take();
    if let Some(teardown) = teardown {
      teardown();
    }
  }
}

impl<F: FnOnce()> Cancelable for ClosureDisposable<F> {
  fn is_disposed(&self) -> bool { self.0.rc_deref_mut().is_none() }
}
