//! Shared mutable cell used wherever a value must be reachable from more than
//! one handle (an `Emitter` and its clones, a composite and its owner).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

/// `Arc<Mutex<T>>` that recovers from poisoning.
///
/// A panicking observer must not leave the subscription undisposable, so a
/// poisoned lock hands out the inner value instead of failing.
#[derive(Default)]
pub struct MutArc<T>(Arc<Mutex<T>>);

impl<T> MutArc<T> {
  pub fn own(t: T) -> Self { Self(Arc::new(Mutex::new(t))) }

  #[inline]
  pub fn rc_deref_mut(&self) -> MutexGuard<'_, T> {
    self.0.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Like [`rc_deref_mut`](MutArc::rc_deref_mut), but `None` instead of
  /// blocking when the lock is held, including by the current thread.
  #[inline]
  pub fn try_rc_deref_mut(&self) -> Option<MutexGuard<'_, T>> {
    match self.0.try_lock() {
      Ok(guard) => Some(guard),
      Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
      Err(TryLockError::WouldBlock) => None,
    }
  }
}

impl<T> Clone for MutArc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}
