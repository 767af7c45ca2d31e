//! Disposable handles
//!
//! A [`Disposable`] releases whatever a subscription acquired. Every
//! implementation in this crate is idempotent: the first `dispose` call does
//! the work, later calls do nothing.

use std::sync::Arc;

mod boolean;
pub use boolean::*;
mod boxed;
pub use boxed::*;
mod closure;
pub use closure::*;
mod composite;
pub use composite::*;
mod guard;
pub use guard::*;
mod sink_disposer;
pub use sink_disposer::*;

/// A resource handle with single-shot release.
pub trait Disposable {
  /// Release the resource. Calling this more than once has no further effect
  /// and never panics.
  fn dispose(&self);

  /// Wrap `self` in a guard that disposes when dropped.
  ///
  /// **Attention:** binding the result to `_` drops it immediately.
  fn dispose_when_dropped(self) -> DisposeGuard<Self>
  where
    Self: Sized,
  {
    DisposeGuard::new(self)
  }
}

/// A [`Disposable`] that can report whether it has been released.
pub trait Cancelable: Disposable {
  fn is_disposed(&self) -> bool;
}

/// Nothing to release.
impl Disposable for () {
  #[inline]
  fn dispose(&self) {}
}

/// Disposes both halves, first to last.
impl<A: Disposable, B: Disposable> Disposable for (A, B) {
  #[inline]
  fn dispose(&self) {
    self.0.dispose();
    self.1.dispose();
  }
}

impl<D: Disposable> Disposable for Option<D> {
  #[inline]
  fn dispose(&self) {
    if let Some(d) = self {
      d.dispose()
    }
  }
}

impl<D: Disposable + ?Sized> Disposable for Box<D> {
  #[inline]
  fn dispose(&self) { (**self).dispose() }
}

impl<D: Disposable + ?Sized> Disposable for Arc<D> {
  #[inline]
  fn dispose(&self) { (**self).dispose() }
}

impl<D: Cancelable + ?Sized> Cancelable for Box<D> {
  #[inline]
  fn is_disposed(&self) -> bool { (**self).is_disposed() }
}

impl<D: Cancelable + ?Sized> Cancelable for Arc<D> {
  #[inline]
  fn is_disposed(&self) -> bool { (**self).is_disposed() }
}
