use super::Disposable;

/// An RAII scope for a subscription: dropping the guard disposes it.
///
/// If you want to drop it immediately, wrap it in its own scope.
#[derive(Debug)]
#[must_use]
pub struct DisposeGuard<D: Disposable>(D);

impl<D: Disposable> DisposeGuard<D> {
  pub fn new(disposable: D) -> Self { Self(disposable) }

  /// Borrow the guarded disposable.
  pub fn inner(&self) -> &D { &self.0 }
}

impl<D: Disposable> Drop for DisposeGuard<D> {
  #[inline]
  fn drop(&mut self) { self.0.dispose() }
}
