use super::Disposable;

/// A type-erased disposable that can cross threads.
///
/// Storing disposables of different concrete types (the upstream subscription
/// inside a [`SinkDisposer`](super::SinkDisposer), the members of a
/// [`CompositeDisposable`](super::CompositeDisposable)) goes through this box.
pub struct BoxedDisposable(Box<dyn Disposable + Send>);

impl BoxedDisposable {
  #[inline]
  pub fn new(disposable: impl Disposable + Send + 'static) -> Self { Self(Box::new(disposable)) }
}

impl Disposable for BoxedDisposable {
  #[inline]
  fn dispose(&self) { self.0.dispose() }
}
