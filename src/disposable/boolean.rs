use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};

use super::{Cancelable, Disposable};

/// A one-way "disposed" flag.
///
/// Clones share the flag, so one handle can be given to a producer to poll
/// while another is handed out to cancel it.
#[derive(Clone, Debug, Default)]
pub struct BooleanDisposable(Arc<AtomicBool>);

impl BooleanDisposable {
  pub fn new() -> Self { Self::default() }
}

impl Disposable for BooleanDisposable {
  #[inline]
  fn dispose(&self) { self.0.store(true, Ordering::Release); }
}

impl Cancelable for BooleanDisposable {
  #[inline]
  fn is_disposed(&self) -> bool { self.0.load(Ordering::Acquire) }
}
