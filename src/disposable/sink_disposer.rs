use std::{
  fmt::{Debug, Formatter},
  sync::{
    atomic::{AtomicU8, Ordering},
    Arc, Mutex, PoisonError,
  },
};

use super::{BoxedDisposable, Cancelable, Disposable};

const DISPOSED: u8 = 1;
const SUBSCRIPTION_SET: u8 = 2;

/// The cancellation handle shared by an operator's sink and the subscription
/// handed back to the subscriber.
///
/// Disposing it marks the sink as disposed and releases the upstream
/// subscription. The two can happen in either order: a synchronous source may
/// terminate (and make the sink dispose) before `subscribe` has even returned
/// the upstream subscription; in that case the subscription is released the
/// moment it is stored.
#[derive(Clone, Default)]
pub struct SinkDisposer(Arc<State>);

#[derive(Default)]
struct State {
  flags: AtomicU8,
  subscription: Mutex<Option<BoxedDisposable>>,
}

impl SinkDisposer {
  pub fn new() -> Self { Self::default() }

  /// Stores the upstream subscription. Must be called at most once.
  pub fn set_subscription(&self, subscription: impl Disposable + Send + 'static) {
    *self.slot() = Some(BoxedDisposable::new(subscription));
    let previous = self.0.flags.fetch_or(SUBSCRIPTION_SET, Ordering::AcqRel);
    debug_assert_eq!(previous & SUBSCRIPTION_SET, 0, "upstream subscription set twice");
    if previous & DISPOSED != 0 {
      self.release();
    }
  }

  fn slot(&self) -> std::sync::MutexGuard<'_, Option<BoxedDisposable>> {
    self.0.subscription.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn release(&self) {
    // Never hold the lock while upstream teardown runs; it may re-enter.
    let subscription = self.slot().take();
    if let Some(subscription) = subscription {
      subscription.dispose();
    }
  }
}

impl Disposable for SinkDisposer {
  fn dispose(&self) {
    let previous = self.0.flags.fetch_or(DISPOSED, Ordering::AcqRel);
    if previous & DISPOSED != 0 {
      return;
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(subscription_set = previous & SUBSCRIPTION_SET != 0, "sink disposed");
    if previous & SUBSCRIPTION_SET != 0 {
      self.release();
    }
  }
}

impl Cancelable for SinkDisposer {
  #[inline]
  fn is_disposed(&self) -> bool { self.0.flags.load(Ordering::Acquire) & DISPOSED != 0 }
}

impl Debug for SinkDisposer {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let flags = self.0.flags.load(Ordering::Acquire);
    f.debug_struct("SinkDisposer")
      .field("disposed", &(flags & DISPOSED != 0))
      .field("subscription_set", &(flags & SUBSCRIPTION_SET != 0))
      .finish()
  }
}
