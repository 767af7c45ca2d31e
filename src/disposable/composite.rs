use std::fmt::{Debug, Formatter};

use smallvec::SmallVec;

use super::{BoxedDisposable, Cancelable, Disposable};
use crate::rc::MutArc;

/// A group of disposables released together.
///
/// Adding to a composite that is already disposed disposes the newcomer on the
/// spot, so nothing added late can leak.
#[derive(Clone, Default)]
pub struct CompositeDisposable(MutArc<Inner>);

#[derive(Default)]
struct Inner {
  closed: bool,
  teardown: SmallVec<[BoxedDisposable; 2]>,
}

impl CompositeDisposable {
  pub fn new() -> Self { Self::default() }

  pub fn add(&self, disposable: impl Disposable + Send + 'static) {
    let mut inner = self.0.rc_deref_mut();
    if inner.closed {
      drop(inner);
      disposable.dispose();
    } else {
      inner.teardown.push(BoxedDisposable::new(disposable));
    }
  }

  /// Number of disposables waiting to be released.
  pub fn len(&self) -> usize { self.0.rc_deref_mut().teardown.len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl Disposable for CompositeDisposable {
  fn dispose(&self) {
    let teardown = {
      let mut inner = self.0.rc_deref_mut();
      if inner.closed {
        return;
      }
      inner.closed = true;
      std::mem::take(&mut inner.teardown)
    };
    for d in teardown {
      d.dispose();
    }
  }
}

impl Cancelable for CompositeDisposable {
  fn is_disposed(&self) -> bool { self.0.rc_deref_mut().closed }
}

impl Debug for CompositeDisposable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let inner = self.0.rc_deref_mut();
    f.debug_struct("CompositeDisposable")
      .field("closed", &inner.closed)
      .field("teardown_count", &inner.teardown.len())
      .finish()
  }
}
