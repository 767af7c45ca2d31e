use std::marker::PhantomData;

use super::{produce, Observable};
use crate::{
  disposable::{Cancelable, ClosureDisposable, Disposable, SinkDisposer},
  event::Event,
  observer::{BoxedObserver, Observer},
  rc::MutArc,
};

/// Creates an observable from a subscribe function.
///
/// `subscribe` runs once per subscription with a fresh [`Emitter`] and returns
/// the teardown for that subscription. The teardown is disposed when the
/// subscriber cancels, or as soon as a terminal event goes through the
/// emitter. Either way the downstream observer is dropped with it, even if
/// clones of the emitter live on.
///
/// ```
/// use rxsink::prelude::*;
///
/// let source = observable::create(|emitter: Emitter<i32, String>| {
///   emitter.next(1);
///   emitter.next(2);
///   emitter.complete();
///   ClosureDisposable::new(|| println!("released"))
/// });
///
/// source.subscribe_next(|v| println!("{v}"));
/// ```
pub fn create<F, U, Item, Err>(subscribe: F) -> Create<F, Item, Err>
where
  F: Fn(Emitter<Item, Err>) -> U,
  U: Disposable + Send + 'static,
{
  Create { subscribe, _marker: PhantomData }
}

pub struct Create<F, Item, Err> {
  subscribe: F,
  _marker: PhantomData<fn() -> (Item, Err)>,
}

impl<F: Clone, Item, Err> Clone for Create<F, Item, Err> {
  fn clone(&self) -> Self { Self { subscribe: self.subscribe.clone(), _marker: PhantomData } }
}

impl<F, U, Item, Err> Observable for Create<F, Item, Err>
where
  F: Fn(Emitter<Item, Err>) -> U,
  U: Disposable + Send + 'static,
  Item: 'static,
  Err: 'static,
{
  type Item = Item;
  type Err = Err;
  type Unsub = SinkDisposer;

  fn subscribe<O>(&self, observer: O) -> SinkDisposer
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    produce(|cancel| {
      let observer: BoxedObserver<Item, Err> = Box::new(observer);
      let slot = MutArc::own(Some(observer));
      let teardown = (self.subscribe)(Emitter { observer: slot.clone(), cancel });
      (ClosureDisposable::new(move || release(&slot)), teardown)
    })
  }
}

/// The handle a [`create`] function pushes events through.
///
/// Cloneable and `Send`: hand clones to other threads freely. Every event is
/// serialized through one lock, so the downstream observer still sees a single
/// writer. After a terminal event, or once the subscription is disposed,
/// further events are ignored.
///
/// Emitting into the same emitter from inside one of its own downstream
/// callbacks is not supported and deadlocks. Disposing the subscription or
/// calling [`is_closed`](Emitter::is_closed) from there is fine.
pub struct Emitter<Item, Err> {
  observer: MutArc<Option<BoxedObserver<Item, Err>>>,
  cancel: SinkDisposer,
}

impl<Item, Err> Clone for Emitter<Item, Err> {
  fn clone(&self) -> Self { Self { observer: self.observer.clone(), cancel: self.cancel.clone() } }
}

impl<Item, Err> Emitter<Item, Err> {
  #[inline]
  pub fn next(&self, value: Item) { self.emit(Event::Next(value)) }

  #[inline]
  pub fn error(&self, err: Err) { self.emit(Event::Error(err)) }

  #[inline]
  pub fn complete(&self) { self.emit(Event::Completed) }

  pub fn emit(&self, event: Event<Item, Err>) {
    let mut slot = self.observer.rc_deref_mut();
    if self.cancel.is_disposed() {
      let observer = slot.take();
      drop(slot);
      drop(observer);
      return;
    }
    if event.is_terminal() {
      // Taking the observer out under the lock keeps every later event away
      // from it; the terminal itself and the teardown run unlocked.
      let observer = slot.take();
      drop(slot);
      if let Some(mut observer) = observer {
        observer.on(event);
      }
      self.cancel.dispose();
    } else {
      if let Some(observer) = slot.as_mut() {
        observer.on(event);
      }
      drop(slot);
      // A dispose that ran while the lock was held could not release the
      // observer itself.
      if self.cancel.is_disposed() {
        release(&self.observer);
      }
    }
  }

  /// `true` once nothing more will be delivered.
  ///
  /// Never blocks. While an event is being delivered through this emitter
  /// the downstream counts as open.
  pub fn is_closed(&self) -> bool {
    if self.cancel.is_disposed() {
      return true;
    }
    self
      .observer
      .try_rc_deref_mut()
      .is_some_and(|slot| slot.as_ref().is_none_or(|o| o.is_closed()))
  }
}

/// Drops the downstream observer unless an emit holds the slot; that emit
/// releases it once it is done.
fn release<Item, Err>(slot: &MutArc<Option<BoxedObserver<Item, Err>>>) {
  let observer = slot.try_rc_deref_mut().and_then(|mut slot| slot.take());
  drop(observer);
}

impl<Item, Err> Observer<Item, Err> for Emitter<Item, Err> {
  #[inline]
  fn on(&mut self, event: Event<Item, Err>) { self.emit(event) }

  #[inline]
  fn is_closed(&self) -> bool { Emitter::is_closed(self) }
}

#[cfg(test)]
mod tests {
  use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
  };

  use crate::prelude::*;

  #[rxsink_macro::test]
  fn next_then_complete() {
    let seen = Arc::new(Mutex::new(vec![]));
    let c_seen = seen.clone();

    observable::create(|emitter: Emitter<i32, ()>| {
      emitter.next(1);
      emitter.next(2);
      emitter.complete();
      emitter.next(3);
    })
    .subscribe_event(move |e| c_seen.lock().unwrap().push(e));

    assert_eq!(*seen.lock().unwrap(), vec![Event::Next(1), Event::Next(2), Event::Completed]);
  }

  #[rxsink_macro::test]
  fn terminal_releases_teardown() {
    let released = Arc::new(AtomicUsize::new(0));
    let c_released = released.clone();

    let sub = observable::create(move |emitter: Emitter<i32, &'static str>| {
      emitter.error("boom");
      let released = c_released.clone();
      ClosureDisposable::new(move || {
        released.fetch_add(1, Ordering::SeqCst);
      })
    })
    .subscribe_next(|_| {});

    assert!(sub.is_disposed());
    assert_eq!(released.load(Ordering::SeqCst), 1);
    sub.dispose();
    assert_eq!(released.load(Ordering::SeqCst), 1);
  }

  #[rxsink_macro::test]
  fn dispose_stops_emitter() {
    let slot: Arc<Mutex<Option<Emitter<i32, ()>>>> = Arc::default();
    let c_slot = slot.clone();
    let seen = Arc::new(Mutex::new(vec![]));
    let c_seen = seen.clone();

    let sub = observable::create(move |emitter| {
      *c_slot.lock().unwrap() = Some(emitter);
    })
    .subscribe_next(move |v| c_seen.lock().unwrap().push(v));

    let emitter = slot.lock().unwrap().take().unwrap();
    emitter.next(1);
    assert!(!emitter.is_closed());
    sub.dispose();
    emitter.next(2);

    assert!(emitter.is_closed());
    assert_eq!(*seen.lock().unwrap(), vec![1]);
  }

  #[rxsink_macro::test]
  fn is_closed_from_inside_a_callback() {
    let slot: Arc<Mutex<Option<Emitter<i32, ()>>>> = Arc::default();
    let (c_slot, inner) = (slot.clone(), slot.clone());
    let seen = Arc::new(Mutex::new(vec![]));
    let c_seen = seen.clone();

    observable::create(move |emitter| {
      *c_slot.lock().unwrap() = Some(emitter);
    })
    .subscribe_next(move |_| {
      let closed = inner.lock().unwrap().as_ref().map(Emitter::is_closed);
      c_seen.lock().unwrap().push(closed);
    });

    let emitter = slot.lock().unwrap().clone().unwrap();
    emitter.next(1);
    emitter.complete();

    assert!(emitter.is_closed());
    assert_eq!(*seen.lock().unwrap(), vec![Some(false)]);
  }

  #[cfg(not(target_arch = "wasm32"))]
  #[rxsink_macro::test]
  fn emit_from_another_thread() {
    let seen = Arc::new(Mutex::new(vec![]));
    let c_seen = seen.clone();
    let handle = Arc::new(Mutex::new(None));
    let c_handle = handle.clone();

    observable::create(move |emitter: Emitter<i32, ()>| {
      *c_handle.lock().unwrap() = Some(std::thread::spawn(move || {
        (0..5).for_each(|v| emitter.next(v));
        emitter.complete();
      }));
    })
    .subscribe_next(move |v| c_seen.lock().unwrap().push(v));

    handle.lock().unwrap().take().unwrap().join().unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4]);
  }
}
