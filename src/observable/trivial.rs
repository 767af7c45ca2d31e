use std::marker::PhantomData;

use super::Observable;
use crate::{event::Event, observer::Observer};

/// Creates an observable that emits no items, just completes.
pub fn empty<Item, Err>() -> Trivial<Item, Err, ()> { Trivial::new(()) }

/// Creates an observable that never emits anything and never terminates.
pub fn never<Item, Err>() -> Trivial<Item, Err, Never> { Trivial::new(Never) }

/// Creates an observable that emits no items, just terminates with `err`.
///
/// Every subscription receives a clone of `err`.
pub fn throw<Item, Err: Clone>(err: Err) -> Trivial<Item, Err, Throw<Err>> {
  Trivial::new(Throw(err))
}

/// Marker for [`never`].
#[derive(Clone, Copy, Debug)]
pub struct Never;

/// Payload of [`throw`].
#[derive(Clone, Debug)]
pub struct Throw<Err>(Err);

/// The observables that emit at most a terminal event.
pub struct Trivial<Item, Err, K> {
  kind: K,
  _marker: PhantomData<fn() -> (Item, Err)>,
}

impl<Item, Err, K> Trivial<Item, Err, K> {
  fn new(kind: K) -> Self { Self { kind, _marker: PhantomData } }
}

impl<Item, Err, K: Clone> Clone for Trivial<Item, Err, K> {
  fn clone(&self) -> Self { Self::new(self.kind.clone()) }
}

impl<Item, Err> Observable for Trivial<Item, Err, ()> {
  type Item = Item;
  type Err = Err;
  type Unsub = ();

  fn subscribe<O>(&self, mut observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    observer.on(Event::Completed);
  }
}

impl<Item, Err> Observable for Trivial<Item, Err, Never> {
  type Item = Item;
  type Err = Err;
  type Unsub = ();

  fn subscribe<O>(&self, _observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + Send + 'static,
  {
  }
}

impl<Item, Err: Clone> Observable for Trivial<Item, Err, Throw<Err>> {
  type Item = Item;
  type Err = Err;
  type Unsub = ();

  fn subscribe<O>(&self, mut observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    observer.on(Event::Error(self.kind.0.clone()));
  }
}
