use std::convert::Infallible;

use super::{produce, Observable};
use crate::{disposable::SinkDisposer, event::Event, observer::Observer, sink::Sink};

/// Creates an observable that produces the values of an iterator.
///
/// Every subscription walks its own clone of `iter`, emitting synchronously,
/// then completes. Never emits an error. Emission stops early once the
/// subscriber is closed, e.g. because a downstream transform failed.
///
/// ```
/// use rxsink::prelude::*;
///
/// observable::from_iter(vec![0, 1, 2, 3]).subscribe_next(|v| println!("{v}"));
/// ```
pub fn from_iter<Iter>(iter: Iter) -> FromIter<Iter>
where
  Iter: IntoIterator + Clone,
{
  FromIter(iter)
}

/// Creates an observable that emits `value` once, then completes.
pub fn of<Item: Clone>(value: Item) -> FromIter<std::iter::Once<Item>> {
  from_iter(std::iter::once(value))
}

#[derive(Clone)]
pub struct FromIter<Iter>(Iter);

impl<Iter> Observable for FromIter<Iter>
where
  Iter: IntoIterator + Clone,
{
  type Item = Iter::Item;
  type Err = Infallible;
  type Unsub = SinkDisposer;

  fn subscribe<O>(&self, observer: O) -> SinkDisposer
  where
    O: Observer<Iter::Item, Infallible> + Send + 'static,
  {
    produce(|cancel| {
      let mut sink = Sink::new(observer, cancel);
      let mut values = self.0.clone().into_iter();
      loop {
        if Observer::<Iter::Item, Infallible>::is_closed(&sink) {
          return;
        }
        match values.next() {
          Some(value) => sink.on(Event::Next(value)),
          None => break,
        }
      }
      sink.on(Event::Completed);
    })
  }
}
