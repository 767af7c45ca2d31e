//! The three signals a stream can emit.

use std::fmt::{Debug, Formatter};

/// A single notification pushed from an `Observable` to an `Observer`.
///
/// A stream emits zero or more `Next` values followed by at most one terminal
/// event (`Error` or `Completed`). Nothing follows a terminal event.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Event<Item, Err> {
  /// The next element of the sequence.
  Next(Item),
  /// The sequence terminated with a failure.
  Error(Err),
  /// The sequence terminated successfully.
  Completed,
}

impl<Item, Err> Event<Item, Err> {
  /// `true` for `Error` and `Completed`.
  #[inline]
  pub fn is_terminal(&self) -> bool { !matches!(self, Event::Next(_)) }

  /// The element carried by a `Next` event.
  pub fn next(self) -> Option<Item> {
    match self {
      Event::Next(v) => Some(v),
      Event::Error(_) | Event::Completed => None,
    }
  }

  /// The cause carried by an `Error` event.
  pub fn error(self) -> Option<Err> {
    match self {
      Event::Error(e) => Some(e),
      Event::Next(_) | Event::Completed => None,
    }
  }

  /// Transforms the element of a `Next` event, leaving terminal events as they
  /// are.
  pub fn map<B>(self, f: impl FnOnce(Item) -> B) -> Event<B, Err> {
    match self {
      Event::Next(v) => Event::Next(f(v)),
      Event::Error(e) => Event::Error(e),
      Event::Completed => Event::Completed,
    }
  }

  pub fn map_err<E>(self, f: impl FnOnce(Err) -> E) -> Event<Item, E> {
    match self {
      Event::Next(v) => Event::Next(v),
      Event::Error(e) => Event::Error(f(e)),
      Event::Completed => Event::Completed,
    }
  }
}

impl<Item: Debug, Err: Debug> Debug for Event<Item, Err> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Event::Next(v) => write!(f, "next({v:?})"),
      Event::Error(e) => write!(f, "error({e:?})"),
      Event::Completed => f.write_str("completed"),
    }
  }
}
