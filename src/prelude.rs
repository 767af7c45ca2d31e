//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Disposables
pub use crate::disposable::*;
// Core traits and types
pub use crate::{
  event::Event,
  observable::{self, produce, Emitter, Observable, ObservableExt},
  observer::{BoxedObserver, EventFn, NextFn, Observer, ObserverFns},
  sink::Sink,
};
// Operators
pub use crate::ops::{
  compact_map::{CompactMap, Transform, TransformOp, TransformSink, TryCompactMap},
  filter::FilterFn,
  into_stream::IntoStream,
  map::MapFn,
};
