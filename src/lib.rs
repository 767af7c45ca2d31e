//! # rxsink: the operator substrate of Reactive Extensions
//!
//! A push-based stream model: an [`Observable`] produces [`Event`]s, an
//! [`Observer`] consumes them, and operators sit in between, each one a
//! [`Sink`] that forwards transformed events downstream while honoring two
//! rules: exactly one terminal event, and disposal that cascades to the
//! source.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxsink::prelude::*;
//!
//! observable::from_iter(["1", "x", "3"])
//!   .compact_map(|s: &str| s.parse::<i32>().ok())
//!   .subscribe_next(|v| println!("Value: {}", v));
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Event`] | `Next`, `Error` or `Completed` |
//! | [`Observable`] | Describes a stream; subscribing is its only side effect |
//! | [`Observer`] | Consumes events through a single `on` entry point |
//! | [`Sink`] | Operator base: owns the downstream observer and the cancel handle |
//! | [`Disposable`] | Idempotent handle releasing a subscription |
//!
//! ## Feature Flags
//!
//! - **`tracing`**: emit `tracing` events for sink disposal, dropped late
//!   events and transform failures.
//!
//! [`Event`]: event::Event
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Sink`]: sink::Sink
//! [`Disposable`]: disposable::Disposable

pub mod disposable;
pub mod event;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod sink;

pub use prelude::*;
