//! Operators built on [`Sink`](crate::sink::Sink).
//!
//! Every operator here is a [`TransformOp`](compact_map::TransformOp) with a
//! different [`Transform`](compact_map::Transform); `into_stream` bridges a
//! stream to `futures`.
pub mod compact_map;
pub mod filter;
pub mod into_stream;
pub mod map;
