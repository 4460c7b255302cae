//! Fluent lazy windowing for tabular series pipelines
//!
//! This crate is the stable public surface over
//! [`windrow-core`](windrow_core): a clonable, type-erased
//! [`Sequence`] handle that composes the engine's windowing policies and
//! pipeline combinators without exposing their concrete adapter types.
//!
//! Pipelines are definitions, not computations: every transform returns a
//! new handle, and work happens only when a materializer drives a
//! traversal. Traversals are independent and restartable — materializing a
//! pipeline twice yields identical results.
//!
//! # Example
//!
//! ```rust
//! use windrow::Sequence;
//!
//! let prices = Sequence::from_values(vec![10.0, 11.0, 9.5, 9.5, 12.0]);
//!
//! // Two-point moving average, keyed by each window's last position.
//! let means = prices
//!     .rolling_window(2)
//!     .unwrap()
//!     .with_index(|w| *w.last_index())
//!     .select(|w| w.values().sum::<f64>() / w.len() as f64);
//!
//! assert_eq!(means.to_index(), vec![1, 2, 3, 4]);
//! assert_eq!(means.to_values(), vec![10.5, 10.25, 9.5, 10.75]);
//! ```
//!
//! Windows are never empty, a fixed window's final group may be short, a
//! rolling window is never short, and empty sources always mean zero
//! emissions, never an error. Invalid configuration (a zero period) fails
//! at construction; panics from caller-supplied closures propagate
//! unchanged.

#![warn(missing_docs)]

pub mod error;
mod sequence;

pub use error::{Result, SequenceError};
pub use sequence::Sequence;

// Re-export the engine types that appear in the public surface.
pub use windrow_core::{Adjacency, CoreError, KeyEquality, Pair, PairSequence, Window};
