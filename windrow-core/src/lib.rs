//! Lazy, restartable windowing over ordered (index, value) pair sequences.
//!
//! This crate is the engine underneath a tabular series/table layer: a set of
//! composable, pull-based transforms that turn an ordered stream of
//! index/value pairs into streams of sub-sequences ("windows") under several
//! partitioning policies, plus the pipeline combinators needed to turn those
//! windows back into plain pair sequences.
//!
//! # Architecture
//!
//! Everything is built on one abstraction: [`PairSequence`], a *factory* of
//! traversal cursors. A sequence is a logical definition, not a stateful
//! iterator; every call to [`PairSequence::cursor`] starts a fresh,
//! independent traversal, so the same pipeline can be counted, materialized,
//! and re-read any number of times with identical results. Each transform is
//! an explicit cursor state machine that pulls exactly what it needs from its
//! upstream cursor to produce one emission.
//!
//! The windowing policies:
//! - [`FixedWindows`]: consecutive non-overlapping groups of a fixed size,
//!   with an optional shorter final group.
//! - [`SlidingWindows`]: every contiguous overlapping group of a fixed size,
//!   advancing one element per emission, never short.
//! - [`VariableWindows`]: maximal runs of elements joined by an
//!   [`Adjacency`] predicate.
//!
//! Emitted [`Window`]s are immutable snapshots and are themselves
//! [`PairSequence`]s, so they can be re-windowed, aggregated, or fed through
//! any combinator.
//!
//! # Example
//!
//! ```rust
//! use windrow_core::{FixedWindows, Pair, PairSequence};
//!
//! let source: Vec<Pair<usize, i64>> =
//!     (0..5).map(|i| Pair::new(i, i as i64 * 10)).collect();
//!
//! let windows = FixedWindows::new(source, 2).unwrap();
//! let sizes: Vec<usize> = windows.cursor().map(|w| w.value.len()).collect();
//! assert_eq!(sizes, vec![2, 2, 1]);
//!
//! // A second traversal is independent and identical.
//! let again: Vec<usize> = windows.cursor().map(|w| w.value.len()).collect();
//! assert_eq!(sizes, again);
//! ```
//!
//! # Failure model
//!
//! Invalid configuration (a zero window period) fails at construction time
//! with [`CoreError`], before any iteration begins. Caller-supplied closures
//! are never caught: a panic inside a predicate, selector, or mapping
//! function unwinds through the engine to the code driving the traversal.

#![warn(missing_docs)]

pub mod error;
pub mod ops;
pub mod pair;
pub mod sequence;
pub mod window;
pub mod windows;

pub use error::{CoreError, Result};
pub use ops::{Inflate, Select, SequentialDistinct, Skip, Take, WithIndex};
pub use pair::Pair;
pub use sequence::{Cursor, EmptySequence, FnSequence, PairSequence};
pub use window::Window;
pub use windows::{Adjacency, FixedWindows, KeyEquality, SlidingWindows, VariableWindows};
