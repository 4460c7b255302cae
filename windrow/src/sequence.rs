//! The fluent, type-erased sequence handle

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, SequenceError};
use windrow_core::{
    Adjacency, EmptySequence, FixedWindows, FnSequence, Inflate, Pair, PairSequence, Select,
    SequentialDistinct, Skip, SlidingWindows, Take, VariableWindows, WithIndex, Window,
};

/// Shared, immutable sequence definition behind a [`Sequence`] handle.
type DynSequence<I, V> = dyn PairSequence<Index = I, Value = V> + Send + Sync;

/// A lazy, restartable sequence of index/value pairs.
///
/// A `Sequence` is a pipeline *definition*: transforms return new handles
/// and never mutate or consume the receiver, and nothing is computed until a
/// materializer (or [`pairs`](Self::pairs)) drives a traversal. Every
/// materializer runs its own fresh traversal, so counting a sequence and
/// then reading its values observe identical data.
///
/// Cloning a handle is cheap and shares the underlying definition.
pub struct Sequence<I, V> {
    source: Arc<DynSequence<I, V>>,
}

impl<I, V> Clone for Sequence<I, V> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<I, V> fmt::Debug for Sequence<I, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}

impl<V> Sequence<usize, V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Build a sequence from values alone, indexed by position 0, 1, 2, …
    pub fn from_values(values: Vec<V>) -> Self {
        let pairs: Vec<Pair<usize, V>> = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| Pair::new(index, value))
            .collect();
        Self::from_source(pairs)
    }
}

impl<I, V> Sequence<I, V>
where
    I: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Build a sequence from (index, value) tuples.
    pub fn from_pairs(pairs: Vec<(I, V)>) -> Self {
        let pairs: Vec<Pair<I, V>> = pairs.into_iter().map(Pair::from).collect();
        Self::from_source(pairs)
    }

    /// Build a sequence from parallel index and value columns.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ColumnLengthMismatch`] when the columns
    /// differ in length.
    pub fn from_columns(index: Vec<I>, values: Vec<V>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(SequenceError::ColumnLengthMismatch {
                index_len: index.len(),
                value_len: values.len(),
            });
        }
        let pairs: Vec<Pair<I, V>> = index
            .into_iter()
            .zip(values)
            .map(|(index, value)| Pair::new(index, value))
            .collect();
        Ok(Self::from_source(pairs))
    }

    /// Wrap an arbitrary restartable source.
    pub fn from_source<S>(source: S) -> Self
    where
        S: PairSequence<Index = I, Value = V> + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }

    /// Build an on-demand sequence from a cursor factory.
    ///
    /// The factory runs once per traversal; unbounded factories are valid
    /// and are typically bounded downstream with [`take`](Self::take).
    pub fn generate<It, F>(factory: F) -> Self
    where
        It: Iterator<Item = Pair<I, V>> + 'static,
        F: Fn() -> It + Send + Sync + 'static,
    {
        Self::from_source(FnSequence::new(factory))
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Self::from_source(EmptySequence::new())
    }

    // ---- windowing -------------------------------------------------------

    /// Partition into consecutive non-overlapping windows of `period`
    /// pairs; the final window may be shorter. Windows are indexed by
    /// emission ordinal.
    ///
    /// # Errors
    ///
    /// Fails with [`CoreError::InvalidPeriod`](windrow_core::CoreError) for
    /// a zero period, before any iteration.
    pub fn window(&self, period: usize) -> Result<Sequence<usize, Window<I, V>>> {
        log::debug!("attaching fixed windowing, period={period}");
        let windows = FixedWindows::new(Arc::clone(&self.source), period)?;
        Ok(Sequence {
            source: Arc::new(windows),
        })
    }

    /// Produce every contiguous overlapping window of exactly `period`
    /// pairs, advancing one element per emission. Sources shorter than
    /// `period` produce an empty sequence.
    ///
    /// # Errors
    ///
    /// Fails with [`CoreError::InvalidPeriod`](windrow_core::CoreError) for
    /// a zero period, before any iteration.
    pub fn rolling_window(&self, period: usize) -> Result<Sequence<usize, Window<I, V>>> {
        log::debug!("attaching sliding windowing, period={period}");
        let windows = SlidingWindows::new(Arc::clone(&self.source), period)?;
        Ok(Sequence {
            source: Arc::new(windows),
        })
    }

    /// Partition into maximal runs of adjacent pairs, as decided by
    /// `predicate` over consecutive values.
    pub fn variable_window<P>(&self, predicate: P) -> Sequence<usize, Window<I, V>>
    where
        P: Adjacency<V> + Send + Sync + 'static,
    {
        Sequence {
            source: Arc::new(VariableWindows::new(Arc::clone(&self.source), predicate)),
        }
    }

    /// Collapse runs of consecutive equal values to their first pair.
    pub fn sequential_distinct(&self) -> Sequence<I, V>
    where
        V: PartialEq,
    {
        self.sequential_distinct_by(V::clone)
    }

    /// Collapse runs of consecutive equal-by-projection values to their
    /// first pair.
    pub fn sequential_distinct_by<K, F>(&self, selector: F) -> Sequence<I, V>
    where
        K: PartialEq,
        F: Fn(&V) -> K + Send + Sync + 'static,
    {
        Sequence {
            source: Arc::new(SequentialDistinct::new(Arc::clone(&self.source), selector)),
        }
    }

    // ---- bounding and mapping --------------------------------------------

    /// Keep at most the first `limit` elements. Safe over unbounded
    /// sources: nothing past the cutoff is ever pulled.
    pub fn take(&self, limit: usize) -> Sequence<I, V> {
        Sequence {
            source: Arc::new(Take::new(Arc::clone(&self.source), limit)),
        }
    }

    /// Discard the first `count` elements.
    pub fn skip(&self, count: usize) -> Sequence<I, V> {
        Sequence {
            source: Arc::new(Skip::new(Arc::clone(&self.source), count)),
        }
    }

    /// Map each value through `transform`, preserving indices, order, and
    /// count.
    pub fn select<T, F>(&self, transform: F) -> Sequence<I, T>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(V) -> T + Send + Sync + 'static,
    {
        Sequence {
            source: Arc::new(Select::new(Arc::clone(&self.source), transform)),
        }
    }

    /// Re-key each element by an index derived from its value.
    pub fn with_index<I2, F>(&self, key: F) -> Sequence<I2, V>
    where
        I2: Clone + Send + Sync + 'static,
        F: Fn(&V) -> I2 + Send + Sync + 'static,
    {
        Sequence {
            source: Arc::new(WithIndex::new(Arc::clone(&self.source), key)),
        }
    }

    /// Expand each value into zero or more output values, all keyed by the
    /// source element's index, concatenated lazily in source order.
    pub fn inflate<T, Exp, F>(&self, expand: F) -> Sequence<I, T>
    where
        T: Clone + Send + Sync + 'static,
        Exp: IntoIterator<Item = T>,
        Exp::IntoIter: 'static,
        F: Fn(V) -> Exp + Send + Sync + 'static,
    {
        Sequence {
            source: Arc::new(Inflate::new(Arc::clone(&self.source), expand)),
        }
    }

    // ---- materializers ---------------------------------------------------

    /// Begin a traversal, yielding owned pairs.
    pub fn pairs(&self) -> impl Iterator<Item = Pair<I, V>> + '_ {
        self.source.cursor()
    }

    /// Materialize all (index, value) tuples.
    pub fn to_pairs(&self) -> Vec<(I, V)> {
        self.source.cursor().map(Pair::into_tuple).collect()
    }

    /// Materialize all values, in order.
    pub fn to_values(&self) -> Vec<V> {
        self.source.cursor().map(|pair| pair.value).collect()
    }

    /// Materialize all indices, in order.
    pub fn to_index(&self) -> Vec<I> {
        self.source.cursor().map(|pair| pair.index).collect()
    }

    /// Number of elements, counted by a fresh traversal.
    pub fn count(&self) -> usize {
        self.source.cursor().count()
    }

    /// Whether a fresh traversal yields no elements.
    pub fn is_empty(&self) -> bool {
        self.source.cursor().next().is_none()
    }

    /// First (index, value) tuple, if any.
    pub fn first(&self) -> Option<(I, V)> {
        self.source.cursor().next().map(Pair::into_tuple)
    }

    /// Last (index, value) tuple, if any.
    pub fn last(&self) -> Option<(I, V)> {
        self.source.cursor().last().map(Pair::into_tuple)
    }
}
