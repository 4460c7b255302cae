//! Immutable window snapshots

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pair::Pair;
use crate::sequence::{Cursor, PairSequence};

/// An immutable, ordered, contiguous run of pairs cut from a source
/// sequence.
///
/// A window is an owned snapshot taken at emission time: later emissions by
/// the producing cursor can never alter it. A window always contains at
/// least one pair — windowing policies emit nothing rather than emitting an
/// empty window — so the first/last accessors are total.
///
/// Windows implement [`PairSequence`] themselves, so a window can be
/// re-windowed, bounded, or mapped like any other sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Window<I, V> {
    pairs: Vec<Pair<I, V>>,
}

impl<I, V> Window<I, V> {
    /// Snapshot a buffer of pairs into a window.
    ///
    /// Callers must never pass an empty buffer.
    pub(crate) fn from_pairs(pairs: Vec<Pair<I, V>>) -> Self {
        debug_assert!(!pairs.is_empty(), "windows are never empty");
        Self { pairs }
    }

    /// Number of pairs in the window
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the window holds no pairs (never true for emitted windows)
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First pair of the window
    pub fn first(&self) -> &Pair<I, V> {
        &self.pairs[0]
    }

    /// Last pair of the window
    pub fn last(&self) -> &Pair<I, V> {
        &self.pairs[self.pairs.len() - 1]
    }

    /// Index of the first pair
    pub fn first_index(&self) -> &I {
        &self.first().index
    }

    /// Index of the last pair
    pub fn last_index(&self) -> &I {
        &self.last().index
    }

    /// Value of the first pair
    pub fn first_value(&self) -> &V {
        &self.first().value
    }

    /// Value of the last pair
    pub fn last_value(&self) -> &V {
        &self.last().value
    }

    /// Iterate the window's pairs in order
    pub fn pairs(&self) -> impl Iterator<Item = &Pair<I, V>> {
        self.pairs.iter()
    }

    /// Iterate the window's indices in order
    pub fn indices(&self) -> impl Iterator<Item = &I> {
        self.pairs.iter().map(|pair| &pair.index)
    }

    /// Iterate the window's values in order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.pairs.iter().map(|pair| &pair.value)
    }

    /// View the window as a slice of pairs
    pub fn as_slice(&self) -> &[Pair<I, V>] {
        &self.pairs
    }

    /// Copy the window's values out into a vector
    pub fn to_values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    /// Copy the window's indices out into a vector
    pub fn to_indices(&self) -> Vec<I>
    where
        I: Clone,
    {
        self.indices().cloned().collect()
    }

    /// Consume the window, returning its pairs
    pub fn into_pairs(self) -> Vec<Pair<I, V>> {
        self.pairs
    }
}

impl<I, V> PairSequence for Window<I, V>
where
    I: Clone + 'static,
    V: Clone + 'static,
{
    type Index = I;
    type Value = V;

    fn cursor(&self) -> Cursor<'_, I, V> {
        Box::new(self.pairs.iter().cloned())
    }
}
