//! Index/value pair primitive

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single element of a sequence: an index paired with a value.
///
/// Indices are opaque position keys carried alongside values. The engine
/// never assumes they are unique or sorted; it only preserves their order of
/// arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<I, V> {
    /// Position key carried with the value
    pub index: I,
    /// The value itself
    pub value: V,
}

impl<I, V> Pair<I, V> {
    /// Create a pair from an index and a value
    pub fn new(index: I, value: V) -> Self {
        Self { index, value }
    }

    /// Split the pair back into an (index, value) tuple
    pub fn into_tuple(self) -> (I, V) {
        (self.index, self.value)
    }
}

impl<I, V> From<(I, V)> for Pair<I, V> {
    fn from((index, value): (I, V)) -> Self {
        Self { index, value }
    }
}

impl<I, V> From<Pair<I, V>> for (I, V) {
    fn from(pair: Pair<I, V>) -> Self {
        pair.into_tuple()
    }
}
