//! Re-keying by a derived index

use crate::pair::Pair;
use crate::sequence::{Cursor, PairSequence};

/// Replaces each element's index with one derived from its value, preserving
/// value order and count.
///
/// Typical use: re-keying a window sequence from emission ordinals to a
/// representative source index, e.g. the last index of each window. The key
/// function must be total over the sequence's values; there is no
/// validation.
#[derive(Debug, Clone)]
pub struct WithIndex<S, F> {
    source: S,
    key: F,
}

impl<S, F, I2> WithIndex<S, F>
where
    S: PairSequence,
    F: Fn(&S::Value) -> I2,
{
    /// Re-key each element of `source` by `key`.
    pub fn new(source: S, key: F) -> Self {
        Self { source, key }
    }
}

impl<S, F, I2> PairSequence for WithIndex<S, F>
where
    S: PairSequence,
    F: Fn(&S::Value) -> I2,
    I2: 'static,
{
    type Index = I2;
    type Value = S::Value;

    fn cursor(&self) -> Cursor<'_, I2, S::Value> {
        let key = &self.key;
        Box::new(self.source.cursor().map(move |pair| {
            let index = key(&pair.value);
            Pair::new(index, pair.value)
        }))
    }
}
