//! Fixed-size, non-overlapping windowing

use crate::error::{CoreError, Result};
use crate::pair::Pair;
use crate::sequence::{Cursor, PairSequence};
use crate::window::Window;

/// Partitions a source sequence into consecutive, non-overlapping groups of
/// `period` pairs.
///
/// The final group may be shorter when the source length is not a multiple
/// of `period`; an empty source produces no windows at all, never a
/// zero-length window. Windows are indexed by their zero-based emission
/// ordinal.
#[derive(Debug, Clone)]
pub struct FixedWindows<S> {
    source: S,
    period: usize,
}

impl<S> FixedWindows<S>
where
    S: PairSequence,
{
    /// Create a fixed windowing of `source` with groups of `period` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPeriod`] when `period` is zero.
    pub fn new(source: S, period: usize) -> Result<Self> {
        if period == 0 {
            return Err(CoreError::InvalidPeriod { period });
        }
        Ok(Self { source, period })
    }

    /// The configured group size
    pub fn period(&self) -> usize {
        self.period
    }
}

impl<S> PairSequence for FixedWindows<S>
where
    S: PairSequence,
{
    type Index = usize;
    type Value = Window<S::Index, S::Value>;

    fn cursor(&self) -> Cursor<'_, usize, Window<S::Index, S::Value>> {
        Box::new(FixedCursor {
            upstream: self.source.cursor(),
            period: self.period,
            next_ordinal: 0,
            exhausted: false,
        })
    }
}

/// Traversal state for [`FixedWindows`].
struct FixedCursor<'a, I, V> {
    upstream: Cursor<'a, I, V>,
    period: usize,
    next_ordinal: usize,
    exhausted: bool,
}

impl<I, V> Iterator for FixedCursor<'_, I, V> {
    type Item = Pair<usize, Window<I, V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let mut group = Vec::with_capacity(self.period);
        while group.len() < self.period {
            match self.upstream.next() {
                Some(pair) => group.push(pair),
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }

        if group.is_empty() {
            return None;
        }

        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        Some(Pair::new(ordinal, Window::from_pairs(group)))
    }
}
