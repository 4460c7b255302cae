//! Collapsing runs of equal-by-projection values

use crate::pair::Pair;
use crate::sequence::{Cursor, PairSequence};

/// Collapses each run of consecutive equal-by-projection values to the run's
/// first pair, preserving that pair's original index and value.
///
/// This is variable windowing under key-equality adjacency with each run
/// reduced to its first element. Because key equality is transitive, the
/// cursor compares every candidate against the open run's first key and
/// never needs to buffer the run; only equal *consecutive* values collapse —
/// a value reappearing after an interruption starts a fresh run. The
/// operation is idempotent: applying it to its own output changes nothing.
#[derive(Debug, Clone)]
pub struct SequentialDistinct<S, F> {
    source: S,
    selector: F,
}

impl<S, F, K> SequentialDistinct<S, F>
where
    S: PairSequence,
    F: Fn(&S::Value) -> K,
    K: PartialEq,
{
    /// Collapse runs of `source` whose values project to equal keys.
    pub fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F, K> PairSequence for SequentialDistinct<S, F>
where
    S: PairSequence,
    F: Fn(&S::Value) -> K,
    K: PartialEq,
{
    type Index = S::Index;
    type Value = S::Value;

    fn cursor(&self) -> Cursor<'_, S::Index, S::Value> {
        Box::new(DistinctCursor {
            upstream: self.source.cursor(),
            selector: &self.selector,
            pending: None,
        })
    }
}

/// Traversal state for [`SequentialDistinct`]: the first pair of the open
/// run, plus the pending element that ended it.
struct DistinctCursor<'a, I, V, F> {
    upstream: Cursor<'a, I, V>,
    selector: &'a F,
    pending: Option<Pair<I, V>>,
}

impl<I, V, F, K> Iterator for DistinctCursor<'_, I, V, F>
where
    F: Fn(&V) -> K,
    K: PartialEq,
{
    type Item = Pair<I, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = match self.pending.take() {
            Some(pair) => pair,
            None => self.upstream.next()?,
        };

        let key = (self.selector)(&first.value);
        while let Some(candidate) = self.upstream.next() {
            if (self.selector)(&candidate.value) != key {
                self.pending = Some(candidate);
                break;
            }
        }
        Some(first)
    }
}
