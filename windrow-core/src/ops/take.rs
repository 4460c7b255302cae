//! Bounded-prefix adapter

use crate::pair::Pair;
use crate::sequence::{Cursor, PairSequence};

/// Caps a sequence at its first `limit` elements.
///
/// Each traversal yields `min(limit, source length)` elements. Once the cap
/// is reached the cursor performs no further upstream pulls — there is no
/// look-ahead past the cutoff — which makes `Take` safe over unbounded
/// sources. A limit of zero yields an immediately-empty traversal.
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    limit: usize,
}

impl<S> Take<S>
where
    S: PairSequence,
{
    /// Cap `source` at `limit` elements.
    pub fn new(source: S, limit: usize) -> Self {
        Self { source, limit }
    }
}

impl<S> PairSequence for Take<S>
where
    S: PairSequence,
{
    type Index = S::Index;
    type Value = S::Value;

    fn cursor(&self) -> Cursor<'_, S::Index, S::Value> {
        Box::new(TakeCursor {
            upstream: self.source.cursor(),
            remaining: self.limit,
        })
    }
}

/// Traversal state for [`Take`]: a countdown gate in front of the upstream
/// cursor.
struct TakeCursor<'a, I, V> {
    upstream: Cursor<'a, I, V>,
    remaining: usize,
}

impl<I, V> Iterator for TakeCursor<'_, I, V> {
    type Item = Pair<I, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.upstream.next()
    }
}
