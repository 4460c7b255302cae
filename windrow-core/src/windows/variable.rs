//! Predicate-driven variable-size windowing

use smallvec::SmallVec;

use crate::pair::Pair;
use crate::sequence::{Cursor, PairSequence};
use crate::window::Window;

/// Decides whether a value continues the run ended by the value before it.
///
/// The decision is strictly adjacent-pairwise: an implementation sees only
/// the immediately preceding value, never the run's first element or any
/// aggregate. Chains of pairwise-adjacent values therefore form a single run
/// even when the first and last values would not be adjacent to each other.
///
/// Any `Fn(&V, &V) -> bool` closure is an adjacency predicate.
pub trait Adjacency<V> {
    /// Returns `true` when `current` belongs to the same run as `previous`.
    fn adjoins(&self, previous: &V, current: &V) -> bool;
}

impl<V, F> Adjacency<V> for F
where
    F: Fn(&V, &V) -> bool,
{
    fn adjoins(&self, previous: &V, current: &V) -> bool {
        self(previous, current)
    }
}

/// Adjacency by equality of a projected key.
///
/// Two values adjoin when `selector` maps them to equal keys. This is the
/// grouping rule behind
/// [`SequentialDistinct`](crate::ops::SequentialDistinct).
#[derive(Debug, Clone)]
pub struct KeyEquality<F> {
    selector: F,
}

impl<F> KeyEquality<F> {
    /// Create a key-equality adjacency from a selector
    pub fn new(selector: F) -> Self {
        Self { selector }
    }
}

impl<V, K, F> Adjacency<V> for KeyEquality<F>
where
    F: Fn(&V) -> K,
    K: PartialEq,
{
    fn adjoins(&self, previous: &V, current: &V) -> bool {
        (self.selector)(previous) == (self.selector)(current)
    }
}

/// Partitions a source sequence into maximal runs of adjacent pairs.
///
/// A run grows while the predicate accepts each next value against the value
/// immediately before it; the first rejected element closes the run and
/// seeds the next one. Every source element lands in exactly one run, so
/// concatenating all emitted windows reproduces the source exactly. The
/// final run is always emitted (including runs of length one); an empty
/// source emits nothing.
#[derive(Debug, Clone)]
pub struct VariableWindows<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> VariableWindows<S, P>
where
    S: PairSequence,
    P: Adjacency<S::Value>,
{
    /// Create a variable windowing of `source` grouped by `predicate`.
    pub fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> PairSequence for VariableWindows<S, P>
where
    S: PairSequence,
    P: Adjacency<S::Value>,
{
    type Index = usize;
    type Value = Window<S::Index, S::Value>;

    fn cursor(&self) -> Cursor<'_, usize, Window<S::Index, S::Value>> {
        Box::new(VariableCursor {
            upstream: self.source.cursor(),
            predicate: &self.predicate,
            pending: None,
            next_ordinal: 0,
        })
    }
}

/// Traversal state for [`VariableWindows`].
///
/// `pending` holds the element that failed the predicate and closed the
/// previous run; it becomes the first element of the next run. The adjacency
/// decision folds over just the last value seen, so deciding a boundary is
/// O(1) regardless of run length.
struct VariableCursor<'a, I, V, P> {
    upstream: Cursor<'a, I, V>,
    predicate: &'a P,
    pending: Option<Pair<I, V>>,
    next_ordinal: usize,
}

impl<I, V, P> Iterator for VariableCursor<'_, I, V, P>
where
    P: Adjacency<V>,
{
    type Item = Pair<usize, Window<I, V>>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = match self.pending.take() {
            Some(pair) => pair,
            None => self.upstream.next()?,
        };

        let mut run: SmallVec<[Pair<I, V>; 8]> = SmallVec::new();
        let mut last = first;
        while let Some(candidate) = self.upstream.next() {
            if self.predicate.adjoins(&last.value, &candidate.value) {
                run.push(std::mem::replace(&mut last, candidate));
            } else {
                self.pending = Some(candidate);
                break;
            }
        }
        run.push(last);

        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        Some(Pair::new(ordinal, Window::from_pairs(run.into_vec())))
    }
}
