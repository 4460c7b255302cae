//! Element-wise value mapping

use crate::pair::Pair;
use crate::sequence::{Cursor, PairSequence};

/// Lazily maps each value through a transform, preserving index, order, and
/// count.
///
/// The transform runs once per element per traversal, at pull time. A panic
/// inside the transform propagates to the caller driving the traversal.
#[derive(Debug, Clone)]
pub struct Select<S, F> {
    source: S,
    transform: F,
}

impl<S, F, T> Select<S, F>
where
    S: PairSequence,
    F: Fn(S::Value) -> T,
{
    /// Map each value of `source` through `transform`.
    pub fn new(source: S, transform: F) -> Self {
        Self { source, transform }
    }
}

impl<S, F, T> PairSequence for Select<S, F>
where
    S: PairSequence,
    F: Fn(S::Value) -> T,
    T: 'static,
{
    type Index = S::Index;
    type Value = T;

    fn cursor(&self) -> Cursor<'_, S::Index, T> {
        let transform = &self.transform;
        Box::new(
            self.source
                .cursor()
                .map(move |pair| Pair::new(pair.index, transform(pair.value))),
        )
    }
}
