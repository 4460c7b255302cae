//! Lazy flat expansion

use crate::pair::Pair;
use crate::sequence::{Cursor, PairSequence};

/// Expands each element into zero or more output values, concatenated
/// lazily in source order.
///
/// Every output value carries a clone of the element's index, so one window
/// expanded into its values yields one output pair per value, all sharing
/// the window's key. An element expanding to nothing contributes nothing;
/// order within one element's expansion is whatever the expansion returns.
#[derive(Debug, Clone)]
pub struct Inflate<S, F> {
    source: S,
    expand: F,
}

impl<S, F, Exp> Inflate<S, F>
where
    S: PairSequence,
    F: Fn(S::Value) -> Exp,
    Exp: IntoIterator,
{
    /// Expand each value of `source` through `expand`.
    pub fn new(source: S, expand: F) -> Self {
        Self { source, expand }
    }
}

impl<S, F, Exp, T> PairSequence for Inflate<S, F>
where
    S: PairSequence,
    S::Index: Clone,
    F: Fn(S::Value) -> Exp,
    Exp: IntoIterator<Item = T>,
    Exp::IntoIter: 'static,
    T: 'static,
{
    type Index = S::Index;
    type Value = T;

    fn cursor(&self) -> Cursor<'_, S::Index, T> {
        let expand = &self.expand;
        Box::new(self.source.cursor().flat_map(move |pair| {
            let Pair { index, value } = pair;
            expand(value)
                .into_iter()
                .map(move |item| Pair::new(index.clone(), item))
        }))
    }
}
