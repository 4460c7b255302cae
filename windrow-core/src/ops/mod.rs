//! Pipeline combinators over pair sequences
//!
//! Bounding ([`Take`], [`Skip`]), element-wise mapping ([`Select`]),
//! re-keying ([`WithIndex`]), flat expansion ([`Inflate`]), and run
//! collapsing ([`SequentialDistinct`]). All are lazy, restartable adapters:
//! they hold a source and a closure and do no work until a cursor is pulled.

mod distinct;
mod inflate;
mod select;
mod skip;
mod take;
mod with_index;

pub use distinct::SequentialDistinct;
pub use inflate::Inflate;
pub use select::Select;
pub use skip::Skip;
pub use take::Take;
pub use with_index::WithIndex;
