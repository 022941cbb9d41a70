//! Shared edit engine.
//!
//! Rewrite rules never mutate a buffer directly; they describe their
//! changes as byte-range [`Edit`]s and `ByteRangeRewriter` applies them.

mod rewriter;

pub use rewriter::{ByteRangeRewriter, Edit, RewriteError};
