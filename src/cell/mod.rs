//! Inline containers - possibly-absent values stored in place.
//!
//! The module tree is intentionally stratified:
//! - `raw::*` are the minimal unsafe building blocks.
//! - [`Maybe`] is the safe optional container built on them.
//! - [`Lazy`] is a memoization-style building block caching into a [`Maybe`].

pub mod lazy;
pub mod maybe;
pub(crate) mod raw;

pub use lazy::Lazy;
pub use maybe::Maybe;
