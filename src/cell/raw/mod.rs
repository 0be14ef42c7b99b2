//! Raw building blocks for the inline containers.
//!
//! This layer intentionally exposes *minimal* surface area and concentrates
//! unsafe code in a small number of modules. Higher layers should not perform
//! ad-hoc `ptr::*` / `MaybeUninit` unsafe operations; they call the small,
//! audited surface here instead.

pub(crate) mod slot;
