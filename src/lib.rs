//! # `stow` - Value-Storage and Ownership Primitives
//!
//! A small toolkit of single-threaded value wrappers: an optional inline
//! container, a reference-counted shared heap handle, a move-only exclusive
//! heap handle, and a deferred-evaluation cache.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **No unsafe code in public APIs**: All safety-critical operations are
//!   implemented using safe abstractions built on top of a small, centrally
//!   audited unsafe foundation (`cell::raw`).
//! - **Presence tracking**: A container's value is constructed exactly while
//!   its presence state says so; emptiness is always observable before access.
//! - **Loud failure**: Accessing an empty container either panics with a
//!   descriptive message or returns [`AccessError`] - it never reads garbage.
//!
//! ### Ownership Safety
//! - **Joint teardown**: The shared handle's value is dropped and freed
//!   exactly when the last aliasing handle releases it, never earlier or
//!   twice.
//! - **Single-owner transfer**: Moving a value out of any wrapper leaves the
//!   source observably empty; there is no "moved-from but still populated"
//!   state.
//!
//! ## Architecture
//!
//! The module tree is intentionally stratified:
//! - `cell::raw::*` are the minimal unsafe building blocks (audited slot
//!   operations on `MaybeUninit<T>`).
//! - `cell::*` are the safe inline containers ([`Maybe`], [`Lazy`]).
//! - `alloc::*` are the heap handles ([`SharedBox`], [`UniqueBox`]) with
//!   manual allocation discipline.
//!
//! Every type here is a plain single-threaded value type: no atomics, no
//! locks, no suspension points. [`SharedBox`]'s reference count is
//! deliberately non-atomic, and the type is `!Send + !Sync` so the
//! single-thread contract is compiler-enforced.
//!
//! ## Example
//!
//! ```rust
//! use stow::{Maybe, SharedBox};
//!
//! let mut slot = Maybe::empty();
//! slot.emplace(42);
//! assert_eq!(*slot.get(), 42);
//! slot.reset();
//! assert!(!slot.has_value());
//!
//! let a = SharedBox::new(String::from("shared"));
//! let b = a.clone();
//! assert_eq!(b.strong_count(), 2);
//! drop(a);
//! assert_eq!(*b.get(), "shared");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod alloc;
pub mod cell;
pub mod error;

pub use alloc::{SharedBox, UniqueBox};
pub use cell::{Lazy, Maybe};
pub use error::AccessError;

// Compile-time assertions for memory layout claims.
const _: () = {
    use core::mem;

    // `Maybe` is exactly one inline slot plus a presence flag.
    assert!(mem::size_of::<Maybe<u64>>() <= mem::size_of::<u64>() * 2);
    assert!(mem::align_of::<Maybe<u64>>() == mem::align_of::<u64>());

    // The heap handles are thin: two raw pointers and one, respectively.
    assert!(mem::size_of::<SharedBox<u64>>() == mem::size_of::<usize>() * 2);
    assert!(mem::size_of::<UniqueBox<u64>>() == mem::size_of::<usize>());

    // The error type is zero-sized; checked access costs nothing to carry.
    assert!(mem::size_of::<AccessError>() == 0);
};
