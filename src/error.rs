//! The single domain error of this crate: invalid access.
//!
//! Every container here has exactly one user-visible failure mode -
//! dereferencing emptiness. The panicking accessors (`get`, `Deref`)
//! surface it as a panic; the `try_` accessors surface it as this type.

/// The error type for accessing a container that holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessError;

impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("accessed a container without a value")
    }
}

impl std::error::Error for AccessError {}
