//! `Lazy` - a recomputable deferred-evaluation cache.
//!
//! Retains an initializer `F: FnMut() -> T` so the cached value can be
//! invalidated and recomputed. The cache itself is a [`Maybe`], so all
//! storage-lifetime handling lives in one place.

use crate::cell::maybe::Maybe;

/// A deferred computation whose result is cached on first access.
pub struct Lazy<T, F = fn() -> T> {
    value: Maybe<T>,
    init: F,
}

impl<T, F> Lazy<T, F>
where
    F: FnMut() -> T,
{
    /// Creates a new `Lazy` with a reusable initializer.
    ///
    /// Nothing is computed until the first [`force`](Lazy::force).
    pub fn new(init: F) -> Self {
        Self {
            value: Maybe::empty(),
            init,
        }
    }

    /// Returns `true` if a value is currently cached.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.value.has_value()
    }

    /// Gets the cached value, computing and caching it if needed.
    pub fn force(&mut self) -> &T {
        self.compute_if_absent();
        self.value.get()
    }

    /// Gets a mutable reference to the cached value, computing it if needed.
    pub fn force_mut(&mut self) -> &mut T {
        self.compute_if_absent();
        self.value.get_mut()
    }

    /// Invalidates the cached value (dropping it) if present.
    ///
    /// The next access recomputes through the initializer.
    pub fn invalidate(&mut self) {
        self.value.reset();
    }

    /// Consumes the cache, returning the value (computing it if it was never
    /// forced).
    pub fn into_value(mut self) -> T {
        self.compute_if_absent();
        match self.value.try_into_inner() {
            Ok(value) => value,
            Err(_) => unreachable!("compute_if_absent installed a value"),
        }
    }

    #[inline]
    fn compute_if_absent(&mut self) {
        if !self.value.has_value() {
            let value = (self.init)();
            self.value.set(value);
        }
    }
}

impl<T: Default> Default for Lazy<T, fn() -> T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: core::fmt::Debug, F> core::fmt::Debug for Lazy<T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Lazy")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
