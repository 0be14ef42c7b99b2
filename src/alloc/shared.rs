//! `SharedBox` - reference-counted shared ownership of one heap value.
//!
//! The count is a plain `usize` in its own allocation, shared by every
//! handle cloned from a common ancestor. It is deliberately non-atomic:
//! the raw pointers make the type `!Send + !Sync`, so the single-threaded
//! contract is enforced by the compiler rather than by documentation.

use core::ops::Deref;
use core::ptr;

use crate::alloc::{alloc_value, dealloc_value};
use crate::error::AccessError;

/// A reference-counted heap handle with non-atomic count.
///
/// Invariant: the value pointer is null iff the count pointer is null iff
/// the logical count is zero. While the count is >= 1 the pointee is alive,
/// and the sum of handles aliasing an allocation equals its count.
pub struct SharedBox<T> {
    value: *mut T,
    count: *mut usize,
}

impl<T> SharedBox<T> {
    /// Creates an empty handle owning nothing (no count allocated).
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: ptr::null_mut(),
            count: ptr::null_mut(),
        }
    }

    /// Moves `value` to the heap and creates the first handle of a new
    /// sharing group, with count 1.
    #[must_use]
    pub fn new(value: T) -> Self {
        let handle = Self {
            value: alloc_value(value),
            count: alloc_value(1usize),
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(count = 1, "shared group created");
        handle
    }

    /// Returns `true` if the handle currently owns a live value.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.strong_count() > 0
    }

    /// Returns the number of handles sharing the owned value, or 0 for an
    /// empty handle.
    #[inline]
    pub fn strong_count(&self) -> usize {
        if self.count.is_null() {
            0
        } else {
            // SAFETY: non-null count implies a live count allocation.
            unsafe { *self.count }
        }
    }

    /// Returns a reference to the owned value.
    ///
    /// # Panics
    /// Panics if the handle is empty.
    #[inline]
    pub fn get(&self) -> &T {
        match self.try_get() {
            Ok(value) => value,
            Err(_) => panic!("accessed an empty SharedBox"),
        }
    }

    /// Returns a reference to the owned value, or [`AccessError`] if the
    /// handle is empty.
    ///
    /// # Errors
    /// Returns [`AccessError`] when the handle owns nothing.
    #[inline]
    pub fn try_get(&self) -> Result<&T, AccessError> {
        if self.has_value() {
            // SAFETY: count >= 1 guarantees the pointee is alive.
            Ok(unsafe { &*self.value })
        } else {
            Err(AccessError)
        }
    }

    /// Returns a mutable reference to the owned value if this handle is the
    /// sole owner (count exactly 1), and `None` otherwise.
    ///
    /// Handing out `&mut T` through a shared alias would be unsound, so a
    /// shared (or empty) handle yields `None`.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.strong_count() == 1 {
            // SAFETY: sole ownership plus `&mut self` gives exclusivity.
            Some(unsafe { &mut *self.value })
        } else {
            None
        }
    }

    /// Transfers ownership out of `self`, leaving it empty.
    ///
    /// A pure transfer: the returned handle takes over the pointer pair and
    /// the count is neither incremented nor decremented.
    #[inline]
    pub fn take(&mut self) -> Self {
        let moved = Self {
            value: self.value,
            count: self.count,
        };
        self.value = ptr::null_mut();
        self.count = ptr::null_mut();
        moved
    }

    /// Leaves the current sharing group, then starts a fresh one around
    /// `value` with a new count of 1.
    ///
    /// Any other handle that was sharing the old value keeps the old value
    /// and the old count; this handle no longer participates in that group.
    pub fn set(&mut self, value: T) {
        self.release();
        self.value = alloc_value(value);
        self.count = alloc_value(1usize);
        #[cfg(feature = "tracing")]
        tracing::trace!(count = 1, "shared group created");
    }

    /// Decrements the count and, at zero, frees both the value and the
    /// count storage. The handle's pointers are nulled in the same step so
    /// a later release cannot reach the dead count through this handle.
    fn release(&mut self) {
        if self.count.is_null() {
            return;
        }
        // SAFETY: non-null count implies a live count allocation, and the
        // invariant says the value pointer is live alongside it.
        unsafe {
            *self.count -= 1;
            let remaining = *self.count;
            #[cfg(feature = "tracing")]
            tracing::trace!(remaining, "shared handle released");
            if remaining == 0 {
                dealloc_value(self.value);
                dealloc_value(self.count);
                #[cfg(feature = "tracing")]
                tracing::trace!("shared group torn down");
            }
        }
        self.value = ptr::null_mut();
        self.count = ptr::null_mut();
    }
}

impl<T> Default for SharedBox<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<T>> for SharedBox<T> {
    /// Adopts an existing heap allocation as a new sharing group of one.
    fn from(boxed: Box<T>) -> Self {
        Self {
            value: Box::into_raw(boxed),
            count: alloc_value(1usize),
        }
    }
}

impl<T> Clone for SharedBox<T> {
    /// Aliases the same value and count, incrementing the count.
    ///
    /// Cloning an empty handle yields an empty handle; no count is
    /// allocated.
    fn clone(&self) -> Self {
        if self.count.is_null() {
            return Self::empty();
        }
        // SAFETY: non-null count implies a live count allocation.
        unsafe {
            *self.count += 1;
            #[cfg(feature = "tracing")]
            tracing::trace!(count = *self.count, "shared handle aliased");
        }
        Self {
            value: self.value,
            count: self.count,
        }
    }

    // `clone_from` is deliberately left at its default (clone, then
    // move-assign): group membership is only ever established at
    // construction or via move.
}

impl<T> Drop for SharedBox<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Deref for SharedBox<T> {
    type Target = T;

    /// # Panics
    /// Panics if the handle is empty.
    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<T> core::fmt::Debug for SharedBox<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedBox")
            .field("count", &self.strong_count())
            .finish_non_exhaustive()
    }
}
