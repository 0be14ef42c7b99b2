//! `UniqueBox` - move-only exclusive ownership of one heap value.

use core::ops::{Deref, DerefMut};
use core::ptr;

use crate::alloc::{alloc_value, dealloc_value};
use crate::error::AccessError;

/// An exclusively owned heap handle.
///
/// Null pointer iff empty. There is no `Clone`: ownership only ever moves.
pub struct UniqueBox<T> {
    ptr: *mut T,
}

impl<T> UniqueBox<T> {
    /// Creates an empty handle owning nothing.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
        }
    }

    /// Moves `value` to the heap under exclusive ownership.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            ptr: alloc_value(value),
        }
    }

    /// Returns `true` if the handle currently owns a value.
    #[inline]
    pub fn has_value(&self) -> bool {
        !self.ptr.is_null()
    }

    /// Drops and frees the owned value, if any. Idempotent.
    #[inline]
    pub fn reset(&mut self) {
        if !self.ptr.is_null() {
            // SAFETY: non-null means we own a live allocation; the pointer
            // is nulled in the same step so a later reset is a no-op.
            unsafe { dealloc_value(self.ptr) };
            self.ptr = ptr::null_mut();
        }
    }

    /// Resets the handle, then takes ownership of a fresh heap `value`.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.reset();
        self.ptr = alloc_value(value);
    }

    /// Transfers ownership out of `self`, leaving it empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        let moved = Self { ptr: self.ptr };
        self.ptr = ptr::null_mut();
        moved
    }

    /// Consumes the handle, moving the owned value out (freeing the
    /// allocation), or `None` if the handle was empty.
    pub fn into_inner(mut self) -> Option<T> {
        if self.ptr.is_null() {
            return None;
        }
        // SAFETY: we own the allocation; the value is read out exactly once
        // and the pointer nulled before `self` drops.
        unsafe {
            let value = ptr::read(self.ptr);
            let layout = core::alloc::Layout::new::<T>();
            if layout.size() != 0 {
                std::alloc::dealloc(self.ptr.cast::<u8>(), layout);
            }
            self.ptr = ptr::null_mut();
            Some(value)
        }
    }

    /// Returns a reference to the owned value, or `None` if empty.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        self.try_get().ok()
    }

    /// Returns a mutable reference to the owned value, or `None` if empty.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        if self.ptr.is_null() {
            None
        } else {
            // SAFETY: exclusive ownership plus `&mut self`.
            Some(unsafe { &mut *self.ptr })
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
            Err(_) => panic!("accessed an empty UniqueBox"),
        }
    }

    /// Returns a mutable reference to the owned value.
    ///
    /// # Panics
    /// Panics if the handle is empty.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        match self.as_mut() {
            Some(value) => value,
            None => panic!("accessed an empty UniqueBox"),
        }
    }

    /// Returns a reference to the owned value, or [`AccessError`] if the
    /// handle is empty.
    ///
    /// # Errors
    /// Returns [`AccessError`] when the handle owns nothing.
    #[inline]
    pub fn try_get(&self) -> Result<&T, AccessError> {
        if self.ptr.is_null() {
            Err(AccessError)
        } else {
            // SAFETY: non-null means the pointee is alive.
            Ok(unsafe { &*self.ptr })
        }
    }
}

impl<T> Default for UniqueBox<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<T>> for UniqueBox<T> {
    /// Adopts an existing heap allocation.
    fn from(boxed: Box<T>) -> Self {
        Self {
            ptr: Box::into_raw(boxed),
        }
    }
}

impl<T> Drop for UniqueBox<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Deref for UniqueBox<T> {
    type Target = T;

    /// # Panics
    /// Panics if the handle is empty.
    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<T> DerefMut for UniqueBox<T> {
    /// # Panics
    /// Panics if the handle is empty.
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.get_mut()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for UniqueBox<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_ref() {
            Some(value) => f.debug_tuple("UniqueBox").field(value).finish(),
            None => f.write_str("UniqueBox(<empty>)"),
        }
    }
}
