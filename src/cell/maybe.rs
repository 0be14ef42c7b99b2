//! `Maybe` - an inline optional container with explicit presence tracking.
//!
//! Holds zero or one `T` directly in place (`MaybeUninit<T>` plus a flag);
//! all low-level `MaybeUninit`/pointer operations are centralized through
//! `cell::raw::slot`.

use core::mem::{self, MaybeUninit};

use crate::cell::raw::slot;
use crate::error::AccessError;

/// An inline container holding zero or one value of `T`.
///
/// Invariant: `engaged` is `true` iff the slot currently holds a live,
/// constructed `T`. No access to the slot is valid unless the flag is true.
///
/// The container exclusively owns its value: no external reference to the
/// contained `T` survives a [`reset`](Maybe::reset) or the container's drop.
pub struct Maybe<T> {
    slot: MaybeUninit<T>,
    engaged: bool,
}

impl<T> Maybe<T> {
    /// Creates an empty container.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            slot: MaybeUninit::uninit(),
            engaged: false,
        }
    }

    /// Creates a container holding `value`.
    #[inline]
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            slot: MaybeUninit::new(value),
            engaged: true,
        }
    }

    /// Returns `true` if the container currently holds a value.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.engaged
    }

    /// Drops the contained value, if any, and marks the container empty.
    ///
    /// Idempotent: resetting an already-empty container does nothing.
    #[inline]
    pub fn reset(&mut self) {
        if self.engaged {
            self.engaged = false;
            // SAFETY: the flag said the slot was initialized, and we lowered
            // it first so the value cannot be dropped twice.
            unsafe { slot::drop_in_place(&mut self.slot) };
        }
    }

    /// Assigns `value` into the container.
    ///
    /// When a value is already present the new one is assigned into the
    /// existing storage; otherwise the storage is freshly constructed.
    #[inline]
    pub fn set(&mut self, value: T) {
        if self.engaged {
            // SAFETY: flag is set, slot is initialized.
            unsafe { *slot::assume_init_mut(&mut self.slot) = value };
        } else {
            self.construct(value);
        }
    }

    /// Resets the container, then stores `value`, returning a reference to it.
    ///
    /// The reset completes fully before the new value is stored; a caller
    /// never observes a partially-constructed state.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.reset();
        self.construct(value);
        // SAFETY: `construct` just initialized the slot.
        unsafe { slot::assume_init_mut(&mut self.slot) }
    }

    /// Resets the container, then stores the value produced by `init`.
    ///
    /// If `init` panics, the container is left observably empty: the reset
    /// has already completed and the presence flag is only raised after
    /// `init` returns.
    #[inline]
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        self.construct(init());
        // SAFETY: `construct` just initialized the slot.
        unsafe { slot::assume_init_mut(&mut self.slot) }
    }

    /// Returns a reference to the contained value.
    ///
    /// # Panics
    /// Panics if the container is empty.
    #[inline]
    pub fn get(&self) -> &T {
        match self.try_get() {
            Ok(value) => value,
            Err(_) => panic!("accessed an empty Maybe"),
        }
    }

    /// Returns a mutable reference to the contained value.
    ///
    /// # Panics
    /// Panics if the container is empty.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        match self.try_get_mut() {
            Ok(value) => value,
            Err(_) => panic!("accessed an empty Maybe"),
        }
    }

    /// Returns a reference to the contained value, or [`AccessError`] if the
    /// container is empty.
    ///
    /// # Errors
    /// Returns [`AccessError`] when no value is present.
    #[inline]
    pub fn try_get(&self) -> Result<&T, AccessError> {
        if self.engaged {
            // SAFETY: flag is set, slot is initialized.
            Ok(unsafe { slot::assume_init_ref(&self.slot) })
        } else {
            Err(AccessError)
        }
    }

    /// Returns a mutable reference to the contained value, or
    /// [`AccessError`] if the container is empty.
    ///
    /// # Errors
    /// Returns [`AccessError`] when no value is present.
    #[inline]
    pub fn try_get_mut(&mut self) -> Result<&mut T, AccessError> {
        if self.engaged {
            // SAFETY: flag is set, slot is initialized.
            Ok(unsafe { slot::assume_init_mut(&mut self.slot) })
        } else {
            Err(AccessError)
        }
    }

    /// Returns a reference to the contained value, or `None` if empty.
    ///
    /// The non-failing counterpart of [`get`](Maybe::get).
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        self.try_get().ok()
    }

    /// Returns a mutable reference to the contained value, or `None` if empty.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.try_get_mut().ok()
    }

    /// Moves the contained value (and presence) out, leaving `self` empty.
    ///
    /// The strict single-owner transfer: after this call the source is
    /// observably empty, not merely "moved-from".
    #[inline]
    pub fn take(&mut self) -> Maybe<T> {
        if self.engaged {
            self.engaged = false;
            // SAFETY: flag was set and has been lowered; the value is read
            // out exactly once.
            Maybe::new(unsafe { slot::read(&self.slot) })
        } else {
            Maybe::empty()
        }
    }

    /// Consumes the container, returning the contained value.
    ///
    /// # Errors
    /// Returns [`AccessError`] when no value is present.
    #[inline]
    pub fn try_into_inner(mut self) -> Result<T, AccessError> {
        if self.engaged {
            self.engaged = false;
            // SAFETY: flag was set and has been lowered, so the drop glue
            // that runs when `self` goes out of scope will not touch the slot.
            Ok(unsafe { slot::read(&self.slot) })
        } else {
            Err(AccessError)
        }
    }

    /// Consumes the container, returning the contained value or `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.try_into_inner().ok()
    }

    /// Consumes the container, returning the contained value if present and
    /// `default` otherwise.
    #[inline]
    pub fn into_value_or(self, default: T) -> T {
        self.try_into_inner().unwrap_or(default)
    }

    #[inline]
    fn construct(&mut self, value: T) {
        slot::write(&mut self.slot, value);
        self.engaged = true;
    }
}

impl<T: Clone> Maybe<T> {
    /// Returns a clone of the contained value if present and `default`
    /// otherwise, without mutating the container.
    #[inline]
    pub fn value_or(&self, default: T) -> T {
        match self.try_get() {
            Ok(value) => value.clone(),
            Err(_) => default,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::empty(),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: Clone> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        match self.try_get() {
            Ok(value) => Self::new(value.clone()),
            Err(_) => Self::empty(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match source.as_ref() {
            // Both sides populated: assign into the existing storage.
            Some(src) if self.engaged => {
                // SAFETY: flag is set, slot is initialized.
                unsafe { slot::assume_init_mut(&mut self.slot) }.clone_from(src);
            }
            Some(src) => self.construct(src.clone()),
            None => self.reset(),
        }
    }
}

impl<T> Drop for Maybe<T> {
    fn drop(&mut self) {
        // The branch const-folds away for trivially droppable `T`.
        if mem::needs_drop::<T>() && self.engaged {
            // SAFETY: in drop, we have exclusive access and the flag says
            // the slot is initialized.
            unsafe { slot::drop_in_place(&mut self.slot) };
        }
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_ref(), other.as_ref()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_ref() {
            Some(value) => f.debug_tuple("Maybe").field(value).finish(),
            None => f.write_str("Maybe(<empty>)"),
        }
    }
}
