//! Heap handles with manual allocation discipline.
//!
//! Both handles allocate through `std::alloc` with `Layout::new` and free
//! with `dealloc`, routing allocation failure through `handle_alloc_error`.
//! [`SharedBox`] adds a non-atomic shared reference count; [`UniqueBox`] is
//! plain move-only exclusive ownership.

pub mod shared;
pub mod unique;

pub use shared::SharedBox;
pub use unique::UniqueBox;

use core::alloc::Layout;
use core::ptr::{self, NonNull};
use std::alloc::{alloc, dealloc, handle_alloc_error};

/// Moves `value` into a fresh heap allocation and returns the raw pointer.
///
/// Zero-sized types get a dangling (but well-aligned, non-null) pointer and
/// no real allocation, matching what `dealloc_value` expects.
pub(crate) fn alloc_value<T>(value: T) -> *mut T {
    let layout = Layout::new::<T>();
    let raw = if layout.size() == 0 {
        NonNull::dangling().as_ptr()
    } else {
        // SAFETY: layout has non-zero size.
        unsafe { alloc(layout).cast::<T>() }
    };

    if raw.is_null() {
        handle_alloc_error(layout);
    }

    // SAFETY: raw is non-null, properly aligned, and uniquely owned here.
    unsafe { ptr::write(raw, value) };
    raw
}

/// Drops the pointee in place and releases its allocation.
///
/// # Safety
/// - `raw` must have been produced by [`alloc_value`] and not yet freed.
/// - The pointee must still be initialized, and no reference to it may
///   outlive this call.
pub(crate) unsafe fn dealloc_value<T>(raw: *mut T) {
    // SAFETY: per contract, `raw` points at a live `T` we own.
    unsafe {
        ptr::drop_in_place(raw);
        let layout = Layout::new::<T>();
        if layout.size() != 0 {
            dealloc(raw.cast::<u8>(), layout);
        }
    }
}
