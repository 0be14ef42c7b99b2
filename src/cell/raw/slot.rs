//! Unsafe, centralized operations on `MaybeUninit<T>` slots.
//!
//! The inline containers store values as `MaybeUninit<T>` next to their own
//! presence state. These helpers provide a single place to audit:
//! - reads (`ptr::read`)
//! - writes (`MaybeUninit::write`)
//! - drops (`drop_in_place`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! For all callers in this crate, the slot is initialized *exactly when* the
//! owning container's presence flag is set. The flag is raised only after a
//! write completes and lowered before (or as part of) a read or drop.
//!
//! Callers must additionally ensure they uphold aliasing rules for any
//! produced references.

use core::{mem::MaybeUninit, ptr};

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
/// - The returned `&mut T` must be exclusive for its lifetime (guaranteed
///   already by taking `&mut MaybeUninit<T>`).
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized and exclusive.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves an initialized value out of a slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The caller must lower the owning presence flag so the value is not
///   dropped or read a second time.
#[inline(always)]
pub(crate) unsafe fn read<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization + `ptr::read` contract.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Writes a value into a slot, overwriting the prior bytes without dropping
/// them. If the slot held an initialized value that was not moved out first,
/// that value leaks; callers pair this with `read` or `drop_in_place`.
#[inline(always)]
pub(crate) fn write<T>(slot: &mut MaybeUninit<T>, value: T) {
    slot.write(value);
}

/// Drops an initialized value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}
