// Stowage - stowage
// Module: SlotArray - Uninitialized inline slot storage
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for MaybeUninit operations (documented and verified via KANI)
#![allow(unsafe_code)]

//! Raw slot storage shared by the queue and the stack.
//!
//! `SlotArray<T, N>` is `N` cells of `MaybeUninit<T>`. It never constructs or
//! drops an element on its own: which slots hold a live value is recorded
//! solely by the owning container, and every method that reads a slot is
//! `unsafe` with the liveness requirement spelled out.
//!
//! # Characteristics
//!
//! - **Zero allocation**: All memory is inline `[MaybeUninit<T>; N]`
//! - **No implicit lifetime management**: no `Clone`, no `Copy`, no `Drop`
//! - **Compile-time capacity check**: `N == 0` fails to build

use core::fmt;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ops::Range;
use core::slice;

/// Compile-time rejection of zero-capacity containers.
///
/// Referencing [`NonZeroCapacity::OK`] from a constructor turns `N == 0` into
/// a build error at the point the container type is instantiated.
pub(crate) struct NonZeroCapacity<const N: usize>;

impl<const N: usize> NonZeroCapacity<N> {
    pub(crate) const OK: () = assert!(N > 0, "container capacity cannot be zero");
}

/// Inline storage for `N` values of `T`, none of which is initialized until
/// written.
///
/// # Invariants
///
/// 1. A slot is live only between a [`write`](Self::write) and the matching
///    [`take`](Self::take) or [`drop_in_place`](Self::drop_in_place)
/// 2. Liveness is tracked by the owner, never by the array
/// 3. Dropping a `SlotArray` never drops any element
pub struct SlotArray<T, const N: usize> {
    /// Inline storage for elements
    slots: [MaybeUninit<T>; N],

    /// Marker for drop checker
    _marker: PhantomData<T>,
}

impl<T, const N: usize> SlotArray<T, N> {
    /// Creates an array with every slot uninitialized.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        let () = NonZeroCapacity::<N>::OK;

        Self {
            slots: [const { MaybeUninit::uninit() }; N],
            _marker: PhantomData,
        }
    }

    /// Returns the number of slots.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Moves `value` into the slot at `index` and returns a reference to it.
    ///
    /// The slot is expected to be dead. Writing over a live slot does not
    /// drop the previous value; it is leaked.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn write(&mut self, index: usize, value: T) -> &mut T {
        self.slots[index].write(value)
    }

    /// Returns a reference to the value in the slot at `index`.
    ///
    /// # Safety
    ///
    /// The slot at `index` must be live.
    #[inline]
    #[must_use]
    pub unsafe fn get(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees the slot is live
        unsafe { self.slots[index].assume_init_ref() }
    }

    /// Returns a mutable reference to the value in the slot at `index`.
    ///
    /// # Safety
    ///
    /// The slot at `index` must be live.
    #[inline]
    #[must_use]
    pub unsafe fn get_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees the slot is live
        unsafe { self.slots[index].assume_init_mut() }
    }

    /// Moves the value out of the slot at `index`, leaving the slot dead.
    ///
    /// # Safety
    ///
    /// The slot at `index` must be live, and the caller must treat it as dead
    /// afterwards.
    #[inline]
    pub unsafe fn take(&mut self, index: usize) -> T {
        // SAFETY: the caller guarantees the slot is live and will not be read
        // again before being rewritten
        unsafe { self.slots[index].assume_init_read() }
    }

    /// Drops the value in the slot at `index`, leaving the slot dead.
    ///
    /// # Safety
    ///
    /// The slot at `index` must be live, and the caller must treat it as dead
    /// afterwards.
    #[inline]
    pub unsafe fn drop_in_place(&mut self, index: usize) {
        // SAFETY: the caller guarantees the slot is live and will not be read
        // again before being rewritten
        unsafe { self.slots[index].assume_init_drop() }
    }

    /// Views the slots in `range` as initialized elements.
    ///
    /// # Safety
    ///
    /// Every slot in `range` must be live.
    #[inline]
    #[must_use]
    pub unsafe fn slice(&self, range: Range<usize>) -> &[T] {
        let cells = &self.slots[range];
        // SAFETY: MaybeUninit<T> has the layout of T and the caller
        // guarantees every cell in the range is initialized
        unsafe { slice::from_raw_parts(cells.as_ptr().cast::<T>(), cells.len()) }
    }

    /// Mutable counterpart of [`slice`](Self::slice).
    ///
    /// # Safety
    ///
    /// Every slot in `range` must be live.
    #[inline]
    #[must_use]
    pub unsafe fn slice_mut(&mut self, range: Range<usize>) -> &mut [T] {
        let cells = &mut self.slots[range];
        // SAFETY: as for `slice`, and the borrow of `self` is exclusive
        unsafe { slice::from_raw_parts_mut(cells.as_mut_ptr().cast::<T>(), cells.len()) }
    }

    /// Views the circular range of `len` slots starting at `start` as two
    /// slices: `start..` up to the end of the array, then the part that
    /// wrapped around to index 0.
    ///
    /// # Safety
    ///
    /// `start < N`, `len <= N`, and every slot in the circular range must be
    /// live.
    #[inline]
    #[must_use]
    pub unsafe fn wrapped(&self, start: usize, len: usize) -> (&[T], &[T]) {
        let (first, second) = split_circular::<N>(start, len);
        // SAFETY: both ranges lie inside the live circular range
        unsafe { (self.slice(first), self.slice(second)) }
    }

    /// Mutable counterpart of [`wrapped`](Self::wrapped).
    ///
    /// # Safety
    ///
    /// Same as [`wrapped`](Self::wrapped).
    #[inline]
    #[must_use]
    pub unsafe fn wrapped_mut(&mut self, start: usize, len: usize) -> (&mut [T], &mut [T]) {
        let (first, second) = split_circular::<N>(start, len);
        // The wrapped part ends at or before `start`, so the two ranges are
        // disjoint halves of one split.
        let (low, high) = self.slots.split_at_mut(start);
        let high = &mut high[..first.end - first.start];
        let low = &mut low[second];
        // SAFETY: both ranges lie inside the live circular range and do not
        // overlap
        unsafe {
            (
                slice::from_raw_parts_mut(high.as_mut_ptr().cast::<T>(), high.len()),
                slice::from_raw_parts_mut(low.as_mut_ptr().cast::<T>(), low.len()),
            )
        }
    }
}

/// Splits the circular range `[start, start + len)` over `0..N` into its
/// unwrapped and wrapped parts.
#[inline]
fn split_circular<const N: usize>(start: usize, len: usize) -> (Range<usize>, Range<usize>) {
    let room = N - start;
    if len <= room {
        (start..start + len, 0..0)
    } else {
        (start..N, 0..len - room)
    }
}

impl<T, const N: usize> Default for SlotArray<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for SlotArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotArray").field("capacity", &N).finish_non_exhaustive()
    }
}
