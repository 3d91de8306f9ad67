// Stowage - stowage
// Module: RingQueue - Inline-storage circular FIFO queue
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for MaybeUninit operations (documented and verified via KANI)
#![allow(unsafe_code)]

//! Circular FIFO queue with inline storage and compile-time capacity.
//!
//! `RingQueue<T, N, B>` keeps up to `N` elements in a [`SlotArray`] and
//! tracks the live range with a head index and a length. What happens on a
//! push into a full queue is chosen by the behavior parameter `B`:
//! [`Reject`] (the default) or [`Overwrite`].
//!
//! # Characteristics
//!
//! - **Zero allocation**: All memory is inline
//! - **Const-time operations**: `push()`, `pop()`, `front()`, `back()` are O(1)
//! - **Circular buffer**: Wraparound by compare-and-reset, no division
//! - **RAII cleanup**: Live elements are dropped exactly once

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use stowage_error::{Error, Result};

use crate::behavior::{Behavior, Overwrite, Reject};
use crate::storage::SlotArray;

/// A FIFO queue with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. `head < N` always holds
/// 3. Exactly the slots `head, head + 1, .., head + len - 1` (mod N) are live
/// 4. The back element is at `(head + len - 1) mod N` when `len > 0`
///
/// # Examples
///
/// ```
/// use stowage::collections::RingQueue;
///
/// let mut queue = RingQueue::<u32, 4>::new();
/// queue.push(1)?;
/// queue.push(2)?;
/// queue.push(3)?;
///
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.back(), Some(&3));
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.len(), 2);
/// # Ok::<(), stowage::Error>(())
/// ```
///
/// A zero capacity is rejected when the queue is built:
///
/// ```compile_fail
/// use stowage::collections::RingQueue;
///
/// let queue = RingQueue::<u32, 0>::new();
/// ```
pub struct RingQueue<T, const N: usize, B: Behavior = Reject> {
    /// Inline storage for elements (circular buffer)
    slots: SlotArray<T, N>,

    /// Index of the oldest element
    head: usize,

    /// Number of live elements
    /// Invariant: len <= N
    len: usize,

    _behavior: PhantomData<B>,
}

impl<T, const N: usize, B: Behavior> RingQueue<T, N, B> {
    /// Creates a new empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: SlotArray::new(),
            head: 0,
            len: 0,
            _behavior: PhantomData,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub const fn available(&self) -> usize {
        N - self.len
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the queue is full.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the oldest element, or `None` if the queue is empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: head is live while len > 0
        Some(unsafe { self.slots.get(self.head) })
    }

    /// Mutable counterpart of [`front`](Self::front).
    #[inline]
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: head is live while len > 0
        Some(unsafe { self.slots.get_mut(self.head) })
    }

    /// Returns the newest element, or `None` if the queue is empty.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: the last slot of the live range is live while len > 0
        Some(unsafe { self.slots.get(Self::wrap(self.head + self.len - 1)) })
    }

    /// Mutable counterpart of [`back`](Self::back).
    #[inline]
    #[must_use]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        let index = Self::wrap(self.head + self.len - 1);
        // SAFETY: the last slot of the live range is live while len > 0
        Some(unsafe { self.slots.get_mut(index) })
    }

    /// Removes and returns the oldest element.
    ///
    /// Returns `None` and leaves the queue untouched if it is empty.
    ///
    /// ```
    /// use stowage::collections::RingQueue;
    ///
    /// let mut queue = RingQueue::<u32, 10>::new();
    /// queue.push(1)?;
    /// queue.push(2)?;
    ///
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.pop(), Some(2));
    /// assert_eq!(queue.pop(), None);
    /// # Ok::<(), stowage::Error>(())
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let index = self.head;
        self.head = Self::next(index);
        self.len -= 1;

        // SAFETY: index was the live front slot; the bookkeeping above
        // already marks it dead
        Some(unsafe { self.slots.take(index) })
    }

    /// Drops every element, front to back.
    ///
    /// # Time Complexity
    ///
    /// O(n) where n = len.
    pub fn clear(&mut self) {
        if self.is_empty() {
            self.head = 0;
            return;
        }

        enter_span!(clearing("RingQueue", self.len));
        trace_event!(TRACE, container = "RingQueue", dropped = self.len, "clearing queue");

        while self.len > 0 {
            let index = self.head;
            self.head = Self::next(index);
            self.len -= 1;

            // SAFETY: index was the live front slot and is now outside the
            // live range
            unsafe { self.slots.drop_in_place(index) };
        }

        self.head = 0;
    }

    /// Returns the live elements as two slices, front to back: the part up
    /// to the end of the storage, then the part that wrapped around.
    ///
    /// ```
    /// use stowage::collections::RingQueue;
    ///
    /// let mut queue = RingQueue::<u32, 3>::new();
    /// queue.push(1)?;
    /// queue.push(2)?;
    /// queue.push(3)?;
    /// queue.pop();
    /// queue.push(4)?;
    ///
    /// assert_eq!(queue.as_slices(), (&[2, 3][..], &[4][..]));
    /// # Ok::<(), stowage::Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        // SAFETY: head < N, len <= N, and the circular range is live
        unsafe { self.slots.wrapped(self.head, self.len) }
    }

    /// Mutable counterpart of [`as_slices`](Self::as_slices).
    #[inline]
    #[must_use]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        // SAFETY: head < N, len <= N, and the circular range is live
        unsafe { self.slots.wrapped_mut(self.head, self.len) }
    }

    /// Exchanges the entire contents of two queues.
    ///
    /// Storage and indices are moved as one block; no element is touched
    /// individually.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Replaces the contents of `self` with converted clones of the elements
    /// of `source`, in front-to-back order.
    ///
    /// The source may have a different element type, capacity or behavior.
    /// The copy is stored starting at slot 0 regardless of where the source
    /// keeps its elements.
    ///
    /// # Errors
    ///
    /// Returns a capacity error, leaving `self` unchanged, if `source` holds
    /// more than `N` elements.
    pub fn copy_from<U, const M: usize, C>(&mut self, source: &RingQueue<U, M, C>) -> Result<()>
    where
        U: Clone,
        T: From<U>,
        C: Behavior,
    {
        if source.len() > N {
            trace_event!(
                DEBUG,
                container = "RingQueue",
                capacity = N,
                len = source.len(),
                "copy rejected: source larger than capacity"
            );
            return Err(Error::copy_capacity_exceeded(
                "RingQueue copy source exceeds capacity",
            ));
        }

        self.clear();
        self.extend_converted(source);
        Ok(())
    }

    /// Appends converted clones of every element of `source`.
    ///
    /// Callers guarantee `self.len + source.len() <= N`.
    fn extend_converted<U, const M: usize, C>(&mut self, source: &RingQueue<U, M, C>)
    where
        U: Clone,
        T: From<U>,
        C: Behavior,
    {
        enter_span!(copying("RingQueue", source.len()));

        let (first, second) = source.as_slices();
        for item in first.iter().chain(second) {
            self.append_with(|| T::from(item.clone()));
        }
    }

    /// Writes the value built by `f` behind the newest element.
    ///
    /// `f` runs before any bookkeeping changes, so a panic inside it leaves
    /// the queue as it was. Callers guarantee the queue is not full.
    #[inline]
    fn append_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        debug_assert!(self.len < N);

        let index = Self::wrap(self.head + self.len);
        let value = f();
        self.len += 1;
        self.slots.write(index, value)
    }

    /// Advances an index by one slot, wrapping from `N - 1` to 0.
    #[inline]
    const fn next(index: usize) -> usize {
        if index == N - 1 { 0 } else { index + 1 }
    }

    /// Reduces `head + offset` (always `< 2N`) into `0..N`.
    #[inline]
    const fn wrap(index: usize) -> usize {
        if index >= N { index - N } else { index }
    }
}

impl<T, const N: usize> RingQueue<T, N, Reject> {
    /// Pushes an element to the back of the queue.
    ///
    /// # Const-time Guarantee
    ///
    /// O(1), one compare for wraparound.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if the queue is full. The queue is left
    /// unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use stowage::collections::RingQueue;
    ///
    /// let mut queue = RingQueue::<u32, 3>::new();
    /// queue.push(1)?;
    /// queue.push(2)?;
    /// queue.push(3)?;
    /// assert!(queue.push(4).is_err()); // Full
    /// # Ok::<(), stowage::Error>(())
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Result<()> {
        self.emplace_with(|| value).map(|_| ())
    }

    /// Builds an element in place at the back of the queue.
    ///
    /// `f` is only called once a free slot is confirmed.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if the queue is full; `f` is not called.
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T> {
        if self.is_full() {
            trace_event!(
                DEBUG,
                container = "RingQueue",
                capacity = N,
                len = self.len,
                "push rejected: queue full"
            );
            return Err(Error::capacity_exceeded("RingQueue capacity exceeded"));
        }

        Ok(self.append_with(f))
    }
}

impl<T, const N: usize> RingQueue<T, N, Overwrite> {
    /// Pushes an element to the back of the queue, evicting the oldest
    /// element if the queue is full.
    ///
    /// Returns the evicted element, if any.
    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        self.emplace_with(|| value).0
    }

    /// Builds an element in place at the back of the queue, evicting the
    /// oldest element first if the queue is full.
    ///
    /// Returns the evicted element, if any, and a reference to the new back
    /// element.
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, f: F) -> (Option<T>, &mut T) {
        let evicted = if self.is_full() {
            trace_event!(
                TRACE,
                container = "RingQueue",
                capacity = N,
                behavior = Overwrite::NAME,
                "evicting oldest element"
            );
            self.pop()
        } else {
            None
        };

        (evicted, self.append_with(f))
    }
}

// RAII: Automatic cleanup on drop
impl<T, const N: usize, B: Behavior> Drop for RingQueue<T, N, B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize, B: Behavior> Default for RingQueue<T, N, B> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Re-linearizes: the clone keeps its elements from slot 0 onward.
impl<T: Clone, const N: usize, B: Behavior> Clone for RingQueue<T, N, B> {
    fn clone(&self) -> Self {
        let mut queue = Self::new();
        queue.extend_converted(self);
        queue
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_converted(source);
    }
}

impl<T, U, const N: usize, const M: usize, B, C> PartialEq<RingQueue<U, M, C>>
    for RingQueue<T, N, B>
where
    T: PartialEq<U>,
    B: Behavior,
    C: Behavior,
{
    fn eq(&self, other: &RingQueue<U, M, C>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let (a_first, a_second) = self.as_slices();
        let (b_first, b_second) = other.as_slices();
        a_first
            .iter()
            .chain(a_second)
            .zip(b_first.iter().chain(b_second))
            .all(|(a, b)| a == b)
    }
}

impl<T: Eq, const N: usize, B: Behavior> Eq for RingQueue<T, N, B> {}

impl<T: fmt::Debug, const N: usize, B: Behavior> fmt::Debug for RingQueue<T, N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.as_slices();
        f.debug_list().entries(first.iter().chain(second)).finish()
    }
}

// Hash implementation for use in hash-based collections
impl<T: Hash, const N: usize, B: Behavior> Hash for RingQueue<T, N, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        let (first, second) = self.as_slices();
        for item in first.iter().chain(second) {
            item.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[test]
    fn test_new() {
        let queue: RingQueue<u32, 10> = RingQueue::new();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 10);
        assert_eq!(queue.available(), 10);
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
    }

    #[test]
    fn test_push_pop_fifo() -> Result<()> {
        let mut queue = RingQueue::<u32, 5>::new();

        queue.push(1)?;
        queue.push(2)?;
        queue.push(3)?;

        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), None);

        Ok(())
    }

    #[test]
    fn test_front_and_back_track_ends() -> Result<()> {
        let mut queue = RingQueue::<u32, 3>::new();
        queue.push(10)?;
        assert_eq!((queue.front(), queue.back()), (Some(&10), Some(&10)));

        queue.push(20)?;
        queue.push(30)?;
        assert_eq!((queue.front(), queue.back()), (Some(&10), Some(&30)));

        if let Some(back) = queue.back_mut() {
            *back += 1;
        }
        if let Some(front) = queue.front_mut() {
            *front += 1;
        }
        assert_eq!(queue.pop(), Some(11));
        assert_eq!(queue.back(), Some(&31));

        Ok(())
    }

    #[test]
    fn test_circular_buffer() -> Result<()> {
        let mut queue = RingQueue::<u32, 3>::new();

        // Fill
        queue.push(1)?;
        queue.push(2)?;
        queue.push(3)?;

        // Pop 2
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));

        // Push 2 more (wraparound)
        queue.push(4)?;
        queue.push(5)?;
        assert_eq!(queue.back(), Some(&5));

        // Verify order
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(4));
        assert_eq!(queue.pop(), Some(5));

        Ok(())
    }

    #[test]
    fn test_capacity_exceeded_leaves_queue_unchanged() -> Result<()> {
        let mut queue = RingQueue::<u32, 2>::new();
        queue.push(1)?;
        queue.push(2)?;

        let err = queue.push(3);
        assert!(err.is_err_and(|e| e.is_capacity_error()));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.as_slices(), (&[1, 2][..], &[][..]));

        Ok(())
    }

    #[test]
    fn test_emplace_with_skips_closure_when_full() -> Result<()> {
        let calls = Cell::new(0);
        let mut queue = RingQueue::<u32, 1>::new();

        let slot = queue.emplace_with(|| {
            calls.set(calls.get() + 1);
            7
        })?;
        *slot += 1;

        let rejected = queue.emplace_with(|| {
            calls.set(calls.get() + 1);
            9
        });
        assert!(rejected.is_err());
        assert_eq!(calls.get(), 1);
        assert_eq!(queue.front(), Some(&8));

        Ok(())
    }

    #[test]
    fn test_overwrite_evicts_oldest() {
        let mut queue = RingQueue::<u32, 3, Overwrite>::new();
        for value in 1..=3 {
            assert_eq!(queue.push(value), None);
        }

        assert_eq!(queue.push(4), Some(1));
        assert_eq!(queue.push(5), Some(2));
        assert_eq!(queue.len(), 3);

        let (evicted, back) = queue.emplace_with(|| 6);
        assert_eq!(evicted, Some(3));
        assert_eq!(*back, 6);

        assert_eq!(queue.pop(), Some(4));
        assert_eq!(queue.pop(), Some(5));
        assert_eq!(queue.pop(), Some(6));
    }

    #[test]
    fn test_clear() -> Result<()> {
        let mut queue = RingQueue::<u32, 4>::new();
        queue.push(1)?;
        queue.push(2)?;
        queue.pop();
        queue.push(3)?;

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.front(), None);

        queue.push(9)?;
        assert_eq!(queue.as_slices(), (&[9][..], &[][..]));

        Ok(())
    }

    #[test]
    fn test_clone_relinearizes() -> Result<()> {
        let mut queue = RingQueue::<u32, 3>::new();
        queue.push(1)?;
        queue.push(2)?;
        queue.push(3)?;
        queue.pop();
        queue.push(4)?;
        assert_eq!(queue.as_slices(), (&[2, 3][..], &[4][..]));

        let mut copy = queue.clone();
        assert_eq!(copy.as_slices(), (&[2, 3, 4][..], &[][..]));
        assert_eq!(copy, queue);

        if let Some(front) = copy.front_mut() {
            *front = 20;
        }
        assert_eq!(queue.front(), Some(&2));
        assert_ne!(copy, queue);

        Ok(())
    }

    #[test]
    fn test_clone_from_replaces_contents() -> Result<()> {
        let mut source = RingQueue::<u32, 4>::new();
        source.push(5)?;
        source.push(6)?;

        let mut target = RingQueue::<u32, 4>::new();
        target.push(1)?;
        target.push(2)?;
        target.push(3)?;

        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.len(), 2);

        Ok(())
    }

    #[test]
    fn test_copy_from_converts_and_checks_capacity() -> Result<()> {
        let mut narrow = RingQueue::<u8, 4>::new();
        narrow.push(1)?;
        narrow.push(2)?;
        narrow.push(3)?;

        let mut wide = RingQueue::<u32, 3>::new();
        wide.push(99)?;
        wide.copy_from(&narrow)?;
        assert_eq!(wide.as_slices(), (&[1, 2, 3][..], &[][..]));

        narrow.push(4)?;
        let mut small = RingQueue::<u32, 3>::new();
        small.push(42)?;
        let err = small.copy_from(&narrow);
        assert!(err.is_err_and(|e| e.is_capacity_error()));
        assert_eq!(small.front(), Some(&42));
        assert_eq!(small.len(), 1);

        Ok(())
    }

    #[test]
    fn test_equality_respects_order_and_length() -> Result<()> {
        let mut a = RingQueue::<u32, 4>::new();
        let mut b = RingQueue::<u32, 6, Overwrite>::new();
        a.push(1)?;
        a.push(2)?;
        b.push(1);
        assert_ne!(a, b);

        b.push(2);
        assert_eq!(a, b);

        let mut c = RingQueue::<u32, 4>::new();
        c.push(2)?;
        c.push(1)?;
        assert_ne!(a, c);

        Ok(())
    }

    #[test]
    fn test_swap() -> Result<()> {
        let mut a = RingQueue::<u32, 3>::new();
        let mut b = RingQueue::<u32, 3>::new();
        a.push(1)?;
        a.push(2)?;
        b.push(9)?;

        a.swap(&mut b);
        assert_eq!(a.as_slices(), (&[9][..], &[][..]));
        assert_eq!(b.as_slices(), (&[1, 2][..], &[][..]));

        Ok(())
    }

    #[test]
    fn test_as_mut_slices_across_wrap() -> Result<()> {
        let mut queue = RingQueue::<u32, 3>::new();
        queue.push(1)?;
        queue.push(2)?;
        queue.pop();
        queue.push(3)?;
        queue.push(4)?;

        let (first, second) = queue.as_mut_slices();
        for item in first.iter_mut().chain(second.iter_mut()) {
            *item *= 10;
        }
        assert_eq!(queue.pop(), Some(20));
        assert_eq!(queue.pop(), Some(30));
        assert_eq!(queue.pop(), Some(40));

        Ok(())
    }

    #[test]
    fn test_index_helpers() {
        assert_eq!(RingQueue::<u8, 3, Reject>::next(0), 1);
        assert_eq!(RingQueue::<u8, 3, Reject>::next(2), 0);
        assert_eq!(RingQueue::<u8, 1, Reject>::next(0), 0);
        assert_eq!(RingQueue::<u8, 3, Reject>::wrap(4), 1);
        assert_eq!(RingQueue::<u8, 3, Reject>::wrap(2), 2);
    }
}
