// Stowage - stowage
// Module: BoundedStack - Inline-storage LIFO stack
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for MaybeUninit operations (documented and verified via KANI)
#![allow(unsafe_code)]

//! LIFO stack with inline storage and compile-time capacity.
//!
//! Live elements always occupy slots `0..len`, bottom to top, so the whole
//! stack can be viewed as one slice.

use core::fmt;
use core::hash::{Hash, Hasher};

use stowage_error::{Error, Result};

use crate::storage::SlotArray;

/// A LIFO stack with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Exactly the slots `0..len` are live
/// 3. The top element is at `len - 1` when `len > 0`
///
/// # Examples
///
/// ```
/// use stowage::collections::BoundedStack;
///
/// let mut stack = BoundedStack::<u32, 3>::new();
/// stack.push(1)?;
/// stack.push(2)?;
/// stack.push(3)?;
/// assert!(stack.push(4).is_err()); // Full
///
/// assert_eq!(stack.top(), Some(&3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.as_slice(), &[1, 2]);
/// # Ok::<(), stowage::Error>(())
/// ```
pub struct BoundedStack<T, const N: usize> {
    /// Inline storage for elements
    slots: SlotArray<T, N>,

    /// Number of live elements, also the index just past the top
    /// Invariant: len <= N
    len: usize,
}

impl<T, const N: usize> BoundedStack<T, N> {
    /// Creates a new empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: SlotArray::new(),
            len: 0,
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

    /// Returns `true` if the stack is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the stack is full.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the top element, or `None` if the stack is empty.
    #[inline]
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: len - 1 is live while len > 0
        Some(unsafe { self.slots.get(self.len - 1) })
    }

    /// Mutable counterpart of [`top`](Self::top).
    #[inline]
    #[must_use]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: len - 1 is live while len > 0
        Some(unsafe { self.slots.get_mut(self.len - 1) })
    }

    /// Pushes an element onto the stack.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if the stack is full. The stack is left
    /// unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<()> {
        self.emplace_with(|| value).map(|_| ())
    }

    /// Builds an element in place on top of the stack.
    ///
    /// `f` is only called once a free slot is confirmed.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if the stack is full; `f` is not called.
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T> {
        if self.is_full() {
            trace_event!(
                DEBUG,
                container = "BoundedStack",
                capacity = N,
                len = self.len,
                "push rejected: stack full"
            );
            return Err(Error::capacity_exceeded("BoundedStack capacity exceeded"));
        }

        Ok(self.append_with(f))
    }

    /// Removes and returns the top element.
    ///
    /// Returns `None` and leaves the stack untouched if it is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        // SAFETY: the old top slot was live and is now outside 0..len
        Some(unsafe { self.slots.take(self.len) })
    }

    /// Drops every element, top to bottom.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }

        enter_span!(clearing("BoundedStack", self.len));
        trace_event!(TRACE, container = "BoundedStack", dropped = self.len, "clearing stack");

        while self.len > 0 {
            self.len -= 1;
            // SAFETY: the old top slot was live and is now outside 0..len
            unsafe { self.slots.drop_in_place(self.len) };
        }
    }

    /// Returns the live elements, bottom to top.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: 0..len is live
        unsafe { self.slots.slice(0..self.len) }
    }

    /// Mutable counterpart of [`as_slice`](Self::as_slice).
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: 0..len is live
        unsafe { self.slots.slice_mut(0..self.len) }
    }

    /// Exchanges the entire contents of two stacks.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Replaces the contents of `self` with converted clones of the elements
    /// of `source`, bottom to top.
    ///
    /// # Errors
    ///
    /// Returns a capacity error, leaving `self` unchanged, if `source` holds
    /// more than `N` elements.
    pub fn copy_from<U, const M: usize>(&mut self, source: &BoundedStack<U, M>) -> Result<()>
    where
        U: Clone,
        T: From<U>,
    {
        if source.len() > N {
            trace_event!(
                DEBUG,
                container = "BoundedStack",
                capacity = N,
                len = source.len(),
                "copy rejected: source larger than capacity"
            );
            return Err(Error::copy_capacity_exceeded(
                "BoundedStack copy source exceeds capacity",
            ));
        }

        self.clear();
        self.extend_converted(source.as_slice());
        Ok(())
    }

    /// Appends converted clones of `items`.
    ///
    /// Callers guarantee `self.len + items.len() <= N`.
    fn extend_converted<U>(&mut self, items: &[U])
    where
        U: Clone,
        T: From<U>,
    {
        enter_span!(copying("BoundedStack", items.len()));

        for item in items {
            self.append_with(|| T::from(item.clone()));
        }
    }

    /// Writes the value built by `f` at `len`.
    ///
    /// Callers guarantee the stack is not full.
    #[inline]
    fn append_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        debug_assert!(self.len < N);

        let index = self.len;
        let value = f();
        self.len += 1;
        self.slots.write(index, value)
    }
}

// RAII: Automatic cleanup on drop
impl<T, const N: usize> Drop for BoundedStack<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Default for BoundedStack<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for BoundedStack<T, N> {
    fn clone(&self) -> Self {
        let mut stack = Self::new();
        stack.extend_converted(self.as_slice());
        stack
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_converted(source.as_slice());
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<BoundedStack<U, M>> for BoundedStack<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &BoundedStack<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for BoundedStack<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedStack<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Hash, const N: usize> Hash for BoundedStack<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
