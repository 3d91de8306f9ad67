// Stowage - stowage
// Module: FixedArray - Always-initialized fixed-size array
// SW-REQ-ID: REQ_RESOURCE_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-size array whose `N` elements are always live.
//!
//! Unlike the queue and the stack, `FixedArray` never holds dead slots, so it
//! is a thin wrapper around `[T; N]` adding fill, copy and cross-type
//! comparison helpers.

use core::ops::{Index, IndexMut, Range};

use stowage_error::{Error, Result};

use crate::storage::NonZeroCapacity;

/// An array of exactly `N` initialized elements.
///
/// # Examples
///
/// ```
/// use stowage::collections::FixedArray;
///
/// let mut array = FixedArray::<u8, 6>::new();
/// array.fill_range(1..4, 7)?;
/// array.fill_where(9, |index| index % 5 == 0);
///
/// assert_eq!(array.as_slice(), &[9, 7, 7, 7, 0, 9]);
/// # Ok::<(), stowage::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Hash)]
pub struct FixedArray<T, const N: usize> {
    data: [T; N],
}

#[allow(clippy::len_without_is_empty)]
impl<T, const N: usize> FixedArray<T, N> {
    /// Creates an array of default elements.
    #[must_use]
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::from_fn(|_| T::default())
    }

    /// Creates an array with every element set to `value`.
    #[must_use]
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_| value.clone())
    }

    /// Creates an array from the first `N` elements of `source`.
    ///
    /// If `source` is shorter than `N`, the remaining elements are default.
    #[must_use]
    pub fn from_slice<U>(source: &[U]) -> Self
    where
        U: Clone,
        T: From<U> + Default,
    {
        Self::from_fn(|index| source.get(index).cloned().map_or_else(T::default, T::from))
    }

    /// Creates an array from the first `min(N, M)` elements of another array
    /// of any element type and size.
    #[must_use]
    pub fn from_array<U, const M: usize>(source: &FixedArray<U, M>) -> Self
    where
        U: Clone,
        T: From<U> + Default,
    {
        Self::from_slice(source.as_slice())
    }

    /// Creates an array whose element at each position is `f(position)`.
    #[must_use]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        let () = NonZeroCapacity::<N>::OK;

        Self {
            data: core::array::from_fn(f),
        }
    }

    /// Returns the number of elements, always `N`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the size of the element storage in bytes.
    #[inline]
    #[must_use]
    pub const fn size_in_bytes(&self) -> usize {
        N * core::mem::size_of::<T>()
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable counterpart of [`get`](Self::get).
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.data.fill(value);
        self
    }

    /// Sets every element in `range` to `value`.
    ///
    /// # Errors
    ///
    /// Returns a bounds error, touching no element, if the range is reversed
    /// or ends past `N`.
    pub fn fill_range(&mut self, range: Range<usize>, value: T) -> Result<&mut Self>
    where
        T: Clone,
    {
        if range.start > range.end || range.end > N {
            return Err(Error::invalid_range("FixedArray fill range outside array"));
        }

        self.data[range].fill(value);
        Ok(self)
    }

    /// Sets every element whose position satisfies `predicate` to `value`.
    pub fn fill_where<P>(&mut self, value: T, mut predicate: P) -> &mut Self
    where
        T: Clone,
        P: FnMut(usize) -> bool,
    {
        for (index, item) in self.data.iter_mut().enumerate() {
            if predicate(index) {
                *item = value.clone();
            }
        }
        self
    }

    /// Assigns converted clones of the first `min(N, M)` elements of
    /// `source`; the rest of `self` is left as is.
    pub fn copy_from<U, const M: usize>(&mut self, source: &FixedArray<U, M>) -> &mut Self
    where
        U: Clone,
        T: From<U>,
    {
        for (item, value) in self.data.iter_mut().zip(source.as_slice()) {
            *item = T::from(value.clone());
        }
        self
    }

    /// Exchanges the contents of two arrays.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the wrapper and returns the inner array.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> Self {
        let () = NonZeroCapacity::<N>::OK;

        Self { data }
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, U, const N: usize> PartialEq<FixedArray<U, N>> for FixedArray<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedArray<U, N>) -> bool {
        self.data.iter().zip(&other.data).all(|(a, b)| a == b)
    }
}

impl<T: Eq, const N: usize> Eq for FixedArray<T, N> {}
