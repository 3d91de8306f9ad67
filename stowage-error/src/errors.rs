// Stowage - stowage-error
// Module: Stowage Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error and category types shared by every container.

use core::fmt;

use crate::codes;

/// `Error` categories for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// The container has no room for the requested elements
    Capacity = 1,
    /// A position or range lies outside the container
    Bounds   = 2,
}

/// Stowage `Error` type
///
/// Categorized error with a numeric code and a static message. The type is
/// `Copy` and never allocates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create a capacity exceeded error for an insertion into a full
    /// container
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Create a capacity error for a copy whose source is larger than the
    /// destination
    #[must_use]
    pub const fn copy_capacity_exceeded(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Capacity,
            codes::COPY_CAPACITY_EXCEEDED,
            message,
        )
    }

    /// Create an out of bounds error
    #[must_use]
    pub const fn out_of_bounds(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::INDEX_OUT_OF_BOUNDS, message)
    }

    /// Create an invalid range error
    #[must_use]
    pub const fn invalid_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::INVALID_RANGE, message)
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Validate that the code lies in the range reserved for its category
    /// and that the message is not empty.
    #[must_use]
    pub const fn validate_integrity(&self) -> bool {
        let valid_range = match self.category {
            ErrorCategory::Capacity => self.code >= 1000 && self.code < 2000,
            ErrorCategory::Bounds => self.code >= 2000 && self.code < 3000,
        };

        valid_range && !self.message.is_empty()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
