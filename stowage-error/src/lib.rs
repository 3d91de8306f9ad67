// Stowage - stowage-error
// Module: Stowage Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Stowage error handling library
//!
//! Every fallible container operation reports failure through the single
//! [`Error`] type defined here. Errors are plain `Copy` values carrying a
//! category, a numeric code and a static message, so they can be created in
//! `const` context and returned from `no_std`, `no_alloc` code.
//!
//! # Error Categories
//!
//! ## Capacity Errors (1000-1999)
//! - Insertion into a full container
//! - Copying more elements than the destination can hold
//!
//! ## Bounds Errors (2000-2999)
//! - Positions outside the container
//! - Reversed or overlong ranges
//!
//! # Usage
//!
//! ```
//! use stowage_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Capacity,
//!     codes::CAPACITY_EXCEEDED,
//!     "RingQueue is full",
//! );
//! assert!(error.is_capacity_error());
//!
//! let range_error = Error::invalid_range("fill range ends past the array");
//! assert_eq!(range_error.code, codes::INVALID_RANGE);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for stowage
pub mod codes;
/// Error and error category types
pub mod errors;

pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for container operations.
///
/// `Error` is `Copy` and allocation free, so this alias is usable on every
/// target the containers support.
pub type Result<T> = core::result::Result<T, Error>;
