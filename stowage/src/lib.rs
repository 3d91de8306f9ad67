// Stowage - stowage
// Module: Stowage Containers
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity containers with inline storage.
//!
//! Every container in this crate reserves room for exactly `N` elements
//! inside its own value. Nothing is allocated on the heap, and capacity is a
//! const generic checked at compile time (`N == 0` does not build).
//!
//! # Containers
//!
//! - [`RingQueue`](collections::RingQueue): circular FIFO queue. A full queue
//!   either rejects new elements ([`Reject`](behavior::Reject), the default)
//!   or evicts its oldest one ([`Overwrite`](behavior::Overwrite)).
//! - [`BoundedStack`](collections::BoundedStack): LIFO stack.
//! - [`FixedArray`](collections::FixedArray): `N` always-initialized
//!   elements with range and predicate fill.
//!
//! # Features
//!
//! - `std`: links the standard library and implements `std::error::Error`
//!   for [`Error`]
//! - `tracing`: structured events for rejections, evictions and clears
//! - `kani`: formal verification harnesses
//!
//! # Example
//!
//! ```
//! use stowage::prelude::*;
//!
//! let mut events: RingQueue<u16, 3, Overwrite> = RingQueue::new();
//! for id in 1..=5 {
//!     events.push(id);
//! }
//! assert_eq!(events.as_slices(), (&[3][..], &[4, 5][..]));
//!
//! let mut stack = BoundedStack::<u16, 2>::new();
//! stack.push(1)?;
//! stack.push(2)?;
//! assert!(stack.push(3).is_err_and(|e| e.is_capacity_error()));
//! # Ok::<(), stowage::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
mod macros;

pub mod behavior;
pub mod collections;
pub mod prelude;
pub mod storage;
pub mod tracing;

#[cfg(kani)]
mod verify;

pub use stowage_error::{codes, Error, ErrorCategory, Result};
