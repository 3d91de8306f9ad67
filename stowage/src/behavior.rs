// Stowage - stowage
// Module: Full-queue behaviors
// SW-REQ-ID: REQ_RESOURCE_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Behavior semantics for [`RingQueue`](crate::collections::RingQueue).
//!
//! The behavior is a marker type parameter of `RingQueue` and decides what a
//! push does when the queue is full. It defaults to [`Reject`].
//!
//! ## Reject
//!
//! Pushing into a full queue returns a capacity error and leaves the queue
//! unchanged.
//!
//! ```
//! use stowage::collections::RingQueue;
//!
//! let mut queue = RingQueue::<u8, 2>::new();
//! assert!(queue.push(1).is_ok());
//! assert!(queue.push(2).is_ok());
//! assert!(queue.push(3).is_err());
//! assert_eq!(queue.front(), Some(&1));
//! ```
//!
//! ## Overwrite
//!
//! Pushing into a full queue evicts the oldest element to make room and hands
//! it back to the caller.
//!
//! ```
//! use stowage::{behavior::Overwrite, collections::RingQueue};
//!
//! let mut queue = RingQueue::<u8, 2, Overwrite>::new();
//! assert_eq!(queue.push(1), None);
//! assert_eq!(queue.push(2), None);
//! assert_eq!(queue.push(3), Some(1));
//! assert_eq!(queue.front(), Some(&2));
//! ```

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for full-queue behaviors.
///
/// Sealed: the two behaviors below are the only ones.
pub trait Behavior: sealed::Sealed {
    /// Name used in trace events.
    const NAME: &'static str;
}

/// Insertion into a full queue fails without side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reject;

impl sealed::Sealed for Reject {}

impl Behavior for Reject {
    const NAME: &'static str = "reject";
}

/// Insertion into a full queue evicts the oldest element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Overwrite;

impl sealed::Sealed for Overwrite {}

impl Behavior for Overwrite {
    const NAME: &'static str = "overwrite";
}
