// Stowage - stowage
// Module: Fixed-capacity collections
// SW-REQ-ID: REQ_RESOURCE_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity collections with inline storage.
//!
//! - [`RingQueue`]: circular FIFO queue, reject or overwrite when full
//! - [`BoundedStack`]: LIFO stack
//! - [`FixedArray`]: `N` always-initialized elements with fill helpers

mod bounded_stack;
mod fixed_array;
mod ring_queue;

pub use bounded_stack::BoundedStack;
pub use fixed_array::FixedArray;
pub use ring_queue::RingQueue;
