// Stowage - stowage
// Module: Formal verification harnesses
// SW-REQ-ID: REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Formal verification for stowage using Kani.
//!
//! The proofs cover:
//! - FIFO and LIFO ordering
//! - Wraparound of the queue head and tail
//! - Capacity enforcement for `Reject` and eviction for `Overwrite`
//! - The live-range invariant under arbitrary operation sequences

use crate::behavior::{Overwrite, Reject};
use crate::collections::{BoundedStack, FixedArray, RingQueue};

#[kani::proof]
fn verify_fifo_order() {
    let mut queue: RingQueue<u8, 5> = RingQueue::new();

    assert!(queue.push(1).is_ok());
    assert!(queue.push(2).is_ok());
    assert!(queue.push(3).is_ok());

    assert!(queue.pop() == Some(1));
    assert!(queue.pop() == Some(2));
    assert!(queue.pop() == Some(3));
    assert!(queue.pop().is_none());
}

#[kani::proof]
fn verify_circular_wraparound() {
    let mut queue: RingQueue<u32, 3> = RingQueue::new();

    assert!(queue.push(1).is_ok());
    assert!(queue.push(2).is_ok());
    assert!(queue.push(3).is_ok());
    assert!(queue.pop() == Some(1));

    // Tail wraps to slot 0
    assert!(queue.push(4).is_ok());
    assert!(queue.back() == Some(&4));

    assert!(queue.pop() == Some(2));
    assert!(queue.pop() == Some(3));
    assert!(queue.pop() == Some(4));
}

#[kani::proof]
fn verify_capacity_enforcement() {
    let mut queue: RingQueue<u8, 3, Reject> = RingQueue::new();

    assert!(queue.push(1).is_ok());
    assert!(queue.push(2).is_ok());
    assert!(queue.push(3).is_ok());
    assert!(queue.push(4).is_err());

    assert!(queue.len() == 3);
    assert!(queue.front() == Some(&1));
    assert!(queue.back() == Some(&3));
}

#[kani::proof]
fn verify_overwrite_evicts_oldest() {
    let mut queue: RingQueue<u8, 2, Overwrite> = RingQueue::new();

    assert!(queue.push(1).is_none());
    assert!(queue.push(2).is_none());
    assert!(queue.push(3) == Some(1));

    assert!(queue.len() == 2);
    assert!(queue.front() == Some(&2));
    assert!(queue.back() == Some(&3));
}

#[kani::proof]
fn verify_stack_lifo() {
    let mut stack: BoundedStack<u8, 3> = BoundedStack::new();

    assert!(stack.push(1).is_ok());
    assert!(stack.push(2).is_ok());
    assert!(stack.push(3).is_ok());
    assert!(stack.push(4).is_err());

    assert!(stack.pop() == Some(3));
    assert!(stack.pop() == Some(2));
    assert!(stack.pop() == Some(1));
    assert!(stack.pop().is_none());
}

#[kani::proof]
#[kani::unwind(6)]
fn verify_queue_live_range_invariant() {
    let mut queue: RingQueue<u8, 3, Overwrite> = RingQueue::new();

    for _ in 0..4 {
        if kani::any() {
            let _ = queue.push(kani::any());
        } else {
            let _ = queue.pop();
        }

        let (first, second) = queue.as_slices();
        assert!(first.len() + second.len() == queue.len());
        assert!(queue.len() <= queue.capacity());
        assert!(queue.is_empty() == queue.front().is_none());
    }
}

#[kani::proof]
#[kani::unwind(6)]
fn verify_fill_range_bounds() {
    let mut array: FixedArray<u8, 4> = FixedArray::new();
    let start: usize = kani::any();
    let end: usize = kani::any();

    let result = array.fill_range(start..end, 1);
    assert!(result.is_ok() == (start <= end && end <= 4));
}

#[kani::proof]
#[kani::unwind(6)]
fn verify_drop_cleanup() {
    let mut queue: RingQueue<u32, 5> = RingQueue::new();
    assert!(queue.push(1).is_ok());
    assert!(queue.push(2).is_ok());
    assert!(queue.push(3).is_ok());

    drop(queue);
}
