// Stowage - stowage-error
// Module: Stowage Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for stowage

// Capacity error codes (1000-1999)
/// Insertion into a container that has no free slot
pub const CAPACITY_EXCEEDED: u16 = 1000;
/// Source container holds more elements than the destination capacity
pub const COPY_CAPACITY_EXCEEDED: u16 = 1001;

// Bounds error codes (2000-2999)
/// Position outside the container
pub const INDEX_OUT_OF_BOUNDS: u16 = 2000;
/// Reversed range or range ending past the container
pub const INVALID_RANGE: u16 = 2001;
