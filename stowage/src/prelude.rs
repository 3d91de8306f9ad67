// Stowage - stowage
// Module: Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for stowage
//!
//! Brings the containers, the full-queue behaviors and the error types into
//! scope with a single glob import.

pub use crate::behavior::{Behavior, Overwrite, Reject};
pub use crate::collections::{BoundedStack, FixedArray, RingQueue};
pub use stowage_error::{codes, Error, ErrorCategory, Result};
