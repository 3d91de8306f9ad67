// Stowage - stowage
// Module: Internal tracing macros
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate-internal macros that compile to nothing without the `tracing`
//! feature.

/// Emit a `tracing` event at the given level.
///
/// `trace_event!(DEBUG, field = value, "message")`
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)*) => {
        ::tracing::event!(::tracing::Level::$level, $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)*) => {};
}

/// Enter one of the [`ContainerTrace`](crate::tracing::ContainerTrace) spans
/// until the end of the enclosing block.
///
/// `enter_span!(copying("RingQueue", len))`
#[cfg(feature = "tracing")]
macro_rules! enter_span {
    ($kind:ident($($arg:expr),* $(,)?)) => {
        let _guard = $crate::tracing::ContainerTrace::$kind($($arg),*).entered();
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! enter_span {
    ($kind:ident($($arg:expr),* $(,)?)) => {};
}
