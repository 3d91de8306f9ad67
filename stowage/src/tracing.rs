//! Tracing support for the containers
//!
//! This module wraps the `tracing` crate for container code. It works in both
//! std and no_std environments; without a subscriber installed every event is
//! a cheap no-op.
//!
//! Events emitted by the containers:
//!
//! | level | when | fields |
//! |---|---|---|
//! | `DEBUG` | push or copy rejected for lack of room | `container`, `capacity`, `len` |
//! | `TRACE` | oldest element evicted by an `Overwrite` queue | `container`, `capacity`, `behavior` |
//! | `TRACE` | non-empty container cleared | `container`, `dropped` |

#![cfg(feature = "tracing")]

pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, error_span, info_span, span, trace_span, warn_span};
pub use tracing::{event, Level, Span};

/// Span constructors for whole-container operations
#[derive(Debug, Clone)]
pub struct ContainerTrace;

impl ContainerTrace {
    /// Create a span for copying `len` elements into a container
    #[inline]
    pub fn copying(container: &'static str, len: usize) -> Span {
        debug_span!("container_copy", container = %container, len = %len)
    }

    /// Create a span for dropping every element of a container
    #[inline]
    pub fn clearing(container: &'static str, len: usize) -> Span {
        trace_span!("container_clear", container = %container, len = %len)
    }
}
