//! Tracing support for the static containers
//!
//! Wraps the `tracing` crate and provides span helpers for the few places
//! where a container does more than constant work: heap repair in the
//! priority queue and list traversal.

pub use ::tracing::{debug, trace, warn};
pub use ::tracing::{debug_span, trace_span};
pub use ::tracing::{Level, Span};

/// Trace spans for container operations
#[derive(Debug, Clone)]
pub struct CollectionTrace;

impl CollectionTrace {
    /// Create a span for a heap sift starting at `index`
    #[inline]
    #[must_use]
    pub fn sift(direction: &'static str, index: usize, size: usize) -> Span {
        trace_span!("heap_sift", direction = direction, start = index, size = size)
    }

    /// Create a span for a list walk towards the tail
    #[inline]
    #[must_use]
    pub fn list_walk(operation: &'static str) -> Span {
        trace_span!("list_walk", operation = operation)
    }

    /// Create a span for re-initialising a container
    #[inline]
    #[must_use]
    pub fn reset(container: &'static str, capacity: usize) -> Span {
        debug_span!("container_reset", container = container, capacity = capacity)
    }
}
