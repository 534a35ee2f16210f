//! Platform-specific default capacities for the static containers.
//!
//! Every container takes its capacity as a const generic, so these values
//! only feed the `Default*` type aliases in [`crate::collections`]. Different
//! platform profiles are selected via feature flags:
//!
//! - `embedded-small`: MCU targets with a few KB reserved for containers
//! - `embedded-medium`: larger MCUs and embedded Linux
//! - Default: host profile
//!
//! # Usage
//!
//! ```rust
//! use sdc_foundation::{collections::DefaultFifoQueue, limits};
//!
//! let queue = DefaultFifoQueue::<u32>::new();
//! assert_eq!(queue.capacity(), limits::QUEUE_MAX_SIZE);
//! ```

/// Platform profile for small microcontrollers
#[cfg(feature = "embedded-small")]
pub mod platform {
    /// Default capacity of a FIFO queue
    pub const QUEUE_MAX_SIZE: usize = 16;

    /// Default capacity of a circular queue
    pub const CIRCULAR_QUEUE_MAX_SIZE: usize = 16;

    /// Default capacity of a priority queue
    pub const PRIORITY_QUEUE_MAX_SIZE: usize = 16;
}

/// Platform profile for larger embedded targets
#[cfg(all(feature = "embedded-medium", not(feature = "embedded-small")))]
pub mod platform {
    /// Default capacity of a FIFO queue
    pub const QUEUE_MAX_SIZE: usize = 64;

    /// Default capacity of a circular queue
    pub const CIRCULAR_QUEUE_MAX_SIZE: usize = 64;

    /// Default capacity of a priority queue
    pub const PRIORITY_QUEUE_MAX_SIZE: usize = 64;
}

/// Host profile
#[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
pub mod platform {
    /// Default capacity of a FIFO queue
    pub const QUEUE_MAX_SIZE: usize = 100;

    /// Default capacity of a circular queue
    pub const CIRCULAR_QUEUE_MAX_SIZE: usize = 100;

    /// Default capacity of a priority queue
    pub const PRIORITY_QUEUE_MAX_SIZE: usize = 100;
}

pub use platform::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_are_nonzero() {
        assert!(QUEUE_MAX_SIZE > 0);
        assert!(CIRCULAR_QUEUE_MAX_SIZE > 0);
        assert!(PRIORITY_QUEUE_MAX_SIZE > 0);
    }

    #[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
    #[test]
    fn test_host_profile_capacities() {
        assert_eq!(QUEUE_MAX_SIZE, 100);
        assert_eq!(CIRCULAR_QUEUE_MAX_SIZE, 100);
        assert_eq!(PRIORITY_QUEUE_MAX_SIZE, 100);
    }
}
