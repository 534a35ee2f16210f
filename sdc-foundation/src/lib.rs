// SDC - sdc-foundation
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity containers for environments without dynamic allocation.
//!
//! This crate provides four independent containers whose storage is either
//! inline (the three queues) or owned by the caller (the list nodes):
//!
//! - [`FifoQueue`]: circular-array FIFO tracking an element count
//! - [`CircularQueue`]: ring buffer disambiguating full/empty with a flag
//! - [`PriorityQueue`]: binary max-heap keyed by a signed priority
//! - [`IntrusiveList`]: singly linked list over caller-allocated [`Node`]s
//!
//! Elements are opaque handles of a generic type `T`; containers move them
//! in and out but never inspect them. Capacities are const generics, and an
//! operation that would exceed capacity fails with an error instead of
//! touching memory outside the container.
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support (`std::error::Error`)
//! - `tracing`: Structured trace events for rejected operations
//! - `log`: `log` facade events when `tracing` is off
//! - `embedded-small` / `embedded-medium`: smaller default capacities
//! - Default: Pure `no_std` without allocation
//!
//! # Example
//!
//! ```
//! use sdc_foundation::{FifoQueue, PriorityQueue};
//!
//! let mut queue = FifoQueue::<&str, 4>::new();
//! queue.enqueue("first")?;
//! queue.enqueue("second")?;
//! assert_eq!(queue.dequeue()?, "first");
//!
//! let mut tasks = PriorityQueue::<&str, 4>::new();
//! tasks.enqueue("low", 1)?;
//! tasks.enqueue("high", 10)?;
//! assert_eq!(tasks.dequeue()?, ("high", 10));
//! # Ok::<(), sdc_error::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(any(feature = "std", test))]
extern crate std;

// Internal macros must come before the modules that use them
#[macro_use]
mod macros;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

/// Procedural, status-returning interface over optional references
pub mod api;
/// Fixed-capacity containers
pub mod collections;
/// Compile-time capacity limits per platform profile
pub mod limits;
/// Mutex-wrapped containers for concurrent callers
pub mod shared;
/// Structured tracing helpers
#[cfg(feature = "tracing")]
pub mod tracing;

pub use collections::{
    CircularQueue, CircularQueueIter, FifoQueue, FifoQueueIter, IntrusiveList, ListIter, Node,
    Priority, PriorityQueue,
};
pub use sdc_error::{codes, kinds, Error, ErrorCategory, Result};
pub use shared::{SharedCircularQueue, SharedFifoQueue, SharedPriorityQueue};
