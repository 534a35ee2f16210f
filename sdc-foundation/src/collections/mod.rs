// SDC - sdc-foundation
// Module: Static containers
// SW-REQ-ID: REQ_RESOURCE_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity containers.
//!
//! The three queues keep their storage inline and take their capacity as a
//! const generic. The list keeps no storage at all: it links nodes owned by
//! the caller. None of the containers depend on each other.

mod circular_queue;
mod fifo_queue;
mod intrusive_list;
mod priority_queue;

pub use circular_queue::{CircularQueue, CircularQueueIter};
pub use fifo_queue::{FifoQueue, FifoQueueIter};
pub use intrusive_list::{IntrusiveList, ListIter, Node};
pub use priority_queue::{Priority, PriorityQueue};

use crate::limits;

/// FIFO queue sized by the active platform profile
pub type DefaultFifoQueue<T> = FifoQueue<T, { limits::QUEUE_MAX_SIZE }>;

/// Circular queue sized by the active platform profile
pub type DefaultCircularQueue<T> = CircularQueue<T, { limits::CIRCULAR_QUEUE_MAX_SIZE }>;

/// Priority queue sized by the active platform profile
pub type DefaultPriorityQueue<T> = PriorityQueue<T, { limits::PRIORITY_QUEUE_MAX_SIZE }>;
