// SDC - sdc-foundation
// Module: Mutex-wrapped containers
// SW-REQ-ID: REQ_RESOURCE_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Containers shared between threads of control.
//!
//! The containers carry no synchronization of their own. Concurrent callers
//! wrap an unmodified container in an [`SdcMutex`] and perform each
//! operation under the lock. Because `SdcMutex::new` and the container
//! constructors are `const`, a shared container can live in a `static`:
//!
//! ```
//! use sdc_foundation::shared::{with_locked, SdcMutex, SharedFifoQueue};
//! use sdc_foundation::FifoQueue;
//!
//! static EVENTS: SharedFifoQueue<u32, 8> = SdcMutex::new(FifoQueue::new());
//!
//! with_locked(&EVENTS, |queue| queue.enqueue(1))?;
//! let first = with_locked(&EVENTS, |queue| queue.dequeue())?;
//! assert_eq!(first, 1);
//! # Ok::<(), sdc_error::Error>(())
//! ```

pub use sdc_sync::{SdcMutex, SdcMutexGuard};

use crate::collections::{CircularQueue, FifoQueue, PriorityQueue};

/// A [`FifoQueue`] behind a spin mutex
pub type SharedFifoQueue<T, const N: usize> = SdcMutex<FifoQueue<T, N>>;

/// A [`CircularQueue`] behind a spin mutex
pub type SharedCircularQueue<T, const N: usize> = SdcMutex<CircularQueue<T, N>>;

/// A [`PriorityQueue`] behind a spin mutex
pub type SharedPriorityQueue<T, const N: usize> = SdcMutex<PriorityQueue<T, N>>;

/// Runs `f` on the container with the lock held.
///
/// The guard is released when `f` returns, so one call covers exactly one
/// critical section.
pub fn with_locked<C, R>(mutex: &SdcMutex<C>, f: impl FnOnce(&mut C) -> R) -> R {
    let mut guard = mutex.lock();
    f(&mut *guard)
}
