// SDC - sdc-foundation
// Module: FifoQueue - Inline-storage FIFO queue
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded FIFO queue with inline storage and compile-time capacity.
//!
//! `FifoQueue<T, N>` is a circular array tracking its element count
//! explicitly, so `front == rear` is never ambiguous.
//!
//! # Characteristics
//!
//! - **Zero allocation**: All slots are inline `[Option<T>; N]`
//! - **Const-time operations**: `enqueue()`, `dequeue()`, `peek()` are O(1)
//! - **Circular buffer**: Wraparound for continuous use
//! - **Fail-closed**: Overfilling or draining past empty returns an error and
//!   leaves the queue untouched

use core::fmt;

use sdc_error::{Error, Result};

/// A FIFO queue with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `count <= N` always holds
/// 2. `front` and `rear` are always `< N` (when `N > 0`)
/// 3. Logical position `i` lives in slot `(front + i) % N`
/// 4. Exactly the `count` slots of the logical range are occupied
///
/// # Examples
///
/// ```
/// use sdc_foundation::FifoQueue;
///
/// let mut queue = FifoQueue::<u32, 10>::new();
/// queue.enqueue(1)?;
/// queue.enqueue(2)?;
/// queue.enqueue(3)?;
///
/// assert_eq!(queue.dequeue()?, 1);
/// assert_eq!(queue.dequeue()?, 2);
/// assert_eq!(queue.size(), 1);
/// # Ok::<(), sdc_error::Error>(())
/// ```
#[derive(Clone)]
pub struct FifoQueue<T, const N: usize> {
    /// Inline slots (circular buffer)
    slots: [Option<T>; N],

    /// Index of the first element
    front: usize,

    /// Index where the next element will be stored
    rear: usize,

    /// Number of elements currently in the queue
    count: usize,
}

impl<T, const N: usize> FifoQueue<T, N> {
    /// Creates a new empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [const { None }; N],
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    /// Resets the queue to empty, dropping any queued handles.
    ///
    /// # Time Complexity
    ///
    /// O(N): every slot is cleared.
    pub fn init(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::reset("FifoQueue", N).entered();

        for slot in &mut self.slots {
            *slot = None;
        }
        self.front = 0;
        self.rear = 0;
        self.count = 0;
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if the queue holds `N` elements.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count == N
    }

    /// Appends an element at the rear of the queue.
    ///
    /// # Errors
    ///
    /// Returns a `CAPACITY_EXCEEDED` error if the queue is full. The
    /// rejected element is dropped and the queue is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdc_foundation::FifoQueue;
    ///
    /// let mut queue = FifoQueue::<u32, 3>::new();
    /// queue.enqueue(1)?;
    /// queue.enqueue(2)?;
    /// queue.enqueue(3)?;
    /// assert!(queue.enqueue(4).is_err()); // Full
    /// # Ok::<(), sdc_error::Error>(())
    /// ```
    #[inline]
    pub fn enqueue(&mut self, element: T) -> Result<()> {
        if self.count >= N {
            sdc_trace!("FifoQueue enqueue rejected: full at capacity {}", N);
            return Err(Error::capacity_exceeded("FifoQueue capacity exceeded"));
        }

        self.slots[self.rear] = Some(element);
        self.rear = (self.rear + 1) % N;
        self.count += 1;

        Ok(())
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns a `CONTAINER_EMPTY` error if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        if self.count == 0 {
            sdc_trace!("FifoQueue dequeue rejected: empty");
            return Err(Error::container_empty("FifoQueue is empty"));
        }

        let element = self.slots[self.front]
            .take()
            .ok_or(Error::container_empty("FifoQueue front slot is vacant"))?;
        self.front = (self.front + 1) % N;
        self.count -= 1;

        Ok(element)
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// # Errors
    ///
    /// Returns a `CONTAINER_EMPTY` error if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        if self.count == 0 {
            return Err(Error::container_empty("FifoQueue is empty"));
        }

        self.slots[self.front]
            .as_ref()
            .ok_or(Error::container_empty("FifoQueue front slot is vacant"))
    }

    /// Returns the number of queued elements.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.count
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns an iterator over the queue, front to rear.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> FifoQueueIter<'_, T, N> {
        FifoQueueIter {
            queue: self,
            index: 0,
        }
    }
}

impl<T, const N: usize> Default for FifoQueue<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FifoQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FifoQueue")
            .field("capacity", &N)
            .field("size", &self.count)
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T, const N: usize>(&'a FifoQueue<T, N>);

impl<T: fmt::Debug, const N: usize> fmt::Debug for DebugElements<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Iterator over a [`FifoQueue`] in FIFO order.
pub struct FifoQueueIter<'a, T, const N: usize> {
    queue: &'a FifoQueue<T, N>,
    index: usize,
}

impl<'a, T, const N: usize> Iterator for FifoQueueIter<'a, T, N> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.queue.count {
            let pos = (self.queue.front + self.index) % N;
            self.index += 1;
            if let Some(item) = self.queue.slots[pos].as_ref() {
                return Some(item);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for FifoQueueIter<'_, T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a FifoQueue<T, N> {
    type Item = &'a T;
    type IntoIter = FifoQueueIter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_fifo_order() {
        let mut queue: FifoQueue<u8, 5> = FifoQueue::new();

        assert!(queue.enqueue(1).is_ok());
        assert!(queue.enqueue(2).is_ok());
        assert!(queue.enqueue(3).is_ok());

        assert!(queue.dequeue() == Ok(1));
        assert!(queue.dequeue() == Ok(2));
        assert!(queue.dequeue() == Ok(3));
        assert!(queue.dequeue().is_err());
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_count_bounded() {
        let mut queue: FifoQueue<u8, 3> = FifoQueue::new();
        let pushes: u8 = kani::any();
        kani::assume(pushes <= 5);

        for i in 0..pushes {
            let _ = queue.enqueue(i);
        }

        assert!(queue.size() <= 3);
        assert!(queue.front < 3 && queue.rear < 3);
    }
}

// ============================================================================
// Tests
// ============================================================================
