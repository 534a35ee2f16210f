// SDC - sdc-foundation
// Module: CircularQueue - Ring buffer with explicit full flag
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded ring buffer that keeps no element count.
//!
//! With only `front` and `rear`, `front == rear` means either "empty" or
//! "full". `CircularQueue` resolves this with a single `full` flag: it is
//! set when an enqueue makes `rear` catch up with `front` and cleared by
//! every dequeue. The size is derived from the indices on demand.

use core::fmt;

use sdc_error::{Error, Result};

/// A ring buffer with compile-time capacity and a full/empty flag.
///
/// # Invariants
///
/// 1. `front` and `rear` are always `< N` (when `N > 0`)
/// 2. empty ⇔ `!full && front == rear`
/// 3. full ⇔ `full`, and then `front == rear`
///
/// # Examples
///
/// ```
/// use sdc_foundation::CircularQueue;
///
/// let mut ring = CircularQueue::<u8, 2>::new();
/// ring.enqueue(1)?;
/// ring.enqueue(2)?;
/// assert!(ring.is_full());
/// assert_eq!(ring.dequeue()?, 1);
/// assert!(!ring.is_full());
/// # Ok::<(), sdc_error::Error>(())
/// ```
#[derive(Clone)]
pub struct CircularQueue<T, const N: usize> {
    slots: [Option<T>; N],
    front: usize,
    rear: usize,
    full: bool,
}

impl<T, const N: usize> CircularQueue<T, N> {
    /// Creates a new empty ring buffer.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [const { None }; N],
            front: 0,
            rear: 0,
            full: false,
        }
    }

    /// Resets the ring buffer to empty, dropping any queued handles.
    pub fn init(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::reset("CircularQueue", N).entered();

        for slot in &mut self.slots {
            *slot = None;
        }
        self.front = 0;
        self.rear = 0;
        self.full = false;
    }

    /// Returns `true` if the ring buffer holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.full && self.front == self.rear
    }

    /// Returns the stored full flag.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.full
    }

    /// Stores an element at `rear` and advances it.
    ///
    /// # Errors
    ///
    /// Returns a `CAPACITY_EXCEEDED` error if the ring buffer is full.
    pub fn enqueue(&mut self, element: T) -> Result<()> {
        // N == 0 can never accept an element, and must not reach the modulo
        if self.full || N == 0 {
            sdc_trace!("CircularQueue enqueue rejected: full at capacity {}", N);
            return Err(Error::capacity_exceeded("CircularQueue capacity exceeded"));
        }

        self.slots[self.rear] = Some(element);
        self.rear = (self.rear + 1) % N;
        if self.rear == self.front {
            self.full = true;
        }

        Ok(())
    }

    /// Removes and returns the element at `front`, clearing the full flag.
    ///
    /// # Errors
    ///
    /// Returns a `CONTAINER_EMPTY` error if the ring buffer is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            sdc_trace!("CircularQueue dequeue rejected: empty");
            return Err(Error::container_empty("CircularQueue is empty"));
        }

        let element = self.slots[self.front]
            .take()
            .ok_or(Error::container_empty("CircularQueue front slot is vacant"))?;
        self.front = (self.front + 1) % N;
        self.full = false;

        Ok(element)
    }

    /// Returns a reference to the element at `front` without removing it.
    ///
    /// # Errors
    ///
    /// Returns a `CONTAINER_EMPTY` error if the ring buffer is empty.
    pub fn peek(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::container_empty("CircularQueue is empty"));
        }

        self.slots[self.front]
            .as_ref()
            .ok_or(Error::container_empty("CircularQueue front slot is vacant"))
    }

    /// Returns the number of queued elements, derived from the indices.
    #[must_use]
    pub const fn size(&self) -> usize {
        if self.full {
            N
        } else if self.front == self.rear {
            0
        } else if self.rear >= self.front {
            self.rear - self.front
        } else {
            N - self.front + self.rear
        }
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns an iterator over the ring buffer, front to rear.
    #[must_use]
    pub fn iter(&self) -> CircularQueueIter<'_, T, N> {
        CircularQueueIter {
            queue: self,
            index: 0,
            len: self.size(),
        }
    }
}

impl<T, const N: usize> Default for CircularQueue<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for CircularQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("front", &self.front)
            .field("rear", &self.rear)
            .field("full", &self.full)
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

/// Iterator over a [`CircularQueue`] in FIFO order.
pub struct CircularQueueIter<'a, T, const N: usize> {
    queue: &'a CircularQueue<T, N>,
    index: usize,
    len: usize,
}

impl<'a, T, const N: usize> Iterator for CircularQueueIter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.len {
            let pos = (self.queue.front + self.index) % N;
            self.index += 1;
            if let Some(item) = self.queue.slots[pos].as_ref() {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for CircularQueueIter<'_, T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a CircularQueue<T, N> {
    type Item = &'a T;
    type IntoIter = CircularQueueIter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_flag_disambiguates_full_and_empty() {
        let mut ring: CircularQueue<u8, 3> = CircularQueue::new();
        let pushes: u8 = kani::any();
        let pops: u8 = kani::any();
        kani::assume(pushes <= 4 && pops <= 4);

        for i in 0..pushes {
            let _ = ring.enqueue(i);
        }
        for _ in 0..pops {
            let _ = ring.dequeue();
        }

        assert!(ring.size() <= 3);
        assert!(ring.is_empty() == (ring.size() == 0));
        assert!(ring.is_full() == (ring.size() == 3));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let ring: CircularQueue<u32, 4> = CircularQueue::new();
        assert!(ring.is_empty());
        assert!(!ring.is_full());
        assert_eq!(ring.size(), 0);
        assert_eq!(ring.capacity(), 4);
    }

    #[test]
    fn test_full_flag_set_when_rear_meets_front() -> Result<()> {
        let mut ring = CircularQueue::<u32, 3>::new();
        ring.enqueue(1)?;
        ring.enqueue(2)?;
        assert!(!ring.is_full());
        ring.enqueue(3)?;

        assert!(ring.is_full());
        assert!(!ring.is_empty());
        assert_eq!(ring.front, ring.rear);
        assert_eq!(ring.size(), 3);
        assert!(ring.enqueue(4).unwrap_err().is_capacity_exceeded());

        Ok(())
    }

    #[test]
    fn test_dequeue_always_clears_full() -> Result<()> {
        let mut ring = CircularQueue::<u32, 2>::new();
        ring.enqueue(1)?;
        ring.enqueue(2)?;
        assert!(ring.is_full());

        assert_eq!(ring.dequeue()?, 1);
        assert!(!ring.is_full());
        assert_eq!(ring.size(), 1);

        Ok(())
    }

    #[test]
    fn test_wraparound_order() -> Result<()> {
        let mut ring = CircularQueue::<u32, 4>::new();
        ring.enqueue(1)?;
        ring.enqueue(2)?;
        ring.enqueue(3)?;
        assert_eq!(ring.dequeue()?, 1);
        assert_eq!(ring.dequeue()?, 2);
        ring.enqueue(4)?;
        ring.enqueue(5)?;

        // rear < front: wrapped size computation
        assert!(ring.rear < ring.front);
        assert_eq!(ring.size(), 3);

        assert_eq!(ring.dequeue()?, 3);
        assert_eq!(ring.dequeue()?, 4);
        assert_eq!(ring.dequeue()?, 5);
        assert!(ring.is_empty());

        Ok(())
    }

    #[test]
    fn test_single_enqueue_after_wrap() -> Result<()> {
        let mut ring = CircularQueue::<u32, 3>::new();
        ring.enqueue(1)?;
        ring.enqueue(2)?;
        ring.enqueue(3)?;
        assert_eq!(ring.dequeue()?, 1);
        assert_eq!(ring.dequeue()?, 2);
        ring.enqueue(4)?;

        assert_eq!(ring.size(), 2);
        assert_eq!(ring.dequeue()?, 3);
        assert_eq!(ring.dequeue()?, 4);
        assert!(ring.is_empty());

        Ok(())
    }

    #[test]
    fn test_empty_errors_leave_state() {
        let mut ring = CircularQueue::<u32, 2>::new();
        assert!(ring.dequeue().unwrap_err().is_container_empty());
        assert!(ring.peek().unwrap_err().is_container_empty());
        assert!(ring.is_empty());
        assert_eq!(ring.front, 0);
        assert_eq!(ring.rear, 0);
    }

    #[test]
    fn test_peek_does_not_advance() -> Result<()> {
        let mut ring = CircularQueue::<&str, 2>::new();
        ring.enqueue("a")?;
        assert_eq!(ring.peek()?, &"a");
        assert_eq!(ring.peek()?, &"a");
        assert_eq!(ring.size(), 1);
        Ok(())
    }

    #[test]
    fn test_init_clears_full_flag() -> Result<()> {
        let mut ring = CircularQueue::<u8, 1>::new();
        ring.enqueue(9)?;
        assert!(ring.is_full());
        ring.init();
        assert!(ring.is_empty());
        assert!(!ring.is_full());
        Ok(())
    }

    #[test]
    fn test_iter_on_full_ring() -> Result<()> {
        let mut ring = CircularQueue::<u32, 3>::new();
        for i in 0..3 {
            ring.enqueue(i)?;
        }
        ring.dequeue()?;
        ring.enqueue(3)?;

        let mut iter = ring.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        Ok(())
    }

    #[test]
    fn test_zero_capacity_rejects() {
        let mut ring = CircularQueue::<u8, 0>::new();
        assert!(ring.is_empty());
        assert!(ring.enqueue(1).is_err());
        assert_eq!(ring.size(), 0);
    }
}
