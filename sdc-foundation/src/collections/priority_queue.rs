// SDC - sdc-foundation
// Module: PriorityQueue - Inline-storage binary max-heap
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded priority queue backed by a binary max-heap.
//!
//! Entries are `(element, priority)` pairs laid out as a complete binary
//! tree in two parallel inline arrays: for index `i` the parent is
//! `(i - 1) / 2` and the children are `2i + 1` and `2i + 2`. The highest
//! numeric priority is always at index 0.
//!
//! # Ordering among equal priorities
//!
//! Both sift directions swap only on a strictly greater priority, so entries
//! with equal priority are **unordered**: insertion order among ties is not
//! preserved and callers must not rely on it.
//!
//! # Characteristics
//!
//! - **Zero allocation**: `[Option<T>; N]` elements, `[Priority; N]` keys
//! - **Logarithmic operations**: `enqueue()` and `dequeue()` are O(log N)
//! - **Iterative heap repair**: stack usage does not grow with the tree height

use core::fmt;

use sdc_error::{Error, Result};

/// Priority key. Higher numeric value means higher priority.
///
/// Arithmetic on priorities is the caller's business; the queue only
/// compares them.
pub type Priority = i32;

/// A max-priority queue with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `size <= N`
/// 2. Slots `0..size` are occupied, slots `size..N` are vacant
/// 3. For every `0 < i < size`: `priorities[i] <= priorities[(i - 1) / 2]`
///
/// # Examples
///
/// ```
/// use sdc_foundation::PriorityQueue;
///
/// let mut queue = PriorityQueue::<&str, 8>::new();
/// queue.enqueue("low", 1)?;
/// queue.enqueue("high", 10)?;
/// queue.enqueue("medium", 5)?;
///
/// assert_eq!(queue.dequeue()?, ("high", 10));
/// assert_eq!(queue.dequeue()?, ("medium", 5));
/// assert_eq!(queue.dequeue()?, ("low", 1));
/// # Ok::<(), sdc_error::Error>(())
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, const N: usize> {
    elements: [Option<T>; N],
    priorities: [Priority; N],
    size: usize,
}

impl<T, const N: usize> PriorityQueue<T, N> {
    /// Creates a new empty priority queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: [const { None }; N],
            priorities: [0; N],
            size: 0,
        }
    }

    /// Resets the queue to empty, dropping any queued handles.
    pub fn init(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::reset("PriorityQueue", N).entered();

        for slot in &mut self.elements[..self.size] {
            *slot = None;
        }
        self.size = 0;
    }

    /// Returns `true` if the queue holds no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the queue holds `N` entries.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.size == N
    }

    /// Inserts `element` with `priority`, then restores the heap upwards.
    ///
    /// # Errors
    ///
    /// Returns a `CAPACITY_EXCEEDED` error if the queue is full.
    pub fn enqueue(&mut self, element: T, priority: Priority) -> Result<()> {
        if self.size >= N {
            sdc_trace!("PriorityQueue enqueue rejected: full at capacity {}", N);
            return Err(Error::capacity_exceeded("PriorityQueue capacity exceeded"));
        }

        let index = self.size;
        self.elements[index] = Some(element);
        self.priorities[index] = priority;
        self.size += 1;

        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the highest-priority entry.
    ///
    /// The last entry is moved into the root slot and sifted down.
    ///
    /// # Errors
    ///
    /// Returns a `CONTAINER_EMPTY` error if the queue is empty.
    pub fn dequeue(&mut self) -> Result<(T, Priority)> {
        if self.size == 0 {
            sdc_trace!("PriorityQueue dequeue rejected: empty");
            return Err(Error::container_empty("PriorityQueue is empty"));
        }

        let element = self.elements[0]
            .take()
            .ok_or(Error::container_empty("PriorityQueue root slot is vacant"))?;
        let priority = self.priorities[0];

        let last = self.size - 1;
        self.elements[0] = self.elements[last].take();
        self.priorities[0] = self.priorities[last];
        self.size = last;

        if self.size > 0 {
            self.sift_down(0);
        }

        Ok((element, priority))
    }

    /// Returns the highest-priority entry without removing it.
    ///
    /// # Errors
    ///
    /// Returns a `CONTAINER_EMPTY` error if the queue is empty.
    pub fn peek(&self) -> Result<(&T, Priority)> {
        if self.size == 0 {
            return Err(Error::container_empty("PriorityQueue is empty"));
        }

        self.elements[0]
            .as_ref()
            .map(|element| (element, self.priorities[0]))
            .ok_or(Error::container_empty("PriorityQueue root slot is vacant"))
    }

    /// Returns the number of queued entries.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Checks that no child outranks its parent.
    ///
    /// Always `true` for a queue driven through the public API; exposed for
    /// verification harnesses and property tests.
    #[must_use]
    pub fn satisfies_heap_property(&self) -> bool {
        (1..self.size).all(|i| self.priorities[i] <= self.priorities[(i - 1) / 2])
    }

    /// Iterates over the entries in heap (storage) order.
    ///
    /// The order is only meaningful at index 0; use repeated
    /// [`dequeue`](Self::dequeue) for priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, Priority)> + '_ {
        self.elements[..self.size]
            .iter()
            .zip(self.priorities[..self.size].iter().copied())
            .filter_map(|(element, priority)| element.as_ref().map(|e| (e, priority)))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
        self.priorities.swap(a, b);
    }

    /// Moves the entry at `index` towards the root while it outranks its
    /// parent.
    fn sift_up(&mut self, mut index: usize) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::sift("up", index, self.size).entered();

        while index > 0 {
            let parent = (index - 1) / 2;
            if self.priorities[index] > self.priorities[parent] {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the entry at `index` towards the leaves while a child strictly
    /// outranks it. Of two equal children the left one is taken.
    fn sift_down(&mut self, mut index: usize) {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::sift("down", index, self.size).entered();

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut largest = index;

            if left < self.size && self.priorities[left] > self.priorities[largest] {
                largest = left;
            }
            if right < self.size && self.priorities[right] > self.priorities[largest] {
                largest = right;
            }

            if largest == index {
                break;
            }
            self.swap(index, largest);
            index = largest;
        }
    }
}

impl<T, const N: usize> Default for PriorityQueue<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for PriorityQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("capacity", &N)
            .field("size", &self.size)
            .field("priorities", &&self.priorities[..self.size])
            .finish_non_exhaustive()
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_heap_property_after_enqueues() {
        let mut queue: PriorityQueue<u8, 4> = PriorityQueue::new();
        for i in 0..4u8 {
            let priority: i32 = kani::any();
            assert!(queue.enqueue(i, priority).is_ok());
            assert!(queue.satisfies_heap_property());
        }
        assert!(queue.enqueue(9, 0).is_err());
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_dequeue_non_increasing() {
        let mut queue: PriorityQueue<u8, 3> = PriorityQueue::new();
        for i in 0..3u8 {
            let priority: i32 = kani::any();
            let _ = queue.enqueue(i, priority);
        }

        let mut previous = i32::MAX;
        while let Ok((_, priority)) = queue.dequeue() {
            assert!(priority <= previous);
            assert!(queue.satisfies_heap_property());
            previous = priority;
        }
    }
}
