// SDC - sdc-foundation
// Module: Procedural container interface
// SW-REQ-ID: REQ_ERROR_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Status-returning free functions over optional references.
//!
//! Each container is reachable through a module of free functions that
//! accept the container, node and output location as `Option` references.
//! An absent reference fails with a `Parameter` error instead of being
//! dereferenced, which makes this layer a drop-in for callers that manage
//! their containers through nullable handles.
//!
//! - Mutating and reading operations return `Result<()>` and deliver data
//!   through the `out` parameters.
//! - `is_empty`, `is_full` and `size` never fail. For an absent container
//!   they report `true`, `true` and `0`.
//!
//! ```
//! use sdc_foundation::{api::fifo, FifoQueue};
//!
//! let mut queue = FifoQueue::<u32, 4>::new();
//! fifo::enqueue(Some(&mut queue), 7)?;
//!
//! let mut out = 0;
//! fifo::dequeue(Some(&mut queue), Some(&mut out))?;
//! assert_eq!(out, 7);
//!
//! assert!(fifo::dequeue(Some(&mut queue), None).is_err());
//! assert!(fifo::is_full(None::<&FifoQueue<u32, 4>>));
//! # Ok::<(), sdc_error::Error>(())
//! ```

use sdc_error::{Error, Result};

fn require<C>(container: Option<C>) -> Result<C> {
    container.ok_or(Error::null_reference("Container reference is absent"))
}

fn require_out<O>(out: Option<O>) -> Result<O> {
    out.ok_or(Error::null_output("Output location is absent"))
}

/// Generates the shared operation set of the two array-backed queues.
macro_rules! queue_api {
    ($queue:ident, $name:literal) => {
        use sdc_error::Result;

        use super::{require, require_out};
        use crate::collections::$queue;

        #[doc = concat!("Resets the ", $name, ".")]
        ///
        /// # Errors
        ///
        /// Returns a `NULL_REFERENCE` error if `queue` is absent.
        pub fn init<T, const N: usize>(queue: Option<&mut $queue<T, N>>) -> Result<()> {
            require(queue)?.init();
            Ok(())
        }

        #[doc = concat!("Returns `true` if the ", $name, " is empty or absent.")]
        #[must_use]
        pub fn is_empty<T, const N: usize>(queue: Option<&$queue<T, N>>) -> bool {
            queue.is_none_or(|q| q.is_empty())
        }

        #[doc = concat!("Returns `true` if the ", $name, " is full or absent.")]
        #[must_use]
        pub fn is_full<T, const N: usize>(queue: Option<&$queue<T, N>>) -> bool {
            queue.is_none_or(|q| q.is_full())
        }

        #[doc = concat!("Appends `element` to the ", $name, ".")]
        ///
        /// # Errors
        ///
        /// Returns a `NULL_REFERENCE` error if `queue` is absent and a
        /// `CAPACITY_EXCEEDED` error if it is full.
        pub fn enqueue<T, const N: usize>(queue: Option<&mut $queue<T, N>>, element: T) -> Result<()> {
            require(queue)?.enqueue(element)
        }

        #[doc = concat!("Removes the front element of the ", $name, " into `out`.")]
        ///
        /// # Errors
        ///
        /// Returns a `NULL_REFERENCE` error if `queue` is absent, a
        /// `NULL_OUTPUT` error if `out` is absent and a `CONTAINER_EMPTY`
        /// error if the queue is empty. `out` is untouched on failure.
        pub fn dequeue<T, const N: usize>(
            queue: Option<&mut $queue<T, N>>,
            out: Option<&mut T>,
        ) -> Result<()> {
            let queue = require(queue)?;
            let out = require_out(out)?;
            *out = queue.dequeue()?;
            Ok(())
        }

        #[doc = concat!("Copies the front element of the ", $name, " into `out`.")]
        ///
        /// # Errors
        ///
        /// Same as [`dequeue`]; the queue is never modified.
        pub fn peek<T: Clone, const N: usize>(
            queue: Option<&$queue<T, N>>,
            out: Option<&mut T>,
        ) -> Result<()> {
            let queue = require(queue)?;
            let out = require_out(out)?;
            out.clone_from(queue.peek()?);
            Ok(())
        }

        #[doc = concat!("Returns the number of queued elements, `0` for an absent ", $name, ".")]
        #[must_use]
        pub fn size<T, const N: usize>(queue: Option<&$queue<T, N>>) -> usize {
            queue.map_or(0, |q| q.size())
        }
    };
}

/// Operations on [`FifoQueue`](crate::FifoQueue)
pub mod fifo {
    queue_api!(FifoQueue, "FIFO queue");
}

/// Operations on [`CircularQueue`](crate::CircularQueue)
pub mod circular {
    queue_api!(CircularQueue, "circular queue");
}

/// Operations on [`PriorityQueue`](crate::PriorityQueue)
pub mod priority {
    use sdc_error::Result;

    use super::{require, require_out};
    use crate::collections::{Priority, PriorityQueue};

    /// Resets the priority queue.
    ///
    /// # Errors
    ///
    /// Returns a `NULL_REFERENCE` error if `queue` is absent.
    pub fn init<T, const N: usize>(queue: Option<&mut PriorityQueue<T, N>>) -> Result<()> {
        require(queue)?.init();
        Ok(())
    }

    /// Returns `true` if the priority queue is empty or absent.
    #[must_use]
    pub fn is_empty<T, const N: usize>(queue: Option<&PriorityQueue<T, N>>) -> bool {
        queue.is_none_or(PriorityQueue::is_empty)
    }

    /// Returns `true` if the priority queue is full or absent.
    #[must_use]
    pub fn is_full<T, const N: usize>(queue: Option<&PriorityQueue<T, N>>) -> bool {
        queue.is_none_or(PriorityQueue::is_full)
    }

    /// Inserts `element` with `priority`.
    ///
    /// # Errors
    ///
    /// Returns a `NULL_REFERENCE` error if `queue` is absent and a
    /// `CAPACITY_EXCEEDED` error if it is full.
    pub fn enqueue<T, const N: usize>(
        queue: Option<&mut PriorityQueue<T, N>>,
        element: T,
        priority: Priority,
    ) -> Result<()> {
        require(queue)?.enqueue(element, priority)
    }

    /// Removes the highest-priority entry into the two output locations.
    ///
    /// # Errors
    ///
    /// Returns a `NULL_REFERENCE` error if `queue` is absent, a
    /// `NULL_OUTPUT` error if either output is absent and a
    /// `CONTAINER_EMPTY` error if the queue is empty. Outputs are untouched
    /// on failure.
    pub fn dequeue<T, const N: usize>(
        queue: Option<&mut PriorityQueue<T, N>>,
        out_element: Option<&mut T>,
        out_priority: Option<&mut Priority>,
    ) -> Result<()> {
        let queue = require(queue)?;
        let out_element = require_out(out_element)?;
        let out_priority = require_out(out_priority)?;

        let (element, priority) = queue.dequeue()?;
        *out_element = element;
        *out_priority = priority;
        Ok(())
    }

    /// Copies the highest-priority entry into the two output locations.
    ///
    /// # Errors
    ///
    /// Same as [`dequeue`]; the queue is never modified.
    pub fn peek<T: Clone, const N: usize>(
        queue: Option<&PriorityQueue<T, N>>,
        out_element: Option<&mut T>,
        out_priority: Option<&mut Priority>,
    ) -> Result<()> {
        let queue = require(queue)?;
        let out_element = require_out(out_element)?;
        let out_priority = require_out(out_priority)?;

        let (element, priority) = queue.peek()?;
        out_element.clone_from(element);
        *out_priority = priority;
        Ok(())
    }

    /// Returns the number of queued entries, `0` for an absent queue.
    #[must_use]
    pub fn size<T, const N: usize>(queue: Option<&PriorityQueue<T, N>>) -> usize {
        queue.map_or(0, PriorityQueue::size)
    }
}

/// Operations on [`IntrusiveList`](crate::IntrusiveList)
pub mod list {
    use sdc_error::{Error, Result};

    use super::require;
    use crate::collections::{IntrusiveList, Node};

    fn require_node<'a, T>(node: Option<&'a Node<'a, T>>) -> Result<&'a Node<'a, T>> {
        node.ok_or(Error::null_node("List node reference is absent"))
    }

    /// Makes `node` the single, payload-less head of `list`.
    ///
    /// # Errors
    ///
    /// Returns a `NULL_REFERENCE` error if `list` is absent, a `NULL_NODE`
    /// error if `node` is absent and a `NODE_ALREADY_LINKED` error if
    /// `node` belongs to another list.
    pub fn init<'a, T>(
        list: Option<&mut IntrusiveList<'a, T>>,
        node: Option<&'a Node<'a, T>>,
    ) -> Result<()> {
        let list = require(list)?;
        list.init(require_node(node)?)
    }

    /// Links `node` in front of the head.
    ///
    /// # Errors
    ///
    /// Returns a `NULL_REFERENCE` error if `list` is absent, a `NULL_NODE`
    /// error if `node` is absent and a `NODE_ALREADY_LINKED` error if
    /// `node` is already a list member.
    pub fn insert_at_head<'a, T>(
        list: Option<&mut IntrusiveList<'a, T>>,
        node: Option<&'a Node<'a, T>>,
    ) -> Result<()> {
        let list = require(list)?;
        list.insert_at_head(require_node(node)?)
    }

    /// Links `node` after the last node.
    ///
    /// # Errors
    ///
    /// Same as [`insert_at_head`].
    pub fn insert_at_tail<'a, T>(
        list: Option<&mut IntrusiveList<'a, T>>,
        node: Option<&'a Node<'a, T>>,
    ) -> Result<()> {
        let list = require(list)?;
        list.insert_at_tail(require_node(node)?)
    }

    /// Unlinks the head node.
    ///
    /// # Errors
    ///
    /// Returns a `NULL_REFERENCE` error if `list` is absent and a
    /// `CONTAINER_EMPTY` error if it is empty.
    pub fn delete_at_head<T>(list: Option<&mut IntrusiveList<'_, T>>) -> Result<()> {
        require(list)?.delete_at_head().map(|_| ())
    }

    /// Unlinks the last node.
    ///
    /// # Errors
    ///
    /// Same as [`delete_at_head`].
    pub fn delete_at_tail<T>(list: Option<&mut IntrusiveList<'_, T>>) -> Result<()> {
        require(list)?.delete_at_tail().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{CircularQueue, FifoQueue, IntrusiveList, Node, PriorityQueue};

    #[test]
    fn test_absent_container_queries_degrade() {
        assert!(fifo::is_empty(None::<&FifoQueue<u8, 2>>));
        assert!(fifo::is_full(None::<&FifoQueue<u8, 2>>));
        assert_eq!(fifo::size(None::<&FifoQueue<u8, 2>>), 0);

        assert!(circular::is_empty(None::<&CircularQueue<u8, 2>>));
        assert!(circular::is_full(None::<&CircularQueue<u8, 2>>));
        assert_eq!(circular::size(None::<&CircularQueue<u8, 2>>), 0);

        assert!(priority::is_empty(None::<&PriorityQueue<u8, 2>>));
        assert!(priority::is_full(None::<&PriorityQueue<u8, 2>>));
        assert_eq!(priority::size(None::<&PriorityQueue<u8, 2>>), 0);
    }

    #[test]
    fn test_absent_container_operations_fail() {
        let mut out = 0u8;
        let mut prio = 0;

        assert!(fifo::init(None::<&mut FifoQueue<u8, 2>>).unwrap_err().is_null_reference());
        assert!(fifo::enqueue(None::<&mut FifoQueue<u8, 2>>, 1).unwrap_err().is_null_reference());
        assert!(
            circular::dequeue(None::<&mut CircularQueue<u8, 2>>, Some(&mut out))
                .unwrap_err()
                .is_null_reference()
        );
        assert!(
            priority::peek(None::<&PriorityQueue<u8, 2>>, Some(&mut out), Some(&mut prio))
                .unwrap_err()
                .is_null_reference()
        );
        assert!(list::delete_at_tail(None::<&mut IntrusiveList<'_, u8>>)
            .unwrap_err()
            .is_null_reference());
    }

    #[test]
    fn test_absent_output_leaves_queue_intact() -> Result<()> {
        let mut queue = FifoQueue::<u8, 2>::new();
        fifo::enqueue(Some(&mut queue), 5)?;

        let err = fifo::dequeue(Some(&mut queue), None).unwrap_err();
        assert_eq!(err.code, sdc_error::codes::NULL_OUTPUT);
        assert_eq!(fifo::size(Some(&queue)), 1);

        let mut pq = PriorityQueue::<u8, 2>::new();
        priority::enqueue(Some(&mut pq), 1, 3)?;
        let mut out = 0u8;
        assert!(priority::dequeue(Some(&mut pq), Some(&mut out), None).is_err());
        assert_eq!(priority::size(Some(&pq)), 1);
        assert_eq!(out, 0);

        Ok(())
    }

    #[test]
    fn test_peek_writes_without_removing() -> Result<()> {
        let mut queue = CircularQueue::<u8, 2>::new();
        circular::enqueue(Some(&mut queue), 9)?;

        let mut out = 0u8;
        circular::peek(Some(&queue), Some(&mut out))?;
        assert_eq!(out, 9);
        assert_eq!(circular::size(Some(&queue)), 1);

        let mut pq = PriorityQueue::<u8, 4>::new();
        priority::enqueue(Some(&mut pq), 1, 1)?;
        priority::enqueue(Some(&mut pq), 2, 20)?;
        let mut prio = 0;
        priority::peek(Some(&pq), Some(&mut out), Some(&mut prio))?;
        assert_eq!((out, prio), (2, 20));
        assert_eq!(priority::size(Some(&pq)), 2);

        Ok(())
    }

    #[test]
    fn test_empty_failure_leaves_output_untouched() {
        let mut queue = FifoQueue::<u8, 2>::new();
        let mut out = 42u8;
        assert!(fifo::dequeue(Some(&mut queue), Some(&mut out)).unwrap_err().is_container_empty());
        assert!(fifo::peek(Some(&queue), Some(&mut out)).unwrap_err().is_container_empty());
        assert_eq!(out, 42);
    }

    #[test]
    fn test_list_absent_node() -> Result<()> {
        let a = Node::new(1u8);
        let mut chain = IntrusiveList::new();

        let err = list::init(Some(&mut chain), None).unwrap_err();
        assert_eq!(err.code, sdc_error::codes::NULL_NODE);
        assert!(list::insert_at_head(Some(&mut chain), None).is_err());
        assert!(list::insert_at_tail(Some(&mut chain), None).is_err());

        list::init(Some(&mut chain), Some(&a))?;
        list::delete_at_head(Some(&mut chain))?;
        assert!(list::delete_at_head(Some(&mut chain)).unwrap_err().is_container_empty());

        Ok(())
    }
}
