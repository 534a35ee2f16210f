// SDC - sdc-foundation
// Module: IntrusiveList - Non-owning singly linked list over caller nodes
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Intrusive singly linked list.
//!
//! The list never allocates and never copies nodes. Callers own every
//! [`Node`] (on the stack, in a `static`, in an arena) and lend it to the
//! list by shared reference; links live in `Cell`s so the list can relink
//! nodes it only borrows. Nodes removed from a list are handed back
//! unlinked and may be inserted again.
//!
//! ```
//! use sdc_foundation::{IntrusiveList, Node};
//!
//! let a = Node::empty();
//! let b = Node::new(2u32);
//! let c = Node::new(3u32);
//!
//! let mut list = IntrusiveList::new();
//! list.init(&a)?;
//! list.insert_at_head(&b)?;
//! list.insert_at_tail(&c)?;
//!
//! let payloads: Vec<Option<u32>> = list.iter().map(|n| n.data()).collect();
//! assert_eq!(payloads, [Some(2), None, Some(3)]);
//! # Ok::<(), sdc_error::Error>(())
//! ```

use core::cell::Cell;
use core::fmt;
use core::ptr;

use sdc_error::{Error, Result};

/// A caller-owned list node carrying an optional payload.
pub struct Node<'a, T> {
    data: Cell<Option<T>>,
    next: Cell<Option<&'a Node<'a, T>>>,
    linked: Cell<bool>,
}

impl<'a, T> Node<'a, T> {
    /// Creates an unlinked node holding `data`.
    #[inline]
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self {
            data: Cell::new(Some(data)),
            next: Cell::new(None),
            linked: Cell::new(false),
        }
    }

    /// Creates an unlinked node with no payload.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: Cell::new(None),
            next: Cell::new(None),
            linked: Cell::new(false),
        }
    }

    /// Replaces the payload.
    #[inline]
    pub fn set_data(&self, data: T) {
        self.data.set(Some(data));
    }

    /// Takes the payload out, leaving the node payload-less.
    #[inline]
    pub fn take_data(&self) -> Option<T> {
        self.data.take()
    }

    /// Returns the node following this one, if any.
    #[inline]
    #[must_use]
    pub fn next(&self) -> Option<&'a Node<'a, T>> {
        self.next.get()
    }

    /// Returns `true` while the node is a member of a list.
    #[inline]
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.linked.get()
    }

    fn unlink(&self) {
        self.next.set(None);
        self.linked.set(false);
    }
}

impl<T: Copy> Node<'_, T> {
    /// Returns a copy of the payload.
    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<T> {
        self.data.get()
    }
}

impl<T> Default for Node<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let next = self.next.get();
        f.debug_struct("Node")
            .field("linked", &self.linked.get())
            .field("has_next", &next.is_some())
            .finish_non_exhaustive()
    }
}

/// A singly linked list of borrowed [`Node`]s.
///
/// # Invariants
///
/// 1. The chain from `head` is acyclic and its last node has no `next`
/// 2. Every node reachable from `head` is marked linked
pub struct IntrusiveList<'a, T> {
    head: Option<&'a Node<'a, T>>,
}

impl<'a, T> IntrusiveList<'a, T> {
    /// Creates a list with no head.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Makes `node` the single, payload-less head of this list.
    ///
    /// Any nodes previously in this list are unlinked first. `node` may
    /// already belong to this list.
    ///
    /// # Errors
    ///
    /// Returns a `NODE_ALREADY_LINKED` error if `node` belongs to another
    /// list.
    pub fn init(&mut self, node: &'a Node<'a, T>) -> Result<()> {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::list_walk("init").entered();

        if node.is_linked() && !self.contains(node) {
            sdc_trace!("IntrusiveList init rejected: node belongs to another list");
            return Err(Error::node_already_linked("IntrusiveList init node is linked elsewhere"));
        }

        self.clear();
        node.data.set(None);
        node.next.set(None);
        node.linked.set(true);
        self.head = Some(node);

        Ok(())
    }

    /// Unlinks every node and leaves the list headless.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            current = node.next.get();
            node.unlink();
        }
    }

    /// Links `node` in front of the current head. O(1).
    ///
    /// # Errors
    ///
    /// Returns a `NODE_ALREADY_LINKED` error if `node` is a member of a list.
    pub fn insert_at_head(&mut self, node: &'a Node<'a, T>) -> Result<()> {
        Self::claim(node)?;
        node.next.set(self.head);
        self.head = Some(node);
        Ok(())
    }

    /// Links `node` after the current last node. O(n).
    ///
    /// # Errors
    ///
    /// Returns a `NODE_ALREADY_LINKED` error if `node` is a member of a list.
    pub fn insert_at_tail(&mut self, node: &'a Node<'a, T>) -> Result<()> {
        Self::claim(node)?;
        node.next.set(None);

        match self.last() {
            Some(last) => last.next.set(Some(node)),
            None => self.head = Some(node),
        }
        Ok(())
    }

    /// Unlinks and returns the head node. O(1).
    ///
    /// # Errors
    ///
    /// Returns a `CONTAINER_EMPTY` error if the list is empty.
    pub fn delete_at_head(&mut self) -> Result<&'a Node<'a, T>> {
        let Some(head) = self.head else {
            sdc_trace!("IntrusiveList delete_at_head rejected: empty");
            return Err(Error::container_empty("IntrusiveList is empty"));
        };

        self.head = head.next.get();
        head.unlink();
        Ok(head)
    }

    /// Unlinks and returns the last node. O(n).
    ///
    /// # Errors
    ///
    /// Returns a `CONTAINER_EMPTY` error if the list is empty.
    pub fn delete_at_tail(&mut self) -> Result<&'a Node<'a, T>> {
        let Some(head) = self.head else {
            sdc_trace!("IntrusiveList delete_at_tail rejected: empty");
            return Err(Error::container_empty("IntrusiveList is empty"));
        };

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::list_walk("delete_at_tail").entered();

        let mut prev: Option<&'a Node<'a, T>> = None;
        let mut last = head;
        while let Some(next) = last.next.get() {
            prev = Some(last);
            last = next;
        }

        match prev {
            Some(prev) => prev.next.set(None),
            None => self.head = None,
        }
        last.unlink();
        Ok(last)
    }

    /// Returns the head node.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&'a Node<'a, T>> {
        self.head
    }

    /// Returns `true` if the list has no head.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes in the list. O(n).
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if `node` is reachable from the head. O(n).
    #[must_use]
    pub fn contains(&self, node: &Node<'a, T>) -> bool {
        self.iter().any(|member| ptr::eq(member, node))
    }

    /// Iterates over the nodes from head to tail.
    #[must_use]
    pub fn iter(&self) -> ListIter<'a, T> {
        ListIter { current: self.head }
    }

    fn claim(node: &Node<'a, T>) -> Result<()> {
        if node.is_linked() {
            sdc_trace!("IntrusiveList insert rejected: node already linked");
            return Err(Error::node_already_linked("IntrusiveList node is already linked"));
        }
        node.linked.set(true);
        Ok(())
    }

    fn last(&self) -> Option<&'a Node<'a, T>> {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::list_walk("insert_at_tail").entered();

        self.iter().last()
    }
}

impl<T> Drop for IntrusiveList<'_, T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for IntrusiveList<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IntrusiveList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntrusiveList").field("len", &self.len()).finish()
    }
}

impl<'a, T> IntoIterator for &IntrusiveList<'a, T> {
    type Item = &'a Node<'a, T>;
    type IntoIter = ListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the nodes of an [`IntrusiveList`], head to tail.
pub struct ListIter<'a, T> {
    current: Option<&'a Node<'a, T>>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a Node<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.get();
        Some(node)
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_relinked_node_rejected() {
        let a = Node::new(1u8);
        let b = Node::new(2u8);
        let mut list = IntrusiveList::new();

        assert!(list.insert_at_head(&a).is_ok());
        assert!(list.insert_at_tail(&b).is_ok());
        assert!(list.insert_at_head(&b).is_err());
        assert!(list.insert_at_tail(&a).is_err());
        assert!(list.len() == 2);
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_delete_unlinks() {
        let a = Node::new(1u8);
        let b = Node::new(2u8);
        let mut list = IntrusiveList::new();
        let _ = list.insert_at_head(&a);
        let _ = list.insert_at_head(&b);

        let from_tail: bool = kani::any();
        let removed = if from_tail { list.delete_at_tail() } else { list.delete_at_head() };
        let removed = removed.ok();
        assert!(removed.is_some());
        if let Some(node) = removed {
            assert!(!node.is_linked());
            assert!(node.next().is_none());
        }
        assert!(list.len() == 1);
    }
}
