// SDC - sdc-error
// Module: SDC Error Kinds
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Zero-sized error kinds, one per failure cause.
//!
//! Each kind converts into [`crate::Error`] with the matching category and
//! code, which lets call sites write `Err(ContainerEmptyError.into())`.

use core::fmt::{self, Display};

/// A required container, node or output reference was absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullReferenceError;
impl Display for NullReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Null reference")
    }
}

/// Enqueue attempted on a full container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceededError;
impl Display for CapacityExceededError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity exceeded")
    }
}

/// Dequeue, peek or delete attempted on an empty container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerEmptyError;
impl Display for ContainerEmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Container is empty")
    }
}

/// Insert attempted with a node that already belongs to a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeAlreadyLinkedError;
impl Display for NodeAlreadyLinkedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node already linked")
    }
}

/// Create a null reference error kind
#[must_use]
pub const fn null_reference_error() -> NullReferenceError {
    NullReferenceError
}

/// Create a capacity exceeded error kind
#[must_use]
pub const fn capacity_exceeded_error() -> CapacityExceededError {
    CapacityExceededError
}

/// Create a container empty error kind
#[must_use]
pub const fn container_empty_error() -> ContainerEmptyError {
    ContainerEmptyError
}

/// Create a node already linked error kind
#[must_use]
pub const fn node_already_linked_error() -> NodeAlreadyLinkedError {
    NodeAlreadyLinkedError
}
