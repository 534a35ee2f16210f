// SDC - sdc-error
// Module: SDC Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Unified error handling for the static data containers
///
/// One error type covers every failure a container can report: an absent
/// reference, an exhausted capacity and an empty container.
use core::fmt;

use crate::{codes, kinds, FromError, ToErrorCategory};

/// `Error` categories for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Absent container, node or output reference
    Parameter = 1,
    /// Container is at full capacity
    Capacity  = 2,
    /// Operation not valid in the container's current state
    State     = 3,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// SDC `Error` type
///
/// Categorised error with a numeric code and a static message. It is `Copy`
/// and never allocates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Generic absent-reference error
    pub const NULL_REFERENCE: Self = Self::new(
        ErrorCategory::Parameter,
        codes::NULL_REFERENCE,
        "Container reference is absent",
    );
    /// Generic empty-container error
    pub const CONTAINER_EMPTY: Self = Self::new(
        ErrorCategory::State,
        codes::CONTAINER_EMPTY,
        "Container is empty",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an absent container reference error
    #[must_use]
    pub const fn null_reference(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parameter, codes::NULL_REFERENCE, message)
    }

    /// Create an absent output location error
    #[must_use]
    pub const fn null_output(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parameter, codes::NULL_OUTPUT, message)
    }

    /// Create an absent list node error
    #[must_use]
    pub const fn null_node(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parameter, codes::NULL_NODE, message)
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Create an empty container error
    #[must_use]
    pub const fn container_empty(message: &'static str) -> Self {
        Self::new(ErrorCategory::State, codes::CONTAINER_EMPTY, message)
    }

    /// Create a node already linked error
    #[must_use]
    pub const fn node_already_linked(message: &'static str) -> Self {
        Self::new(ErrorCategory::State, codes::NODE_ALREADY_LINKED, message)
    }

    /// Create a lock contended error
    #[must_use]
    pub const fn lock_contended(message: &'static str) -> Self {
        Self::new(ErrorCategory::State, codes::LOCK_CONTENDED, message)
    }

    /// Check if this is an absent container reference error
    #[must_use]
    pub const fn is_null_reference(&self) -> bool {
        self.code == codes::NULL_REFERENCE
    }

    /// Check if this is an absent reference error of any kind
    #[must_use]
    pub const fn is_parameter_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Parameter)
    }

    /// Check if this is a capacity exceeded error
    #[must_use]
    pub const fn is_capacity_exceeded(&self) -> bool {
        self.code == codes::CAPACITY_EXCEEDED
    }

    /// Check if this is an empty container error
    #[must_use]
    pub const fn is_container_empty(&self) -> bool {
        self.code == codes::CONTAINER_EMPTY
    }

    /// Check if this is a node already linked error
    #[must_use]
    pub const fn is_node_already_linked(&self) -> bool {
        self.code == codes::NODE_ALREADY_LINKED
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}

impl FromError<Self> for Error {
    fn from_error(error: Self) -> Self {
        error
    }
}

// -- From<kinds::X> for Error implementations --
impl From<kinds::NullReferenceError> for Error {
    fn from(_e: kinds::NullReferenceError) -> Self {
        Self::NULL_REFERENCE
    }
}

impl From<kinds::CapacityExceededError> for Error {
    fn from(_e: kinds::CapacityExceededError) -> Self {
        Self::capacity_exceeded("Container capacity exceeded")
    }
}

impl From<kinds::ContainerEmptyError> for Error {
    fn from(_e: kinds::ContainerEmptyError) -> Self {
        Self::CONTAINER_EMPTY
    }
}

impl From<kinds::NodeAlreadyLinkedError> for Error {
    fn from(_e: kinds::NodeAlreadyLinkedError) -> Self {
        Self::node_already_linked("Node is already linked into a list")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
