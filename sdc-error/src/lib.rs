// SDC - sdc-error
// Module: SDC Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! SDC error handling library
//!
//! Allocation-free error type shared by every static data container. An
//! [`Error`] is a `Copy` triple of category, numeric code and static message,
//! so it can be returned from `no_std` code without touching an allocator.
//!
//! # Error Categories
//!
//! ## Parameter Errors (1000-1999)
//! - Absent container, node or output reference
//!
//! ## Capacity Errors (2000-2999)
//! - Enqueue on a full container
//!
//! ## State Errors (3000-3999)
//! - Dequeue, peek or delete on an empty container
//! - Inserting a list node that is already linked
//!
//! # Usage
//!
//! ```
//! use sdc_error::{codes, kinds, Error, ErrorCategory};
//!
//! let error = Error::capacity_exceeded("FifoQueue capacity exceeded");
//! assert_eq!(error.category, ErrorCategory::Capacity);
//! assert_eq!(error.code, codes::CAPACITY_EXCEEDED);
//!
//! let from_kind: Error = kinds::ContainerEmptyError.into();
//! assert!(from_kind.is_container_empty());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for sdc
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub mod prelude;

// Kani proofs, excluded during coverage builds
#[cfg(all(not(coverage), kani))]
pub mod verify;

pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for container operations.
///
/// Uses [`Error`] as the error type, which keeps it usable in `no_std`
/// environments without an allocator.
pub type Result<T> = core::result::Result<T, Error>;

pub use kinds::{
    CapacityExceededError, ContainerEmptyError, NodeAlreadyLinkedError, NullReferenceError,
};

/// Error conversion trait for converting between error types
pub trait FromError<E> {
    /// Convert from the source error type to the target error type
    fn from_error(error: E) -> Self;
}

/// Error conversion trait for converting to specific error categories
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}
