// SDC - sdc-error
// Module: SDC Error Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for sdc-error
//!
//! Re-exports the core types used by the error modules so that `std` and
//! `no_std` builds share one import list.

pub use core::{
    cmp::{Eq, PartialEq},
    fmt,
    fmt::{Debug, Display},
    str,
};

pub use crate::{codes, kinds, Error, ErrorCategory, ErrorSource, Result};
