// SDC - sdc-foundation
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for sdc-foundation
//!
//! One import line for consumers: the containers, their error type and the
//! mutex used to share them.

pub use core::{
    cell::Cell,
    fmt::{self, Debug},
    ptr,
};

pub use sdc_error::{codes, kinds, Error, ErrorCategory, Result};
pub use sdc_sync::{SdcMutex, SdcMutexGuard};

pub use crate::collections::{
    CircularQueue, FifoQueue, IntrusiveList, Node, Priority, PriorityQueue,
};
pub use crate::shared::{
    with_locked, SharedCircularQueue, SharedFifoQueue, SharedPriorityQueue,
};
