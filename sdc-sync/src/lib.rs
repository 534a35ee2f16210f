// SDC - sdc-sync
// Module: Synchronization Primitives
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![no_std]
#![doc = "no_std spin mutex used to share static data containers between threads of control."]
#![warn(clippy::missing_panics_doc)]

#[cfg(feature = "std")]
extern crate std;

pub mod mutex;
pub mod prelude;

// Kani proofs, excluded during coverage builds
#[cfg(all(not(coverage), any(doc, kani)))]
pub mod verify;

pub use mutex::*;
