// SDC - sdc-error
// Module: SDC Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for sdc

// Parameter error codes (1000-1999)
/// A required container reference was absent
pub const NULL_REFERENCE: u16 = 1000;
/// A required output location was absent
pub const NULL_OUTPUT: u16 = 1001;
/// A required list node was absent
pub const NULL_NODE: u16 = 1002;

// Capacity error codes (2000-2999)
/// Capacity exceeded
pub const CAPACITY_EXCEEDED: u16 = 2000;

// State error codes (3000-3999)
/// Container is empty
pub const CONTAINER_EMPTY: u16 = 3000;
/// List node is already a member of a list
pub const NODE_ALREADY_LINKED: u16 = 3001;
/// Lock could not be acquired within the spin budget
pub const LOCK_CONTENDED: u16 = 3002;
