//! Prelude module for sdc-sync
//!
//! Shared imports for the synchronization modules in both std and no_std
//! builds.

pub use core::{
    cell::UnsafeCell,
    fmt,
    hint::spin_loop,
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicBool, Ordering},
};

pub use sdc_error::{codes, Error, ErrorCategory, Result};

pub use crate::{SdcMutex as Mutex, SdcMutexGuard as MutexGuard};
