// SDC - sdc-sync
// Module: Spin Mutex
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Spin mutex guarding a shared container.

use crate::prelude::{fmt, spin_loop, AtomicBool, Deref, DerefMut, Error, Ordering, Result, UnsafeCell};

/// A simple, non-reentrant spinlock mutex suitable for `no_std` environments.
///
/// This is the external mutual-exclusion layer for the static data
/// containers: the containers themselves carry no synchronization, so a
/// queue shared between an interrupt handler and a main loop (or between
/// threads) is wrapped in an `SdcMutex` instead.
///
/// WARNING: contention is handled by spinning. There is no poisoning and no
/// deadlock detection.
pub struct SdcMutex<T: ?Sized> {
    locked: AtomicBool,
    data: UnsafeCell<T>,
}

/// A guard that provides mutable access to the data protected by an
/// `SdcMutex`.
///
/// When the guard is dropped, the mutex is unlocked.
#[clippy::has_significant_drop]
pub struct SdcMutexGuard<'a, T: ?Sized + 'a> {
    mutex: &'a SdcMutex<T>,
}

/// # Safety
/// Access to the `UnsafeCell` data is protected by the atomic `locked` flag,
/// so only one thread can reach the data at a time (if `T` is `Send`).
unsafe impl<T: ?Sized + Send> Send for SdcMutex<T> {}
/// # Safety
/// All accesses to the data go through the lock (if `T` is `Send`).
unsafe impl<T: ?Sized + Send> Sync for SdcMutex<T> {}

impl<T> SdcMutex<T> {
    /// Creates a new `SdcMutex` protecting the given data.
    #[inline]
    pub const fn new(data: T) -> Self {
        SdcMutex { locked: AtomicBool::new(false), data: UnsafeCell::new(data) }
    }

    /// Consumes the mutex and returns the protected data.
    #[inline]
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }
}

impl<T: ?Sized> SdcMutex<T> {
    /// Acquires the lock, spinning until it is available.
    ///
    /// This function will block the current thread until it is able to acquire
    /// the mutex. Attempting to lock a mutex already held by the current
    /// thread deadlocks.
    #[inline]
    pub fn lock(&self) -> SdcMutexGuard<'_, T> {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            spin_loop();
        }
        SdcMutexGuard { mutex: self }
    }

    /// Attempts to acquire the lock without spinning.
    #[inline]
    pub fn try_lock(&self) -> Option<SdcMutexGuard<'_, T>> {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| SdcMutexGuard { mutex: self })
    }

    /// Acquires the lock, giving up after `max_spins` failed attempts.
    ///
    /// Gives deterministic worst-case waiting for callers that cannot spin
    /// forever, such as interrupt context.
    ///
    /// # Errors
    ///
    /// Returns a `LOCK_CONTENDED` error if the lock is still held after
    /// `max_spins` attempts.
    pub fn lock_bounded(&self, max_spins: usize) -> Result<SdcMutexGuard<'_, T>> {
        for _ in 0..=max_spins {
            if let Some(guard) = self.try_lock() {
                return Ok(guard);
            }
            spin_loop();
        }
        Err(Error::lock_contended("SdcMutex spin budget exhausted"))
    }

    /// Returns a mutable reference to the data without locking.
    ///
    /// The exclusive borrow guarantees no guard is alive.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }

    /// Returns `true` if the lock is currently held.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

impl<T: Default> Default for SdcMutex<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for SdcMutex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_lock() {
            Some(guard) => f.debug_struct("SdcMutex").field("data", &&*guard).finish(),
            None => f.debug_struct("SdcMutex").field("data", &"<locked>").finish(),
        }
    }
}

impl<T: ?Sized> Deref for SdcMutexGuard<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // SAFETY: the guard holds the lock, so access is exclusive
        unsafe { &*self.mutex.data.get() }
    }
}

impl<T: ?Sized> DerefMut for SdcMutexGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: the guard holds the lock, so access is exclusive
        unsafe { &mut *self.mutex.data.get() }
    }
}

impl<T: ?Sized> Drop for SdcMutexGuard<'_, T> {
    #[inline]
    fn drop(&mut self) {
        self.mutex.locked.store(false, Ordering::Release);
    }
}
