//! Formal verification for the spin mutex using Kani.
//!
//! These proofs only run with Kani and are isolated from normal compilation
//! and testing.

#[cfg(any(doc, kani))]
pub mod kani_verification {
    use crate::*;

    /// Verify that mutex creation, locking and unlocking works correctly
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(3))]
    pub fn verify_mutex_new_lock_unlock() {
        let m = SdcMutex::new(10);
        {
            let mut guard = m.lock();
            *guard += 5;
            assert_eq!(*guard, 15);
        }
        let guard = m.lock();
        assert_eq!(*guard, 15);
    }

    /// Verify that a held lock rejects `try_lock` and is released on drop
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(3))]
    pub fn verify_try_lock_exclusion() {
        let m = SdcMutex::new(0u8);
        let guard = m.lock();
        assert!(m.try_lock().is_none());
        drop(guard);
        assert!(m.try_lock().is_some());
    }

    /// Verify that a bounded acquire gives up while the lock is held
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(4))]
    pub fn verify_bounded_lock_fails_when_held() {
        let m = SdcMutex::new(0u8);
        let guard = m.lock();
        let contended = m.lock_bounded(2);
        assert!(contended.is_err());
        drop(guard);
        assert!(m.lock_bounded(2).is_ok());
    }
}
