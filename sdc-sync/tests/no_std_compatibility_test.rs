//! Test no_std compatibility for sdc-sync
//!
//! Exercises the public surface through the prelude the way a `no_std`
//! consumer would.

#[cfg(test)]
mod tests {
    use sdc_sync::prelude::{codes, Mutex};

    #[test]
    fn test_mutex_operations() {
        let mutex = Mutex::new(42);

        {
            let mut guard = mutex.lock();
            assert_eq!(*guard, 42);
            *guard = 100;
        }

        let guard = mutex.lock();
        assert_eq!(*guard, 100);
    }

    #[test]
    fn test_bounded_lock_error_code() {
        let mutex = Mutex::new([0u8; 4]);
        let _held = mutex.lock();
        match mutex.lock_bounded(4) {
            Ok(_) => panic!("lock acquired while held"),
            Err(e) => assert_eq!(e.code, codes::LOCK_CONTENDED),
        }
    }

    #[test]
    fn test_default_and_debug() {
        let mutex: Mutex<u32> = Mutex::default();
        assert_eq!(*mutex.lock(), 0);
        let rendered = format!("{:?}", mutex);
        assert!(rendered.contains("SdcMutex"));
    }
}
