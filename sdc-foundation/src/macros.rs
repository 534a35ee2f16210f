//! Internal logging macros.
//!
//! The containers report nothing to the outside world except through their
//! `Result`s. When the `tracing` (or `log`) feature is enabled, rejected
//! operations additionally emit a trace-level event; with both off the
//! macros expand to nothing.

/// Emit a trace-level event through `tracing`, or `log` when only that is on.
macro_rules! sdc_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)+);
        }
        #[cfg(all(feature = "log", not(feature = "tracing")))]
        {
            ::log::trace!($($arg)+);
        }
    };
}
