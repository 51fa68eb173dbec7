//! Logging shims: forward to `tracing` when the `logs` feature is on,
//! compile to nothing otherwise.

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logs")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logs")]
        tracing::trace!($($arg)*);
    };
}
