//! Logging shims.
//!
//! Forward to `tracing` when the `tracing` feature is on and expand to
//! nothing otherwise, so call sites stay free of `cfg` attributes.

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        { ::tracing::trace!($($arg)*); }
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        { ::tracing::debug!($($arg)*); }
    };
}

macro_rules! warn_unknown {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        { ::tracing::warn!($($arg)*); }
    };
}

pub(crate) use {debug, trace, warn_unknown};
