//! Logging facade.
//!
//! The resolver, the state transitions and the GPUI binding all log through
//! the macros below, which forward to either [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing). Enable at most one of the two
//! features.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! Levels used across the crate:
//!
//! - `trace_log!`: per-lookup detail (which solution claimed a path, cache hits).
//! - `debug_log!`: state transitions (solution switched, submenu toggled).
//! - `info_log!`: tree registration and engine mount.
//! - `warn_log!`: inert input such as an unknown solution id.
//! - `error_log!`: menu tree loading failures.
//!
//! ```ignore
//! use gpui_menu_navigator::{debug_log, warn_log};
//!
//! debug_log!("Selected solution '{}' for path '{}'", id, path);
//! warn_log!("Ignoring unknown solution id '{}'", id);
//! ```

/// Emit a trace-level message.
///
/// Forwards to `log::trace!` or `tracing::trace!`.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a debug-level message.
///
/// Used for navigation state transitions.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an info-level message.
///
/// Used for tree registration and engine mount.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Emit a warn-level message.
///
/// Used when input is ignored rather than applied.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Emit an error-level message.
///
/// Used when a menu tree fails to load.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}
