//! Console logging
//!
//! In the browser messages go straight to `console.log`; native builds
//! (tests, tooling) route them through the `log` facade instead, since
//! web-sys imports are not callable outside wasm32.
//!
//! Usage:
//! ```rust
//! use gravity_bridge::{bridge_log, debug_log};
//!
//! bridge_log!("bodies: {}", 3);
//! let debug = false;
//! debug_log!(debug, "only printed when debug is on");
//! ```

/// Log a formatted message unconditionally.
#[macro_export]
macro_rules! bridge_log {
    ($($arg:tt)*) => {{
        $crate::utils::log::emit(&format!($($arg)*));
    }};
}

/// Log a formatted message only when `$enabled` is true.
#[macro_export]
macro_rules! debug_log {
    ($enabled:expr, $($arg:tt)*) => {{
        if $enabled {
            $crate::utils::log::emit(&format!($($arg)*));
        }
    }};
}

pub fn emit(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ::log::debug!("{message}");
    }
}
