//! Environment variable utilities
//!
//! Generic `env_get<T>` function for parsing environment variables with
//! defaults, used by `jobpool`'s log-level knob.
//!
//! # Usage
//!
//! ```ignore
//! use jobpool_core::env::{env_get, env_get_bool};
//!
//! let level: u8 = env_get("JOBPOOL_LOG", 0);
//! let verbose: bool = env_get_bool("JOBPOOL_VERBOSE", false);
//! ```

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Get environment variable as boolean.
///
/// Accepts: "1", "true", "yes", "on" (case-insensitive) as true.
/// Everything else (including unset) returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}
