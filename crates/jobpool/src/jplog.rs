//! Kernel-style print macros for jobpool.
//!
//! This crate has no downstream use for a full logging facade — it is a
//! small library, not an application — so it skips `log`/`tracing` in
//! favor of level-gated `eprintln!`-alikes, tagged with the current
//! worker id, gated by an environment variable.
//!
//! # Environment Variables
//!
//! - `JOBPOOL_LOG_LEVEL` - off|error|warn|info|debug|trace, or 0-5.
//!   Defaults to `warn`.
//!
//! # Usage
//!
//! ```ignore
//! use jobpool::{jinfo, jdebug};
//!
//! jinfo!("submitted job {}", id);
//! jdebug!("worker picked up job {}", id);
//! ```

use jobpool_core::env::env_get;
use std::cell::Cell;
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Off => "",
            LogLevel::Error => "[ERROR]",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Info => "[INFO] ",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Trace => "[TRACE]",
        }
    }
}

/// Parses `off|error|warn|info|debug|trace` or `0`-`5`, so `jplog` can
/// read its level through `jobpool_core::env::env_get` the same way
/// every other env-driven knob in this crate's sibling does.
impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        Ok(match s.to_lowercase().as_str() {
            "off" | "0" => LogLevel::Off,
            "error" | "1" => LogLevel::Error,
            "warn" | "2" => LogLevel::Warn,
            "info" | "3" => LogLevel::Info,
            "debug" | "4" => LogLevel::Debug,
            "trace" | "5" => LogLevel::Trace,
            _ => return Err(()),
        })
    }
}

static LOG_LEVEL: OnceLock<AtomicU8> = OnceLock::new();

fn log_level() -> LogLevel {
    let cell = LOG_LEVEL.get_or_init(|| {
        let level = env_get("JOBPOOL_LOG_LEVEL", LogLevel::Warn);
        AtomicU8::new(level as u8)
    });
    match cell.load(Ordering::Relaxed) {
        0 => LogLevel::Off,
        1 => LogLevel::Error,
        2 => LogLevel::Warn,
        3 => LogLevel::Info,
        4 => LogLevel::Debug,
        _ => LogLevel::Trace,
    }
}

#[inline]
fn level_enabled(level: LogLevel) -> bool {
    (level as u8) <= (log_level() as u8)
}

thread_local! {
    static WORKER_ID: Cell<Option<u32>> = const { Cell::new(None) };
}

/// Set the current worker id for this thread (called by the worker
/// loop on entry).
pub fn set_worker_id(id: u32) {
    WORKER_ID.with(|w| w.set(Some(id)));
}

fn format_context() -> String {
    match WORKER_ID.with(|w| w.get()) {
        Some(id) => format!("[w{id}]"),
        None => "[w--]".to_string(),
    }
}

#[doc(hidden)]
pub fn _jlog_impl(level: LogLevel, args: std::fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = write!(handle, "{} {} ", level.prefix(), format_context());
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
}

/// Error level log, tagged with the current worker id.
#[macro_export]
macro_rules! jerror {
    ($($arg:tt)*) => {{
        $crate::jplog::_jlog_impl($crate::jplog::LogLevel::Error, format_args!($($arg)*));
    }};
}

/// Warning level log, tagged with the current worker id.
#[macro_export]
macro_rules! jwarn {
    ($($arg:tt)*) => {{
        $crate::jplog::_jlog_impl($crate::jplog::LogLevel::Warn, format_args!($($arg)*));
    }};
}

/// Info level log, tagged with the current worker id.
#[macro_export]
macro_rules! jinfo {
    ($($arg:tt)*) => {{
        $crate::jplog::_jlog_impl($crate::jplog::LogLevel::Info, format_args!($($arg)*));
    }};
}

/// Debug level log, tagged with the current worker id.
#[macro_export]
macro_rules! jdebug {
    ($($arg:tt)*) => {{
        $crate::jplog::_jlog_impl($crate::jplog::LogLevel::Debug, format_args!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!("debug".parse(), Ok(LogLevel::Debug));
        assert_eq!("4".parse(), Ok(LogLevel::Debug));
        assert_eq!("bogus".parse::<LogLevel>(), Err(()));
    }

    #[test]
    fn test_log_level_reads_env_via_env_get() {
        // `env_get` falls back to the default on an unset/invalid var;
        // exercised directly here since `log_level()`'s `OnceLock`
        // means the process-wide level is fixed after first use.
        let level: LogLevel = env_get("__JOBPOOL_JPLOG_TEST_UNSET__", LogLevel::Warn);
        assert_eq!(level, LogLevel::Warn);
    }

    #[test]
    fn test_context_format_without_worker_id() {
        assert_eq!(format_context(), "[w--]");
    }

    #[test]
    fn test_context_format_with_worker_id() {
        set_worker_id(3);
        assert_eq!(format_context(), "[w3]");
    }
}
