//! A minimal, zero-dependency logging crate for the `letrec` toolchain.
//!
//! Messages go to standard error so that program output on standard out
//! stays clean. The minimum level is process-global and can be set either
//! programmatically or from the `LETREC_LOG` environment variable.
//!
//! # Example
//!
//! ```
//! use letrec_log::{debug, info, trace, Level};
//!
//! letrec_log::set_level(Level::Debug);
//!
//! let rules = 3;
//! info!("substitution holds {} rules", rules);
//! debug!("store cells: {:?}", vec![1, 2, 3]);
//! trace!("this one is filtered out");
//! ```

use std::fmt::{self, Arguments};
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Environment variable consulted by [`init_from_env`].
pub const ENV_VAR: &str = "LETREC_LOG";

/// Severity of a log message, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Failures that abort the current command
    Error = 0,
    /// Suspicious but recoverable situations
    Warn = 1,
    /// High-level progress (phases of a run)
    Info = 2,
    /// Per-construct diagnostics
    Debug = 3,
    /// Every rule, cell and fresh variable
    Trace = 4,
}

impl Level {
    const fn color_code(self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[32m",
            Level::Debug => "\x1b[36m",
            Level::Trace => "\x1b[35m",
        }
    }

    /// Returns the upper-case name of this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    const fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::Error,
            1 => Level::Warn,
            2 => Level::Info,
            3 => Level::Debug,
            _ => Level::Trace,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid log level '{}' (expected error, warn, info, debug or trace)",
            self.input
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name, ignoring case.
    ///
    /// ```
    /// use letrec_log::Level;
    ///
    /// assert_eq!("trace".parse::<Level>(), Ok(Level::Trace));
    /// assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
    /// assert!("loud".parse::<Level>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            _ => Err(ParseLevelError {
                input: s.to_string(),
            }),
        }
    }
}

/// The global logger: a minimum level and a color switch.
pub struct Logger {
    level: AtomicU8,
    colors: AtomicBool,
}

impl Logger {
    const fn new(level: Level) -> Self {
        Logger {
            level: AtomicU8::new(level as u8),
            colors: AtomicBool::new(true),
        }
    }

    /// Sets the minimum level; messages below it are dropped.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Returns the current minimum level.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Turns ANSI colors on or off.
    pub fn set_colors(&self, enabled: bool) {
        self.colors.store(enabled, Ordering::SeqCst);
    }

    /// Returns `true` if a message at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 <= self.level.load(Ordering::Relaxed)
    }

    fn colors(&self) -> bool {
        self.colors.load(Ordering::Relaxed)
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the global logger, creating it at `Level::Warn` on first use.
pub fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(Level::Warn))
}

/// Sets the minimum level of the global logger.
pub fn set_level(level: Level) {
    get_logger().set_level(level);
}

/// Sets the minimum level from a level name.
///
/// # Errors
///
/// Returns a [`ParseLevelError`] if `s` is not a level name; the current
/// level is left unchanged in that case.
pub fn set_level_from_str(s: &str) -> Result<(), ParseLevelError> {
    set_level(s.parse()?);
    Ok(())
}

/// Turns ANSI colors on or off for the global logger.
pub fn set_colors(enabled: bool) {
    get_logger().set_colors(enabled);
}

/// Reads [`ENV_VAR`] and applies it as the minimum level.
///
/// Returns the level that was applied, or `None` when the variable is unset.
///
/// # Errors
///
/// Returns a [`ParseLevelError`] when the variable is set to something that
/// is not a level name.
pub fn init_from_env() -> Result<Option<Level>, ParseLevelError> {
    match std::env::var(ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => {
            let level: Level = value.parse()?;
            set_level(level);
            Ok(Some(level))
        }
        _ => Ok(None),
    }
}

#[doc(hidden)]
pub fn __log_with_target(level: Level, target: &str, args: Arguments) {
    const RESET: &str = "\x1b[0m";

    let logger = get_logger();
    if !logger.enabled(level) {
        return;
    }

    if logger.colors() {
        eprintln!("{}[{level}]{RESET} {target}: {args}", level.color_code());
    } else {
        eprintln!("[{level}] {target}: {args}");
    }
}

/// Logs at an explicit level, tagging the message with the calling module.
///
/// ```
/// use letrec_log::{log, Level};
///
/// log!(level: Level::Info, "inferred {} in {} steps", "int", 4);
/// ```
#[macro_export]
macro_rules! log {
    (level: $level:expr, $($arg:tt)*) => {
        {
            if $crate::get_logger().enabled($level) {
                $crate::__log_with_target(
                    $level,
                    module_path!(),
                    format_args!($($arg)*)
                );
            }
        }
    };
}

/// Logs at [`Level::Error`].
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Error, $($arg)*)
    };
}

/// Logs at [`Level::Warn`].
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Warn, $($arg)*)
    };
}

/// Logs at [`Level::Info`].
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Info, $($arg)*)
    };
}

/// Logs at [`Level::Debug`].
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Debug, $($arg)*)
    };
}

/// Logs at [`Level::Trace`].
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Trace, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert!(Level::Debug < Level::Trace);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
        assert_eq!("Warning".parse::<Level>(), Ok(Level::Warn));
        assert_eq!(" info ".parse::<Level>(), Ok(Level::Info));
        assert_eq!("DEBUG".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("trace".parse::<Level>(), Ok(Level::Trace));
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_parse_error_display() {
        let err = "loud".parse::<Level>().unwrap_err();
        assert!(err.to_string().contains("'loud'"));
    }

    #[test]
    fn test_level_round_trips_through_u8() {
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
            assert_eq!(Level::from_u8(level as u8), level);
        }
    }

    #[test]
    fn test_logger_enabled() {
        let logger = Logger::new(Level::Info);
        assert!(logger.enabled(Level::Error));
        assert!(logger.enabled(Level::Info));
        assert!(!logger.enabled(Level::Debug));

        logger.set_level(Level::Trace);
        assert!(logger.enabled(Level::Trace));
        assert_eq!(logger.level(), Level::Trace);
    }

    #[test]
    fn test_global_logger_singleton() {
        let first = get_logger();
        let second = get_logger();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_set_level_from_str_keeps_level_on_error() {
        let logger = Logger::new(Level::Warn);
        let before = logger.level();
        assert!("nonsense".parse::<Level>().is_err());
        assert_eq!(logger.level(), before);
    }

    #[test]
    fn test_macros_do_not_panic() {
        set_colors(false);
        info!("info {}", 1);
        debug!("debug {:?}", vec![1, 2]);
        trace!("trace");
        warn!("warn");
        error!("error");
    }
}
