//! Rostrum logging
//!
//! Small logging layer shared by the Rostrum crates. Records go to stderr in
//! JSON, pretty or compact form; the level and layout come from the
//! environment and can be changed at runtime.
//!
//! # Usage
//!
//! ```rust
//! use rostrum_log::{debug, info, warn};
//!
//! debug!("Building document");
//! info!("Wrote {} paths", 14);
//! let host = "pet store";
//! warn!(target: "rostrum::swagger", "Omitting basePath for host {:?}", host);
//! ```
//!
//! # Environment Variables
//!
//! - `ROSTRUM_DEBUG=1` - Shorthand for `ROSTRUM_LOG_LEVEL=debug`
//! - `ROSTRUM_LOG_LEVEL=trace|debug|info|warn|error|off` - Minimum level (default `warn`)
//! - `ROSTRUM_LOG_FORMAT=pretty|json|compact` - Output layout (default `json`)
//! - `ROSTRUM_LOG_COLOR=1|0` - Colored level names in pretty output
//! - `ROSTRUM_LOG_TIMESTAMPS=1|0` - Include timestamps
//! - `ROSTRUM_LOG_MODULE=1|0` - Include the record target

mod level;
pub mod output;

pub use level::{Format, Level};
pub use output::{format_record, Record};

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU8, Ordering};

/// Current minimum level; `u8::MAX` until the environment has been read.
static LEVEL: AtomicU8 = AtomicU8::new(u8::MAX);

static CONFIG: Lazy<LogConfig> = Lazy::new(|| {
    let config = LogConfig::from_env();
    let _ = LEVEL.compare_exchange(
        u8::MAX,
        config.level as u8,
        Ordering::SeqCst,
        Ordering::SeqCst,
    );
    config
});

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Minimum level written
    pub level: Level,
    pub format: Format,
    /// Colored level names (pretty format, `color` feature)
    pub color: bool,
    pub timestamps: bool,
    /// Include the record target
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Warn,
            format: Format::Json,
            color: false,
            timestamps: true,
            module_path: true,
        }
    }
}

impl LogConfig {
    /// Read the configuration from `ROSTRUM_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key).map(|v| {
                let v = v.trim().to_lowercase();
                v == "1" || v == "true" || v == "yes"
            })
        };
        let defaults = Self::default();

        let debug = flag("ROSTRUM_DEBUG").unwrap_or(false);
        let level = lookup("ROSTRUM_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { defaults.level });
        let format = lookup("ROSTRUM_LOG_FORMAT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.format);
        let color = flag("ROSTRUM_LOG_COLOR")
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());

        Self {
            level,
            format,
            color,
            timestamps: flag("ROSTRUM_LOG_TIMESTAMPS").unwrap_or(defaults.timestamps),
            module_path: flag("ROSTRUM_LOG_MODULE").unwrap_or(defaults.module_path),
        }
    }
}

/// Read the environment now instead of on the first record.
pub fn init() {
    Lazy::force(&CONFIG);
}

/// Configuration read from the environment
pub fn config() -> &'static LogConfig {
    &CONFIG
}

/// Current minimum level
pub fn current_level() -> Level {
    let raw = LEVEL.load(Ordering::Relaxed);
    if raw == u8::MAX {
        return config().level;
    }
    Level::from_u8(raw)
}

/// Change the minimum level at runtime
pub fn set_level(level: Level) {
    init();
    LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Apply command line verbosity flags; `quiet` wins over `verbose`.
pub fn set_verbosity(verbose: bool, quiet: bool) {
    if quiet {
        set_level(Level::Error);
    } else if verbose {
        set_level(Level::Debug);
    }
}

#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    level != Level::Off && level >= current_level()
}

/// Write a record if its level is enabled.
#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    if !is_level_enabled(level) {
        return;
    }
    output::emit(
        &Record {
            level,
            target,
            message,
        },
        config(),
    );
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($level) {
            $crate::log($level, $target, &format!($($arg)+));
        }
    };
    ($level:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($level) {
            $crate::log($level, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a trace message.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Trace, $($arg)+) };
}

/// Log a debug message.
///
/// Enabled by `ROSTRUM_DEBUG=1`, `ROSTRUM_LOG_LEVEL=debug` or `--verbose`.
///
/// ```rust
/// use rostrum_log::debug;
///
/// let path = "/pet/{petId}";
/// debug!(target: "rostrum::swagger", "Building API object for {}", path);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Debug, $($arg)+) };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Info, $($arg)+) };
}

/// Log a warning message.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Warn, $($arg)+) };
}

/// Log an error message.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__log!($crate::Level::Error, $($arg)+) };
}

#[cfg(feature = "tracing")]
pub mod tracing_compat {
    //! Tracing subscriber honouring the `ROSTRUM_*` level.

    use super::*;

    /// Subscriber filtered at the current Rostrum level unless `RUST_LOG` is set.
    pub fn subscriber() -> impl tracing::Subscriber {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(current_level().filter_directive()));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(config().color))
    }
}
