//! Line formatting and writing

use crate::{Format, Level, LogConfig};
use std::io::Write;

/// A single log event
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub target: &'a str,
    pub message: &'a str,
}

/// Format a record as one line (without trailing newline).
///
/// `now` is passed in so formatting stays deterministic under test.
pub fn format_record(
    record: &Record<'_>,
    config: &LogConfig,
    now: chrono::DateTime<chrono::Utc>,
) -> String {
    match config.format {
        Format::Pretty => pretty(record, config, now),
        Format::Compact => compact(record, config, now),
        Format::Json => json(record, config, now),
    }
}

/// Write a record to stderr
pub fn emit(record: &Record<'_>, config: &LogConfig) {
    let line = format_record(record, config, chrono::Utc::now());
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}", line);
}

fn pretty(record: &Record<'_>, config: &LogConfig, now: chrono::DateTime<chrono::Utc>) -> String {
    let mut line = String::new();

    if config.timestamps {
        line.push_str(&now.format("%Y-%m-%d %H:%M:%S%.3f ").to_string());
    }

    #[cfg(feature = "color")]
    if config.color {
        line.push_str(&format!("{:5} ", record.level.colored()));
    } else {
        line.push_str(&format!("{:5} ", record.level.as_str()));
    }
    #[cfg(not(feature = "color"))]
    line.push_str(&format!("{:5} ", record.level.as_str()));

    if config.module_path && !record.target.is_empty() {
        line.push_str(&format!("[{}] ", record.target));
    }

    line.push_str(record.message);
    line
}

fn compact(record: &Record<'_>, config: &LogConfig, now: chrono::DateTime<chrono::Utc>) -> String {
    let mut line = String::new();

    if config.timestamps {
        line.push_str(&now.format("%H:%M:%S ").to_string());
    }

    line.push(record.level.as_str().chars().next().unwrap_or('?'));
    line.push(' ');

    if config.module_path && !record.target.is_empty() {
        line.push_str(record.target);
        line.push_str(": ");
    }

    line.push_str(record.message);
    line
}

#[cfg(feature = "json")]
fn json(record: &Record<'_>, _config: &LogConfig, now: chrono::DateTime<chrono::Utc>) -> String {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Entry<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let entry = Entry {
        timestamp: now.to_rfc3339(),
        level: record.level.as_str(),
        target: record.target,
        message: record.message,
    };

    serde_json::to_string(&entry).unwrap_or_default()
}

// JSON lines need serde_json; without the feature the compact layout is used.
#[cfg(not(feature = "json"))]
fn json(record: &Record<'_>, config: &LogConfig, now: chrono::DateTime<chrono::Utc>) -> String {
    compact(record, config, now)
}
