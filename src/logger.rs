//! Log initialization for mediapack binaries
//!
//! Plain text logging goes through `env_logger` with a timestamped format.
//! Setting `MEDIAPACK_LOG_LEVEL=json` (or `json:<level>`) switches to
//! line-delimited JSON, written to stderr or to the file named by
//! `MEDIAPACK_LOG_PATH`.

use chrono::{Local, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

/// JSON logger writing one object per line
#[derive(Debug)]
pub struct JsonLogger {
    level: Level,
    target_file: Mutex<Option<std::fs::File>>,
}

impl JsonLogger {
    /// Create a new JSON logger, appending to `log_path` when given
    pub fn new(level: Level, log_path: Option<String>) -> Self {
        let target_file = log_path
            .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());

        JsonLogger {
            level,
            target_file: Mutex::new(target_file),
        }
    }
}

/// Initialize logging from the `MEDIAPACK_LOG_LEVEL` environment variable
///
/// Defaults to `info` when the variable is unset or unparseable.
pub fn init() {
    let level = env::var("MEDIAPACK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_with_level(&level);
}

/// Initialize logging with an explicit level string
///
/// Accepts the plain level names (`trace` through `error`, plus `off`) and
/// the `json` / `json:<level>` forms for structured output.
pub fn init_with_level(level_str: &str) {
    let (use_json, actual_level) = if let Some(stripped) = level_str.strip_prefix("json:") {
        (true, stripped)
    } else if level_str == "json" {
        (true, "info")
    } else {
        (false, level_str)
    };

    if use_json {
        let level = actual_level.parse::<Level>().unwrap_or(Level::Info);
        let log_path = env::var("MEDIAPACK_LOG_PATH").ok();
        let logger = Box::new(JsonLogger::new(level, log_path));

        if let Err(e) = log::set_boxed_logger(logger) {
            eprintln!("Failed to initialize JSON logger: {e}");
            return;
        }
        log::set_max_level(level.to_level_filter());
        return;
    }

    let level_filter = actual_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);

    // Custom format so plain logs carry a local timestamp and target
    let _ = env_logger::Builder::new()
        .filter_level(level_filter)
        .format(|buf, record| {
            write!(buf, "🎬 ")?;
            write!(
                buf,
                "[{} {} {}] ",
                Local::now().format("%Y-%m-%dT%H:%M:%S%z"),
                record.level(),
                record.target()
            )?;
            writeln!(buf, "{}", record.args())
        })
        .try_init();
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let log_entry = json!({
            "@timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            "@level": record.level().to_string().to_lowercase(),
            "@message": record.args().to_string(),
            "@module": record.target(),
            "@pid": std::process::id(),
        });

        let json_string = format!(
            "{}\n",
            serde_json::to_string(&log_entry).unwrap_or_default()
        );

        // Write to the configured file, falling back to stderr
        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.write_all(json_string.as_bytes());
                let _ = file.flush();
                return;
            }
        }
        let _ = io::stderr().write_all(json_string.as_bytes());
        let _ = io::stderr().flush();
    }

    fn flush(&self) {
        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.flush();
            }
        }
        let _ = io::stderr().flush();
    }
}
