use chrono::Local;
use colored::Colorize;
use crossbeam_channel::{Sender, unbounded};
use once_cell::sync::OnceCell;
use std::{fmt, thread};

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        };
        write!(f, "{s}")
    }
}

impl LogLevel {
    fn rank(self) -> u8 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
            LogLevel::Fatal => 4,
        }
    }

    fn tinted(self) -> colored::ColoredString {
        let tag = self.to_string();
        match self {
            LogLevel::Debug => tag.dimmed(),
            LogLevel::Info => tag.green(),
            LogLevel::Warn => tag.yellow(),
            LogLevel::Error => tag.red(),
            LogLevel::Fatal => tag.red().bold(),
        }
    }
}

#[derive(Debug)]
struct LogRecord {
    level: LogLevel,
    message: String,
    timestamp: String,
}

pub struct Logger {
    tx: Sender<LogRecord>, // crossbeam Sender is Send + Sync + Clone
    min_level: LogLevel,
}

static LOGGER: OnceCell<Logger> = OnceCell::new();

pub fn init_logger() {
    init_logger_with_level(LogLevel::Debug);
}

/// Records below `min_level` are dropped before they reach the writer
/// thread.
pub fn init_logger_with_level(min_level: LogLevel) {
    if LOGGER.get().is_some() {
        return;
    }

    let (tx, rx) = unbounded::<LogRecord>();

    thread::Builder::new()
        .name("logger-writer".into())
        .spawn(move || {
            for rec in rx.iter() {
                // [LEVEL] [%d/%m/%Y %H:%M:%S] - message
                eprintln!("[{}] [{}] - {}", rec.level.tinted(), rec.timestamp, rec.message);
            }
        })
        .expect("Failed to spawn logger thread");

    let _ = LOGGER.set(Logger { tx, min_level });
}

fn ensure_init() {
    if LOGGER.get().is_none() {
        init_logger();
    }
}

pub fn log(level: LogLevel, message: impl Into<String>) {
    ensure_init();
    if let Some(logger) = LOGGER.get() {
        if level.rank() < logger.min_level.rank() {
            return;
        }
        let ts = Local::now().format("%d/%m/%Y %H:%M:%S").to_string();
        let _ = logger.tx.send(LogRecord {
            level,
            message: message.into(),
            timestamp: ts,
        });
    }
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log($crate::LogLevel::Debug, format!($($arg)*))
    };
}
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log($crate::LogLevel::Info, format!($($arg)*))
    };
}
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log($crate::LogLevel::Warn, format!($($arg)*))
    };
}
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log($crate::LogLevel::Error, format!($($arg)*))
    };
}
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::log($crate::LogLevel::Fatal, format!($($arg)*))
    };
}
