//! Rolling Logger
//!
//! Installs a `tracing` fmt subscriber whose output lands in a bounded,
//! in-memory circular buffer. Records from the `log` facade are bridged in,
//! and every line is echoed to the browser console (stderr off the web).

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Lines kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 200;

/// One formatted log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub at: DateTime<Utc>,
    pub text: String,
}

impl std::fmt::Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.at.format("%H:%M:%S%.3f"), self.text)
    }
}

/// Circular buffer of the most recent log lines
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn guard(&self) -> MutexGuard<'_, VecDeque<LogLine>> {
        // A panic while holding the lock cannot leave a half-written line behind.
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, text: impl Into<String>) {
        let mut lines = self.guard();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(LogLine {
            at: Utc::now(),
            text: text.into(),
        });
    }

    /// Snapshot, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        self.guard().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Collects one formatted event and commits it to the buffer on drop
pub struct LineWriter {
    buffer: LogBuffer,
    pending: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.pending);
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        echo(text);
        self.buffer.push(text);
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            buffer: self.clone(),
            pending: Vec::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn echo(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn echo(line: &str) {
    eprintln!("{}", line);
}

/// Logger settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: Level,
    pub capacity: usize,
}

impl LoggerConfig {
    /// Build from a level name such as "debug"; unknown names mean INFO
    pub fn from_level_name(name: &str, capacity: usize) -> Self {
        Self {
            level: name.trim().parse().unwrap_or(Level::INFO),
            capacity,
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Logger setup errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    AlreadyInitialized(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::AlreadyInitialized(msg) => write!(f, "Logger already initialized: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Install the global subscriber and return the buffer it writes to
pub fn init_logger(app_name: &str, config: LoggerConfig) -> Result<LogBuffer, LoggerError> {
    let buffer = LogBuffer::new(config.capacity);

    tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(config.level)
        .with_ansi(false)
        .with_target(false)
        // The default timer reads the system clock, which wasm32 does not have.
        .without_time()
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::info!("{} logging started (level {}, {} lines kept)", app_name, config.level, buffer.capacity());
    Ok(buffer)
}
