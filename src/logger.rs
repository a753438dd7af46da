//! Severity-leveled line logger.
//!
//! A [`Logger`] wraps a line-oriented sink and gates four severity channels
//! (error, warning, info, debug) through a [`LevelMask`]. The mask is fixed
//! at construction; each level method is a no-op unless its bit is set.
//!
//! The logger is handed to the caller's move function on every `/move`
//! request, so cloning is cheap and all writes go through a shared sink.

use std::fmt::Display;
use std::io::Write;
use std::ops::{BitOr, BitOrAssign};
use std::sync::{Arc, Mutex, PoisonError};

/// Bitmask of enabled log levels.
///
/// Combine levels with `|`, e.g. `LevelMask::ERROR | LevelMask::DEBUG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelMask(u8);

impl LevelMask {
    /// No levels enabled.
    pub const NONE: Self = Self(0);
    /// Error level.
    pub const ERROR: Self = Self(1);
    /// Warning level.
    pub const WARN: Self = Self(1 << 1);
    /// Info level.
    pub const INFO: Self = Self(1 << 2);
    /// Debug level. Also gates verbatim request-body logging.
    pub const DEBUG: Self = Self(1 << 3);
    /// Error, warning, and info. Debug stays off.
    pub const DEFAULT: Self = Self(Self::ERROR.0 | Self::WARN.0 | Self::INFO.0);
    /// Every level.
    pub const ALL: Self = Self(Self::DEFAULT.0 | Self::DEBUG.0);

    /// Returns true if any bit of `other` is set in this mask.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LevelMask {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BitOr for LevelMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LevelMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A leveled logger over a shared line sink.
///
/// Each level method writes a single line prefixed with the level name
/// (`ERROR`, `WARN`, `INFO`, `DEBUG`) when its bit is enabled. Sink write
/// failures are ignored; logging is best-effort.
///
/// Call sites that need formatting pass `format_args!`:
///
/// ```
/// use battlesnake_server::{LevelMask, Logger};
///
/// let logger = Logger::stdout(LevelMask::DEFAULT);
/// logger.info(format_args!("turn {}", 12));
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
    mask: LevelMask,
}

impl Logger {
    /// Creates a logger writing to `sink`, enabling the levels in `mask`.
    pub fn new(sink: impl Write + Send + 'static, mask: LevelMask) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(sink))),
            mask,
        }
    }

    /// Creates a logger writing to standard output.
    pub fn stdout(mask: LevelMask) -> Self {
        Self::new(std::io::stdout(), mask)
    }

    /// Creates a logger that drops everything.
    pub fn discard() -> Self {
        Self::new(std::io::sink(), LevelMask::NONE)
    }

    /// Returns whether `level` is enabled in this logger's mask.
    #[must_use]
    pub fn enabled(&self, level: LevelMask) -> bool {
        self.mask.contains(level)
    }

    /// Writes a line regardless of the mask.
    pub fn print(&self, msg: impl Display) {
        self.line(format_args!("{msg}"));
    }

    /// Logs at error level.
    pub fn err(&self, msg: impl Display) {
        if self.enabled(LevelMask::ERROR) {
            self.line(format_args!("ERROR {msg}"));
        }
    }

    /// Logs at warning level.
    pub fn warn(&self, msg: impl Display) {
        if self.enabled(LevelMask::WARN) {
            self.line(format_args!("WARN {msg}"));
        }
    }

    /// Logs at info level.
    pub fn info(&self, msg: impl Display) {
        if self.enabled(LevelMask::INFO) {
            self.line(format_args!("INFO {msg}"));
        }
    }

    /// Logs at debug level.
    pub fn debug(&self, msg: impl Display) {
        if self.enabled(LevelMask::DEBUG) {
            self.line(format_args!("DEBUG {msg}"));
        }
    }

    fn line(&self, args: std::fmt::Arguments<'_>) {
        // A poisoned lock only means another writer panicked mid-line;
        // the sink itself is still usable.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(sink, "{args}");
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").field("mask", &self.mask).finish()
    }
}

/// In-memory sink for asserting on log output in tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CaptureSink(Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl CaptureSink {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[cfg(test)]
impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
