//! Append-only result log.
//!
//! One line per completed round, flushed immediately so records survive
//! abrupt termination. A logger that failed to open degrades to a silent
//! no-op; logging never affects gameplay. The underlying file handle is
//! released when the logger drops at session end.
//!
//! Line format (comma-space separated, unescaped, kept for compatibility
//! with existing logs):
//!
//! ```text
//! 2024-03-01 14:22:05, 1-100, 42, 6, WIN, 3.14
//! ```

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::round::RoundConfig;

/// One completed round, as it appears in the log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Local wall-clock time at which the round ended.
    pub timestamp: DateTime<Local>,
    /// Lower bound of the round's range.
    pub min: i32,
    /// Upper bound of the round's range.
    pub max: i32,
    /// The drawn target.
    pub target: i32,
    /// In-range guesses taken.
    pub attempts: u32,
    /// Whether the target was hit before attempts ran out.
    pub won: bool,
    /// Wall-clock duration of the round.
    pub elapsed_seconds: f64,
}

impl LogRecord {
    /// Build a record for a round that just ended, stamped with the
    /// current local time.
    #[must_use]
    pub fn now(config: &RoundConfig, target: i32, attempts: u32, won: bool, elapsed_seconds: f64) -> Self {
        Self {
            timestamp: Local::now(),
            min: config.min,
            max: config.max,
            target,
            attempts,
            won,
            elapsed_seconds,
        }
    }

    fn outcome_label(&self) -> &'static str {
        if self.won {
            "WIN"
        } else {
            "LOSE"
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}-{}, {}, {}, {}, {:.2}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.min,
            self.max,
            self.target,
            self.attempts,
            self.outcome_label(),
            self.elapsed_seconds
        )
    }
}

/// Destination for round records.
///
/// Holds either a live writer or nothing at all; appending to a disabled
/// logger does nothing and reports nothing.
pub struct ResultLogger {
    dest: Option<Box<dyn Write>>,
}

impl ResultLogger {
    /// Open `path` in append mode, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            dest: Some(Box::new(file)),
        })
    }

    /// Wrap an already-open writer. Used by tests to capture output.
    #[must_use]
    pub fn from_writer(writer: impl Write + 'static) -> Self {
        Self {
            dest: Some(Box::new(writer)),
        }
    }

    /// A logger that drops every record.
    #[must_use]
    pub fn disabled() -> Self {
        Self { dest: None }
    }

    /// Whether records will actually be written.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.dest.is_some()
    }

    /// Append one record and flush.
    ///
    /// A disabled logger ignores the record; a write or flush failure
    /// disables the logger for the rest of the session rather than
    /// surfacing to the caller.
    pub fn append(&mut self, record: &LogRecord) {
        let Some(dest) = self.dest.as_mut() else {
            return;
        };

        if writeln!(dest, "{record}").and_then(|()| dest.flush()).is_err() {
            tracing::warn!("result log became unwritable, disabling logging");
            self.dest = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundConfig;
    use chrono::TimeZone;
    use std::fs;
    use std::io::Read;
    use std::sync::{Arc, Mutex};

    fn record(won: bool) -> LogRecord {
        LogRecord {
            timestamp: Local.with_ymd_and_hms(2024, 3, 1, 14, 22, 5).unwrap(),
            min: 1,
            max: 100,
            target: 42,
            attempts: 6,
            won,
            elapsed_seconds: 3.14159,
        }
    }

    #[test]
    fn test_line_format() {
        assert_eq!(record(true).to_string(), "2024-03-01 14:22:05, 1-100, 42, 6, WIN, 3.14");
        assert_eq!(record(false).to_string(), "2024-03-01 14:22:05, 1-100, 42, 6, LOSE, 3.14");
    }

    #[test]
    fn test_negative_bounds_render_unescaped() {
        let mut r = record(true);
        r.min = -5;
        r.max = 5;
        r.target = -3;
        assert_eq!(r.to_string(), "2024-03-01 14:22:05, -5-5, -3, 6, WIN, 3.14");
    }

    #[test]
    fn test_now_copies_round_context() {
        let config = RoundConfig::new(1, 10, 3);
        let r = LogRecord::now(&config, 7, 2, true, 0.5);

        assert_eq!((r.min, r.max, r.target, r.attempts), (1, 10, 7, 2));
        assert!(r.won);
    }

    #[test]
    fn test_append_to_file_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game_log.txt");

        let mut logger = ResultLogger::open(&path).unwrap();
        logger.append(&record(true));
        drop(logger);

        // Append mode: a second session adds lines, never truncates.
        let mut logger = ResultLogger::open(&path).unwrap();
        logger.append(&record(false));
        drop(logger);

        let mut contents = String::new();
        fs::File::open(&path).unwrap().read_to_string(&mut contents).unwrap();

        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("WIN, 3.14"));
        assert!(lines[1].ends_with("LOSE, 3.14"));
    }

    #[test]
    fn test_disabled_logger_is_a_no_op() {
        let mut logger = ResultLogger::disabled();
        assert!(!logger.is_enabled());
        logger.append(&record(true));
    }

    #[test]
    fn test_append_flushes_each_record() {
        #[derive(Clone, Default)]
        struct CountingWriter(Arc<Mutex<(Vec<u8>, usize)>>);

        impl Write for CountingWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().0.extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                self.0.lock().unwrap().1 += 1;
                Ok(())
            }
        }

        let writer = CountingWriter::default();
        let state = Arc::clone(&writer.0);

        let mut logger = ResultLogger::from_writer(writer);
        logger.append(&record(true));
        logger.append(&record(false));

        let (bytes, flushes) = {
            let guard = state.lock().unwrap();
            (guard.0.clone(), guard.1)
        };
        assert_eq!(String::from_utf8(bytes).unwrap().lines().count(), 2);
        assert_eq!(flushes, 2);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let r = record(true);
        let json = serde_json::to_string(&r).unwrap();
        let back: LogRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
