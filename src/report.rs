//! Render reporting.

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use serde::{Serialize, Deserialize};

/// Stores report state.
pub enum ReportState {
    /// No state.
    None,
    /// The number of completed rows at the last report.
    Row(u32),
    /// The last instant been reported.
    Duration(Instant),
}

/// Specifies report settings when rendering.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// No report.
    None,
    /// Report every Nth completed row.
    Row(u32),
    /// Report every duration.
    Duration(Duration),
}

impl Default for Report {
    fn default() -> Report {Report::Row(1)}
}

impl Report {
    /// Gets the start state of reporting.
    pub fn start(&self) -> ReportState {
        match self {
            Report::None => ReportState::None,
            Report::Row(_) => ReportState::Row(0),
            Report::Duration(_) => ReportState::Duration(Instant::now()),
        }
    }

    /// Update the report state and return `true` if should report.
    ///
    /// `rows` is the number of rows completed so far.
    pub fn update(&self, state: &mut ReportState, rows: u32) -> bool {
        use ReportState::*;
        match (self, state) {
            (Report::None, None) => false,
            (Report::Row(n), Row(last)) => {
                if rows >= last.saturating_add(*n) {
                    *last = rows;
                    true
                } else {false}
            }
            (Report::Duration(dur), Duration(last)) => {
                let now = Instant::now();
                // Durations past the end of `Instant` never elapse.
                if last.checked_add(*dur).map_or(false, |t| now >= t) {
                    *last = now;
                    true
                } else {false}
            }
            _ => false,
        }
    }

    /// Returns `true` unless reporting is turned off.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Report::None)
    }
}

/// A progress event sent while rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Number of scanlines left after the last completed one.
    Remaining(u32),
    /// All scanlines are finished.
    Done,
}

impl fmt::Display for Progress {
    fn fmt(&self, w: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The carriage return lets the next update overwrite this one.
            Progress::Remaining(n) => write!(w, "\rScanlines remaining: {} ", n),
            Progress::Done => writeln!(w, "\rDone.                 "),
        }
    }
}

/// Prints progress to standard error.
pub fn stderr(progress: Progress) {
    eprint!("{}", progress);
    let _ = std::io::stderr().flush();
}
