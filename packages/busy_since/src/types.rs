// Public API types for busy_since.
//
// These types are used by main.rs and exposed via the crate's public API.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Input parameters for the `run` function.
///
/// This is the parsed and validated input that the core logic operates on.
#[doc(hidden)]
#[derive(Debug)]
#[allow(
    clippy::exhaustive_structs,
    reason = "This is a hidden struct for internal/test use only"
)]
pub struct RunInput {
    /// Path of the cookie file that holds the previous sample.
    pub cookie_path: PathBuf,
    /// Also sample the average current scaling frequency across processors.
    pub sample_frequency: bool,
}

/// The measurements of one successful run, rendered to stdout by the binary.
///
/// Displays as the tool's single output line: the busy percentage to one decimal digit,
/// preceded by the average frequency in GHz to two decimals when one was sampled.
#[derive(Clone, Copy, Debug)]
#[allow(
    clippy::exhaustive_structs,
    reason = "This is the complete output contract of a run"
)]
pub struct UsageReport {
    /// Fraction of elapsed ticks spent busy since the previous sample, in `[0.0, 1.0]`.
    pub busy_fraction: f64,

    /// Mean current scaling frequency in kHz, when frequency sampling was requested.
    pub average_khz: Option<f64>,
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(khz) = self.average_khz {
            write!(f, "{:.2}, ", khz / 1_000_000.0)?;
        }

        write!(f, "{:.1}%", self.busy_fraction * 100.0)
    }
}

/// Errors that can occur during a run.
///
/// Each variant renders the human-readable fatal message the binary prints to stderr,
/// naming the source that failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunError {
    /// The aggregate counter source could not be read.
    #[error("failed to read /proc/stat: {0}")]
    CounterSourceRead(io::Error),

    /// The aggregate counter source did not begin with a parsable tick record.
    #[error("/proc/stat does not begin with an aggregate tick record: {0}")]
    CounterSourceFormat(String),

    /// The cookie file could not be opened, read, parsed or rewritten.
    #[error("{0}")]
    Cookie(String),

    /// The frequency sampling inputs could not be read.
    #[error("{0}")]
    Frequency(String),
}
