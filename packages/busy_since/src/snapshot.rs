// Codec for the aggregate processor tick record.
//
// The record is the `cpu ...` line at the top of the kernel's counter source and also the
// entire content of the cookie file. Parsing and emitting round-trip exactly.

use thiserror::Error;

/// Number of tick counters in the record.
const FIELD_COUNT: usize = 10;

/// One sample of the kernel's aggregate processor tick counters.
///
/// Each field counts clock ticks attributed to one accounting category since boot. The
/// counters only ever grow but can wrap over very long uptimes, so two snapshots taken at
/// different times must not be assumed to be elementwise ordered.
///
/// `guest` and `guest_nice` are carried verbatim from the record; the kernel already
/// accounts them inside `user` and `nice`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TickSnapshot {
    pub(crate) user: u64,
    pub(crate) nice: u64,
    pub(crate) system: u64,
    pub(crate) idle: u64,
    pub(crate) iowait: u64,
    pub(crate) irq: u64,
    pub(crate) softirq: u64,
    pub(crate) steal: u64,
    pub(crate) guest: u64,
    pub(crate) guest_nice: u64,
}

/// Errors that can occur when parsing a tick record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub(crate) enum ParseSnapshotError {
    /// The supposed tick record did not match the expected format.
    #[error("invalid tick record: '{invalid_value}' is invalid: {problem}")]
    InvalidSyntax {
        /// The specific value that was invalid. This may either be the entire record or a
        /// specific field of it, depending on the problem.
        invalid_value: String,

        /// A human-readable description of the problem.
        problem: String,
    },
}

impl ParseSnapshotError {
    fn new(invalid_value: String, problem: String) -> Self {
        Self::InvalidSyntax {
            invalid_value,
            problem,
        }
    }

    fn caused_by(invalid_value: String, problem: String, inner: impl std::fmt::Display) -> Self {
        Self::InvalidSyntax {
            invalid_value,
            problem: format!("{problem}: {inner}"),
        }
    }
}

/// Parses a tick record line into a [`TickSnapshot`].
///
/// The line must begin with the exact token `cpu` (so the per-processor `cpu0`, `cpu1`, ...
/// records do not match), followed by up to [`FIELD_COUNT`] whitespace-separated unsigned
/// integers. Fields omitted by a short line are zero. Tokens past the last known field are
/// ignored so a future kernel column does not break parsing.
///
/// Empty input is an error at this layer; the caller distinguishes the empty-file case
/// before the codec is consulted.
pub(crate) fn parse(line: &str) -> Result<TickSnapshot, ParseSnapshotError> {
    let mut tokens = line.split_whitespace();

    match tokens.next() {
        Some("cpu") => {}
        Some(other) => {
            return Err(ParseSnapshotError::new(
                other.to_string(),
                "leading token is not the aggregate 'cpu' marker".to_string(),
            ));
        }
        None => {
            return Err(ParseSnapshotError::new(
                line.to_string(),
                "record contains no tokens".to_string(),
            ));
        }
    }

    let mut fields = [0_u64; FIELD_COUNT];

    for slot in &mut fields {
        let Some(token) = tokens.next() else {
            break;
        };

        *slot = token.parse::<u64>().map_err(|inner| {
            ParseSnapshotError::caused_by(
                token.to_string(),
                "counter field could not be parsed as an unsigned integer".to_string(),
                inner,
            )
        })?;
    }

    let [user, nice, system, idle, iowait, irq, softirq, steal, guest, guest_nice] = fields;

    Ok(TickSnapshot {
        user,
        nice,
        system,
        idle,
        iowait,
        irq,
        softirq,
        steal,
        guest,
        guest_nice,
    })
}

/// Emits the tick record line for a [`TickSnapshot`], trailing newline included.
///
/// Round-trip law: `parse(&emit(s))` yields `s` for every snapshot.
pub(crate) fn emit(snapshot: &TickSnapshot) -> String {
    let TickSnapshot {
        user,
        nice,
        system,
        idle,
        iowait,
        irq,
        softirq,
        steal,
        guest,
        guest_nice,
    } = *snapshot;

    format!(
        "cpu {user} {nice} {system} {idle} {iowait} {irq} {softirq} {steal} {guest} {guest_nice}\n"
    )
}
