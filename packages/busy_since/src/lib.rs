#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Reports the share of time the host processor spent busy since the previous invocation.
//!
//! Each run reads the kernel's aggregate tick counters, compares them against the sample
//! persisted by the previous run (the "cookie"), prints the busy percentage for that
//! window and replaces the cookie with the fresh sample. The tool is meant to be invoked
//! periodically, e.g. from a monitoring agent or a cron-like scheduler, with each run
//! reporting the delta since the last one rather than since boot.
//!
//! This crate provides the core logic, exposed via the [`run`] function. The binary entry
//! point is in `main.rs`.

mod cookie;
mod frequency;
mod pal;
mod snapshot;
mod types;
mod usage;

use cookie::CookieFile;
use log::debug;
use pal::{Platform, PlatformFacade};
use snapshot::TickSnapshot;
pub use types::*;

/// Core logic of the tool, extracted for testability.
///
/// This function contains all the business logic without any process-global dependencies
/// like `std::env::args()`, making it suitable for direct testing.
#[doc(hidden)]
pub fn run(input: &RunInput) -> Result<UsageReport, RunError> {
    run_with_platform(input, &PlatformFacade::target())
}

/// Internal implementation of `run` that accepts a platform abstraction.
///
/// This allows mocking the kernel-exposed metrics sources in tests.
fn run_with_platform(input: &RunInput, platform: &impl Platform) -> Result<UsageReport, RunError> {
    let live = read_live_snapshot(platform)?;
    debug!("live sample: {live:?}");

    let mut cookie =
        CookieFile::open(&input.cookie_path).map_err(|e| RunError::Cookie(e.to_string()))?;
    let previous = cookie.load().map_err(|e| RunError::Cookie(e.to_string()))?;
    debug!("previous sample: {previous:?}");

    let average_khz = if input.sample_frequency {
        let khz = frequency::average_scaling_khz(platform)
            .map_err(|e| RunError::Frequency(e.to_string()))?;
        debug!("average scaling frequency: {khz} kHz");
        Some(khz)
    } else {
        None
    };

    let busy_fraction = usage::busy_fraction(&previous, &live);

    // The live sample becomes the next run's point of comparison.
    cookie
        .store(&live)
        .map_err(|e| RunError::Cookie(e.to_string()))?;

    Ok(UsageReport {
        busy_fraction,
        average_khz,
    })
}

/// Reads the kernel's aggregate counter source and parses its leading tick record.
fn read_live_snapshot(platform: &impl Platform) -> Result<TickSnapshot, RunError> {
    let contents = platform
        .proc_stat_contents()
        .map_err(RunError::CounterSourceRead)?;

    snapshot::parse(contents.lines().next().unwrap_or_default())
        .map_err(|e| RunError::CounterSourceFormat(e.to_string()))
}
