use std::fmt::Debug;
use std::time::Duration;
use std::{fs, io, thread};

use crate::pal::Platform;

/// The virtual filesystem and clock of the real operating system that the build is
/// targeting.
///
/// You would only use a different platform in unit tests that need a mock. Even then,
/// whenever possible, tests should use the real platform for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetPlatform;

// Trivial forwarder to system APIs - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Platform for BuildTargetPlatform {
    fn proc_stat_contents(&self) -> io::Result<String> {
        fs::read_to_string("/proc/stat")
    }

    fn possible_processors_contents(&self) -> io::Result<String> {
        fs::read_to_string("/sys/devices/system/cpu/possible")
    }

    fn scaling_cur_freq_contents(&self, cpu_index: u32) -> Option<String> {
        fs::read_to_string(format!(
            "/sys/devices/system/cpu/cpu{cpu_index}/cpufreq/scaling_cur_freq"
        ))
        .ok()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}
