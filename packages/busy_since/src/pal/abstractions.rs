use std::fmt::Debug;
use std::io;
use std::time::Duration;

/// Linux has this funny notion of exposing various OS APIs as a virtual filesystem. This
/// trait abstracts the virtual filesystem sources this tool samples, plus the pacing
/// delays of the frequency sampler, to allow all of it to be mocked.
///
/// All I/O is synchronous and blocking because we expect it to hit a fast path in the OS,
/// given the data is never on a real storage device.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Get the contents of the /proc/stat file.
    ///
    /// The first line is the aggregate `cpu` tick record covering every processor. The
    /// per-processor `cpuN` lines that follow are not used by this tool.
    fn proc_stat_contents(&self) -> io::Result<String>;

    /// Get the contents of the /sys/devices/system/cpu/possible file.
    ///
    /// This is a span descriptor file ("0-15" style, bare "0" on single-processor
    /// systems) listing every processor index that could exist on this system.
    fn possible_processors_contents(&self) -> io::Result<String>;

    /// Gets the contents of the /sys/devices/system/cpu/cpu{}/cpufreq/scaling_cur_freq
    /// file, or `None` if it cannot be read.
    ///
    /// This is a single line file with the current frequency in kHz as content. It is
    /// absent for processors without cpufreq support.
    fn scaling_cur_freq_contents(&self, cpu_index: u32) -> Option<String>;

    /// Suspends the calling thread for the given duration.
    fn sleep(&self, duration: Duration);
}
