// Facade that dispatches to either the real platform or a mock in tests.
//
// The facade pattern allows the same code to work with both real and mock implementations,
// with the mock variant only available in test builds.

use std::time::Duration;
use std::{fmt, io};
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockPlatform;
use crate::pal::{BuildTargetPlatform, Platform};

/// Facade over the platform, dispatching to the real or mock implementation.
///
/// In production, this always uses `BuildTargetPlatform`. In tests, it can also wrap a
/// `MockPlatform` for controlled test scenarios.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    /// Real platform implementation.
    Target(&'static BuildTargetPlatform),

    /// Mock platform for testing.
    #[cfg(test)]
    Mock(Arc<MockPlatform>),
}

// Debug implementations have no API contract to test.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl fmt::Debug for PlatformFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target(_) => f.debug_struct("PlatformFacade::Target").finish(),
            #[cfg(test)]
            Self::Mock(_) => f.debug_struct("PlatformFacade::Mock").finish(),
        }
    }
}

/// Static instance of the real platform for production use.
static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl PlatformFacade {
    /// Creates a facade using the real platform.
    pub(crate) const fn target() -> Self {
        Self::Target(&BUILD_TARGET_PLATFORM)
    }

    /// Creates a facade wrapping a mock platform (test builds only).
    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockPlatform) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Platform for PlatformFacade {
    fn proc_stat_contents(&self) -> io::Result<String> {
        match self {
            Self::Target(platform) => platform.proc_stat_contents(),
            #[cfg(test)]
            Self::Mock(mock) => mock.proc_stat_contents(),
        }
    }

    fn possible_processors_contents(&self) -> io::Result<String> {
        match self {
            Self::Target(platform) => platform.possible_processors_contents(),
            #[cfg(test)]
            Self::Mock(mock) => mock.possible_processors_contents(),
        }
    }

    fn scaling_cur_freq_contents(&self, cpu_index: u32) -> Option<String> {
        match self {
            Self::Target(platform) => platform.scaling_cur_freq_contents(cpu_index),
            #[cfg(test)]
            Self::Mock(mock) => mock.scaling_cur_freq_contents(cpu_index),
        }
    }

    fn sleep(&self, duration: Duration) {
        match self {
            Self::Target(platform) => platform.sleep(duration),
            #[cfg(test)]
            Self::Mock(mock) => mock.sleep(duration),
        }
    }
}

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Default for PlatformFacade {
    fn default() -> Self {
        Self::target()
    }
}
