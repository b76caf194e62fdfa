// Busy/idle bucketing and the delta computation between two samples.
//
// Bucketing follows the conservative policy: busy counts user + nice + system + irq +
// softirq. guest and guest_nice stay out of busy since the kernel already accounts them
// inside user and nice, and steal is work the hypervisor ran elsewhere, so idle absorbs
// idle + iowait + steal.

use crate::snapshot::TickSnapshot;

/// Total ticks the sample attributes to active work on this CPU.
pub(crate) fn busy_ticks(snapshot: &TickSnapshot) -> u64 {
    snapshot
        .user
        .wrapping_add(snapshot.nice)
        .wrapping_add(snapshot.system)
        .wrapping_add(snapshot.irq)
        .wrapping_add(snapshot.softirq)
}

/// Total ticks the sample attributes to inactivity.
pub(crate) fn idle_ticks(snapshot: &TickSnapshot) -> u64 {
    snapshot
        .idle
        .wrapping_add(snapshot.iowait)
        .wrapping_add(snapshot.steal)
}

/// Fraction of elapsed ticks spent busy between two samples, in `[0.0, 1.0]`.
///
/// Pure function of its inputs. Deltas use wrapping subtraction, so a counter wrap or a
/// clock reset between samples produces a degenerate but finite value and the final clamp
/// keeps it inside the unit range. A zero total delta (two samples within the same tick)
/// is defined as `0.0`.
#[expect(
    clippy::cast_precision_loss,
    reason = "tick deltas between two invocations stay far below 2^52"
)]
pub(crate) fn busy_fraction(prev: &TickSnapshot, cur: &TickSnapshot) -> f64 {
    let d_busy = busy_ticks(cur).wrapping_sub(busy_ticks(prev));
    let d_idle = idle_ticks(cur).wrapping_sub(idle_ticks(prev));

    let total = d_busy.wrapping_add(d_idle);
    if total == 0 {
        return 0.0;
    }

    (d_busy as f64 / total as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn close_to(value: f64, expected: f64) -> bool {
        (value - expected).abs() < 1e-9
    }

    #[test]
    fn bucketing_follows_conservative_policy() {
        let snapshot = TickSnapshot {
            user: 1,
            nice: 2,
            system: 4,
            idle: 8,
            iowait: 16,
            irq: 32,
            softirq: 64,
            steal: 128,
            guest: 256,
            guest_nice: 512,
        };

        // guest and guest_nice contribute to neither bucket.
        assert_eq!(busy_ticks(&snapshot), 1 + 2 + 4 + 32 + 64);
        assert_eq!(idle_ticks(&snapshot), 8 + 16 + 128);
    }

    #[test]
    fn idle_only_window_is_zero() {
        let prev = TickSnapshot::default();
        let cur = TickSnapshot {
            idle: 100,
            ..TickSnapshot::default()
        };

        assert!(close_to(busy_fraction(&prev, &cur), 0.0));
    }

    #[test]
    fn busy_only_window_is_one() {
        let prev = TickSnapshot::default();
        let cur = TickSnapshot {
            user: 100,
            ..TickSnapshot::default()
        };

        assert!(close_to(busy_fraction(&prev, &cur), 1.0));
    }

    #[test]
    fn half_and_half_window() {
        let prev = TickSnapshot::default();
        let cur = TickSnapshot {
            user: 50,
            idle: 50,
            ..TickSnapshot::default()
        };

        assert!(close_to(busy_fraction(&prev, &cur), 0.5));
    }

    #[test]
    fn delta_ignores_ticks_before_prev() {
        let prev = TickSnapshot {
            user: 1000,
            idle: 1000,
            ..TickSnapshot::default()
        };
        let cur = TickSnapshot {
            user: 1075,
            idle: 1025,
            ..TickSnapshot::default()
        };

        assert!(close_to(busy_fraction(&prev, &cur), 0.75));
    }

    #[test]
    fn zero_total_delta_is_zero() {
        let sample = TickSnapshot {
            user: 42,
            idle: 42,
            ..TickSnapshot::default()
        };

        assert!(close_to(busy_fraction(&sample, &sample), 0.0));
    }

    #[test]
    fn monotonic_samples_stay_in_unit_range() {
        let prev = TickSnapshot {
            user: 10,
            nice: 20,
            system: 30,
            idle: 40,
            iowait: 50,
            irq: 60,
            softirq: 70,
            steal: 80,
            guest: 90,
            guest_nice: 100,
        };
        let cur = TickSnapshot {
            user: 11,
            nice: 22,
            system: 33,
            idle: 44,
            iowait: 55,
            irq: 66,
            softirq: 77,
            steal: 88,
            guest: 99,
            guest_nice: 110,
        };

        let fraction = busy_fraction(&prev, &cur);
        assert!((0.0..=1.0).contains(&fraction));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let prev = TickSnapshot {
            user: 123,
            idle: 456,
            ..TickSnapshot::default()
        };
        let cur = TickSnapshot {
            user: 789,
            idle: 1011,
            ..TickSnapshot::default()
        };

        let first = busy_fraction(&prev, &cur);
        let second = busy_fraction(&prev, &cur);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn wrapped_counters_stay_finite_and_bounded() {
        // cur below prev, as after a counter wrap or a clock reset.
        let prev = TickSnapshot {
            user: u64::MAX - 10,
            idle: u64::MAX - 10,
            ..TickSnapshot::default()
        };
        let cur = TickSnapshot {
            user: 5,
            idle: 20,
            ..TickSnapshot::default()
        };

        let fraction = busy_fraction(&prev, &cur);
        assert!(fraction.is_finite());
        assert!((0.0..=1.0).contains(&fraction));
    }
}
