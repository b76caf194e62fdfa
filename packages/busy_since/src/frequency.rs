// Average current scaling frequency across the possible processors.
//
// Reads are deliberately paced: one settling delay up front, then a short pause between
// consecutive per-processor reads so the sampling window is not a single burst.

use std::io;
use std::time::Duration;

use log::warn;
use thiserror::Error;

use crate::pal::Platform;

/// Delay before the first per-processor read.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Pause between consecutive per-processor reads.
const PACING_DELAY: Duration = Duration::from_millis(10);

/// Errors that can occur while sampling frequencies.
///
/// Individual unreadable processors are not errors; they are skipped. Only the
/// possible-processors descriptor itself is load-bearing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub(crate) enum FrequencyError {
    /// The possible-processors descriptor could not be read.
    #[error("failed to read the possible-processors descriptor: {0}")]
    DescriptorRead(io::Error),

    /// The possible-processors descriptor did not hold a span descriptor.
    #[error("possible-processors descriptor is malformed: {0}")]
    DescriptorFormat(cpuspan::Error),
}

/// Mean current scaling frequency in kHz across the readable possible processors.
///
/// Processors whose frequency file cannot be read, or whose content is not an unsigned
/// integer, are skipped and excluded from the average. Zero readable processors is defined
/// as an average of `0.0`.
#[expect(
    clippy::cast_precision_loss,
    reason = "kHz readings and processor counts stay far below 2^52"
)]
pub(crate) fn average_scaling_khz(platform: &impl Platform) -> Result<f64, FrequencyError> {
    let descriptor = platform
        .possible_processors_contents()
        .map_err(FrequencyError::DescriptorRead)?;

    let span = cpuspan::parse(descriptor.trim_end()).map_err(FrequencyError::DescriptorFormat)?;

    platform.sleep(SETTLE_DELAY);

    let mut sum_khz = 0_u64;
    let mut samples = 0_u64;

    for (visited, cpu_index) in span.enumerate() {
        if visited > 0 {
            platform.sleep(PACING_DELAY);
        }

        let Some(contents) = platform.scaling_cur_freq_contents(cpu_index) else {
            warn!("skipping cpu{cpu_index}: current scaling frequency is not readable");
            continue;
        };

        match contents.trim_end().parse::<u64>() {
            Ok(khz) => {
                sum_khz = sum_khz.wrapping_add(khz);
                samples = samples.wrapping_add(1);
            }
            Err(error) => {
                warn!("skipping cpu{cpu_index}: scaling frequency is not an integer: {error}");
            }
        }
    }

    if samples == 0 {
        return Ok(0.0);
    }

    Ok(sum_khz as f64 / samples as f64)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use crate::pal::MockPlatform;

    fn platform_with_span(descriptor: &'static str) -> MockPlatform {
        let mut mock = MockPlatform::new();
        mock.expect_possible_processors_contents()
            .returning(move || Ok(descriptor.to_string()));
        mock
    }

    #[test]
    fn averages_across_all_readable_processors() {
        let mut mock = platform_with_span("0-3\n");
        mock.expect_scaling_cur_freq_contents()
            .returning(|cpu_index| Some(format!("{}\n", 1_000_000 + u64::from(cpu_index) * 100_000)));
        // One settling delay plus one pacing delay between each consecutive pair of reads.
        mock.expect_sleep().times(4).return_const(());

        let average = average_scaling_khz(&mock).unwrap();
        assert!((average - 1_150_000.0).abs() < 1e-9);
    }

    #[test]
    fn single_processor_span_has_no_pacing_delay() {
        let mut mock = platform_with_span("0\n");
        mock.expect_scaling_cur_freq_contents()
            .returning(|_| Some("2400000\n".to_string()));
        mock.expect_sleep().times(1).return_const(());

        let average = average_scaling_khz(&mock).unwrap();
        assert!((average - 2_400_000.0).abs() < 1e-9);
    }

    #[test]
    fn unreadable_processors_are_skipped() {
        let mut mock = platform_with_span("0-2");
        mock.expect_scaling_cur_freq_contents()
            .returning(|cpu_index| match cpu_index {
                0 => Some("1000000\n".to_string()),
                1 => None,
                _ => Some("3000000\n".to_string()),
            });
        mock.expect_sleep().return_const(());

        let average = average_scaling_khz(&mock).unwrap();
        assert!((average - 2_000_000.0).abs() < 1e-9);
    }

    #[test]
    fn unparsable_readings_are_skipped() {
        let mut mock = platform_with_span("0-1");
        mock.expect_scaling_cur_freq_contents()
            .returning(|cpu_index| match cpu_index {
                0 => Some("<unavailable>\n".to_string()),
                _ => Some("1800000\n".to_string()),
            });
        mock.expect_sleep().return_const(());

        let average = average_scaling_khz(&mock).unwrap();
        assert!((average - 1_800_000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_readable_processors_average_to_zero() {
        let mut mock = platform_with_span("0-7");
        mock.expect_scaling_cur_freq_contents().returning(|_| None);
        mock.expect_sleep().return_const(());

        let average = average_scaling_khz(&mock).unwrap();
        assert!(average.abs() < 1e-9);
    }

    #[test]
    fn unreadable_descriptor_is_an_error() {
        let mut mock = MockPlatform::new();
        mock.expect_possible_processors_contents()
            .returning(|| Err(io::Error::new(ErrorKind::NotFound, "not found")));

        let error = average_scaling_khz(&mock).unwrap_err();
        assert!(matches!(error, FrequencyError::DescriptorRead(_)));
    }

    #[test]
    fn malformed_descriptor_is_an_error() {
        let mock = platform_with_span("zero-fifteen\n");

        let error = average_scaling_khz(&mock).unwrap_err();
        assert!(matches!(error, FrequencyError::DescriptorFormat(_)));
    }
}
