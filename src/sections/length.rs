//! Length section - rewards 8 and 12 character thresholds.

use super::{STEP, SectionResult};
use crate::config::GeneratorConfig;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

/// Scores the configured length.
///
/// # Returns
/// - `0` points below 8 characters
/// - `25` points from 8 characters
/// - `50` points from 12 characters
pub fn length_section(config: &GeneratorConfig) -> SectionResult {
    let length = config.length();
    if length < MIN_LENGTH {
        return SectionResult::hint(
            0,
            format!("Use at least {} characters", MIN_LENGTH),
        );
    }
    if length < LONG_LENGTH {
        return SectionResult::hint(
            STEP,
            format!("Use {} or more characters", LONG_LENGTH),
        );
    }
    SectionResult::passed(STEP * 2)
}
