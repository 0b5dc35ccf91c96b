//! Strength evaluation sections
//!
//! Each section scores one input of the generator configuration.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{numbers_section, symbols_section};

/// Points every satisfied condition contributes.
pub const STEP: u8 = 25;

/// Result of a single section.
/// - `points` - contribution to the score
/// - `reason` - optional hint for reaching a higher score
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionResult {
    pub points: u8,
    pub reason: Option<String>,
}

impl SectionResult {
    pub fn passed(points: u8) -> Self {
        Self {
            points,
            reason: None,
        }
    }

    pub fn hint(points: u8, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: Some(reason.into()),
        }
    }
}
