//! Strength score, label and evaluation result types.

use std::fmt;

/// Additive score in `0..=100`, a multiple of 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = 100;

    /// Wraps a raw score, saturating at [`StrengthScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// `<= 25` is weak, `<= 75` medium, anything above strong.
    pub fn from_score(score: StrengthScore) -> Self {
        match score.value() {
            0..=25 => Self::Weak,
            26..=75 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`evaluate_strength`](crate::evaluate_strength).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrengthEvaluation {
    pub score: StrengthScore,
    /// Hints for raising the score, in section order.
    pub reasons: Vec<String>,
}

impl StrengthEvaluation {
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_boundaries() {
        assert_eq!(Strength::from_score(StrengthScore::new(0)), Strength::Weak);
        assert_eq!(Strength::from_score(StrengthScore::new(25)), Strength::Weak);
        assert_eq!(Strength::from_score(StrengthScore::new(26)), Strength::Medium);
        assert_eq!(Strength::from_score(StrengthScore::new(50)), Strength::Medium);
        assert_eq!(Strength::from_score(StrengthScore::new(75)), Strength::Medium);
        assert_eq!(Strength::from_score(StrengthScore::new(76)), Strength::Strong);
        assert_eq!(Strength::from_score(StrengthScore::new(100)), Strength::Strong);
    }

    #[test]
    fn test_score_saturates() {
        assert_eq!(StrengthScore::new(180).value(), 100);
        assert_eq!(StrengthScore::new(75).to_string(), "75%");
    }

    #[test]
    fn test_default_evaluation_is_weak() {
        let evaluation = StrengthEvaluation::default();
        assert_eq!(evaluation.strength(), Strength::Weak);
        assert!(evaluation.reasons.is_empty());
    }
}
