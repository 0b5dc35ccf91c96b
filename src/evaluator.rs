//! Strength evaluator - main evaluation logic.

use crate::config::GeneratorConfig;
use crate::sections::{SectionResult, length_section, numbers_section, symbols_section};
use crate::strength::{StrengthEvaluation, StrengthScore};

/// Evaluates the strength of passwords produced by `config`.
///
/// The score depends only on the configuration, never on the drawn
/// characters, so it is identical for every password of the same triple.
///
/// # Returns
/// A `StrengthEvaluation` containing score and hints.
pub fn evaluate_strength(config: &GeneratorConfig) -> StrengthEvaluation {
    let mut reasons = Vec::new();
    let mut score: u8 = 0;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&GeneratorConfig) -> SectionResult); 3] = [
        ("length", length_section),
        ("numbers", numbers_section),
        ("symbols", symbols_section),
    ];

    for (_section_name, section_fn) in sections {
        let SectionResult { points, reason } = section_fn(config);

        #[cfg(feature = "tracing")]
        tracing::trace!("section {} scored {}", _section_name, points);

        score = score.saturating_add(points);
        if let Some(reason) = reason {
            reasons.push(reason);
        }
    }

    let evaluation = StrengthEvaluation {
        score: StrengthScore::new(score),
        reasons,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "evaluated {:?}: score={} strength={}",
        config,
        evaluation.score.value(),
        evaluation.strength()
    );

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::Strength;

    fn evaluate(length: usize, numbers: bool, symbols: bool) -> StrengthEvaluation {
        evaluate_strength(&GeneratorConfig::new(length, numbers, symbols).unwrap())
    }

    #[test]
    fn test_evaluate_fixtures() {
        let cases = [
            (8, false, false, 25, Strength::Weak),
            (12, false, false, 50, Strength::Medium),
            (12, true, false, 75, Strength::Medium),
            (12, true, true, 100, Strength::Strong),
            (6, false, false, 0, Strength::Weak),
        ];
        for (length, numbers, symbols, score, strength) in cases {
            let evaluation = evaluate(length, numbers, symbols);
            assert_eq!(
                evaluation.score.value(),
                score,
                "score for ({}, {}, {})",
                length,
                numbers,
                symbols
            );
            assert_eq!(evaluation.strength(), strength);
        }
    }

    #[test]
    fn test_evaluate_score_values() {
        for length in GeneratorConfig::MIN_LENGTH..=GeneratorConfig::MAX_LENGTH {
            for (numbers, symbols) in [(false, false), (true, false), (false, true), (true, true)] {
                let score = evaluate(length, numbers, symbols).score.value();
                assert!(score <= 100);
                assert_eq!(score % 25, 0);
            }
        }
    }

    #[test]
    fn test_enabling_numbers_never_lowers_score() {
        for length in GeneratorConfig::MIN_LENGTH..=GeneratorConfig::MAX_LENGTH {
            for symbols in [false, true] {
                let without = evaluate(length, false, symbols).score;
                let with = evaluate(length, true, symbols).score;
                assert!(with >= without);
            }
        }
    }

    #[test]
    fn test_reasons_follow_sections() {
        let evaluation = evaluate(6, false, false);
        assert_eq!(
            evaluation.reasons,
            vec![
                "Use at least 8 characters".to_string(),
                "Add numbers".to_string(),
                "Add symbols".to_string(),
            ]
        );
        assert!(evaluate(12, true, true).reasons.is_empty());
    }

    #[test]
    fn test_symbols_and_length_reach_medium() {
        let evaluation = evaluate(10, false, true);
        assert_eq!(evaluation.score.value(), 50);
        assert_eq!(evaluation.strength(), Strength::Medium);
    }
}
