//! Character variety sections - rewards enabling digits and symbols.

use super::{STEP, SectionResult};
use crate::config::GeneratorConfig;

pub fn numbers_section(config: &GeneratorConfig) -> SectionResult {
    if config.numbers() {
        SectionResult::passed(STEP)
    } else {
        SectionResult::hint(0, "Add numbers")
    }
}

pub fn symbols_section(config: &GeneratorConfig) -> SectionResult {
    if config.symbols() {
        SectionResult::passed(STEP)
    } else {
        SectionResult::hint(0, "Add symbols")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_sections_disabled() {
        let config = GeneratorConfig::default();
        assert_eq!(numbers_section(&config), SectionResult::hint(0, "Add numbers"));
        assert_eq!(symbols_section(&config), SectionResult::hint(0, "Add symbols"));
    }

    #[test]
    fn test_variety_sections_enabled() {
        let config = GeneratorConfig::new(8, true, true).unwrap();
        assert_eq!(numbers_section(&config), SectionResult::passed(25));
        assert_eq!(symbols_section(&config), SectionResult::passed(25));
    }
}
