//! Character pools used by the generator.

use crate::config::GeneratorConfig;

/// Upper and lower case Latin letters, always usable.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Appended when numbers are enabled.
pub const DIGITS: &str = "0123456789";

/// Appended when symbols are enabled.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Symbol,
}

impl CharClass {
    /// Classifies a character, `None` if it belongs to no pool.
    pub fn of(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Letter)
        } else if c.is_ascii_digit() {
            Some(Self::Digit)
        } else if SYMBOLS.contains(c) {
            Some(Self::Symbol)
        } else {
            None
        }
    }

    /// Whether the class may appear in a password built from `config`.
    pub fn is_enabled(self, config: &GeneratorConfig) -> bool {
        match self {
            Self::Letter => true,
            Self::Digit => config.numbers(),
            Self::Symbol => config.symbols(),
        }
    }
}

/// Builds the usable pool: letters, then digits, then symbols.
pub fn usable_charset(config: &GeneratorConfig) -> Vec<char> {
    let mut charset: Vec<char> = LETTERS.chars().collect();

    if config.numbers() {
        charset.extend(DIGITS.chars());
    }

    if config.symbols() {
        charset.extend(SYMBOLS.chars());
    }

    charset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sizes() {
        let mut config = GeneratorConfig::default();
        assert_eq!(usable_charset(&config).len(), 52);
        config.toggle_numbers();
        assert_eq!(usable_charset(&config).len(), 62);
        config.toggle_symbols();
        assert_eq!(usable_charset(&config).len(), 80);
        config.toggle_numbers();
        assert_eq!(usable_charset(&config).len(), 70);
    }

    #[test]
    fn test_pool_order() {
        let config = GeneratorConfig::new(8, true, true).unwrap();
        let charset = usable_charset(&config);
        assert_eq!(charset[0], 'A');
        assert_eq!(charset[51], 'z');
        assert_eq!(charset[52], '0');
        assert_eq!(charset[62], '!');
        assert_eq!(charset[79], '}');
    }

    #[test]
    fn test_classify() {
        assert_eq!(CharClass::of('q'), Some(CharClass::Letter));
        assert_eq!(CharClass::of('Q'), Some(CharClass::Letter));
        assert_eq!(CharClass::of('7'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('{'), Some(CharClass::Symbol));
        assert_eq!(CharClass::of('~'), None);
        assert_eq!(CharClass::of('é'), None);
    }

    #[test]
    fn test_enabled_classes() {
        let config = GeneratorConfig::new(10, false, true).unwrap();
        assert!(CharClass::Letter.is_enabled(&config));
        assert!(!CharClass::Digit.is_enabled(&config));
        assert!(CharClass::Symbol.is_enabled(&config));
    }
}
