//! Password generator component
//!
//! This library models a password generator widget: a length slider,
//! number and symbol toggles, a strength meter, a show/hide toggle, a
//! copy action with a transient toast and a light/dark theme switch.
//!
//! Every configuration change regenerates the password and re-evaluates
//! its strength before the state is next read.
//!
//! # Features
//!
//! - `async` (default): Enables [`Session`], which owns the toast timers
//! - `tracing`: Enables logging via tracing crate
//! - `clipboard`: Enables [`SystemClipboard`] backed by the native clipboard
//!
//! # Example
//!
//! ```rust
//! use pwd_generator::{Intent, MemoryClipboard, Options, PasswordGenerator, Strength};
//!
//! let mut generator = PasswordGenerator::new(Options::default());
//! let mut clipboard = MemoryClipboard::new();
//!
//! generator.apply(Intent::SetLength(12), &mut clipboard);
//! generator.apply(Intent::ToggleNumbers, &mut clipboard);
//!
//! assert_eq!(generator.score().value(), 75);
//! assert_eq!(generator.strength(), Strength::Medium);
//! ```

mod charset;
mod clipboard;
mod component;
mod config;
mod evaluator;
mod generator;
mod sections;
#[cfg(feature = "async")]
mod session;
mod strength;
mod theme;
mod toast;
mod view;

// Public API
pub use charset::{CharClass, DIGITS, LETTERS, SYMBOLS, usable_charset};
pub use clipboard::{ClipboardError, ClipboardWriter, MemoryClipboard};
pub use component::{Effect, Intent, PasswordGenerator};
pub use config::{ConfigError, GeneratorConfig, Options};
pub use evaluator::evaluate_strength;
pub use generator::{generate_password, generate_password_with};
pub use strength::{Strength, StrengthEvaluation, StrengthScore};
pub use theme::Theme;
pub use toast::{Toast, ToastPolicy, ToastTicket};
pub use view::{MeterColor, ViewModel};

#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;

#[cfg(feature = "async")]
pub use session::Session;

/// Convenience wrapper evaluating a raw `(length, numbers, symbols)` triple.
///
/// # Errors
///
/// Returns [`ConfigError::LengthOutOfRange`] for lengths outside `6..=20`.
pub fn evaluate(length: usize, numbers: bool, symbols: bool) -> Result<StrengthEvaluation, ConfigError> {
    GeneratorConfig::new(length, numbers, symbols).map(|config| evaluate_strength(&config))
}

/// Convenience wrapper generating from a raw `(length, numbers, symbols)` triple.
///
/// # Errors
///
/// Returns [`ConfigError::LengthOutOfRange`] for lengths outside `6..=20`.
pub fn generate(length: usize, numbers: bool, symbols: bool) -> Result<secrecy::SecretString, ConfigError> {
    GeneratorConfig::new(length, numbers, symbols).map(|config| generate_password(&config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_evaluate_triples() {
        assert_eq!(evaluate(8, false, false).unwrap().score.value(), 25);
        assert_eq!(evaluate(12, true, true).unwrap().strength(), Strength::Strong);
        assert!(evaluate(21, false, false).is_err());
    }

    #[test]
    fn test_generate_triples() {
        let password = generate(10, true, false).unwrap();
        assert_eq!(password.expose_secret().len(), 10);
        assert!(generate(0, false, false).is_err());
    }
}
