//! Generator configuration and component options.

use std::time::Duration;

use thiserror::Error;

use crate::theme::Theme;
use crate::toast::ToastPolicy;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Password length {length} is out of range ({min}..={max})")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },
}

/// The triple every derived value depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorConfig {
    length: usize,
    numbers: bool,
    symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            numbers: false,
            symbols: false,
        }
    }
}

impl GeneratorConfig {
    pub const MIN_LENGTH: usize = 6;
    pub const MAX_LENGTH: usize = 20;
    pub const DEFAULT_LENGTH: usize = 8;

    /// Builds a configuration, rejecting lengths outside the slider bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LengthOutOfRange`] if `length` is not in
    /// `MIN_LENGTH..=MAX_LENGTH`.
    pub fn new(length: usize, numbers: bool, symbols: bool) -> Result<Self, ConfigError> {
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            #[cfg(feature = "tracing")]
            tracing::error!("Rejected password length {}", length);
            return Err(ConfigError::LengthOutOfRange {
                length,
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self {
            length,
            numbers,
            symbols,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn numbers(&self) -> bool {
        self.numbers
    }

    pub fn symbols(&self) -> bool {
        self.symbols
    }

    /// Sets the length, clamped to the slider bounds.
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
    }

    pub fn toggle_numbers(&mut self) {
        self.numbers = !self.numbers;
    }

    pub fn toggle_symbols(&mut self) {
        self.symbols = !self.symbols;
    }
}

/// Variant and timing options for a [`PasswordGenerator`](crate::PasswordGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Refuse the copy action while the strength label is `Weak`.
    pub gate_weak_copy: bool,
    /// How long the "copied" toast stays visible.
    pub toast_duration: Duration,
    /// What a second copy inside the toast window does to the hide timer.
    pub toast_policy: ToastPolicy,
    /// Initial theme.
    pub theme: Theme,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            gate_weak_copy: false,
            toast_duration: Self::DEFAULT_TOAST_DURATION,
            toast_policy: ToastPolicy::Stack,
            theme: Theme::Dark,
        }
    }
}

impl Options {
    pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(2000);

    /// Options for the variant that disables copying weak passwords.
    pub fn gated() -> Self {
        Self {
            gate_weak_copy: true,
            ..Self::default()
        }
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn with_toast_policy(mut self, policy: ToastPolicy) -> Self {
        self.toast_policy = policy;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
