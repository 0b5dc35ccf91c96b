//! Presentational snapshot of a [`PasswordGenerator`].

use std::fmt;
use std::ops::RangeInclusive;

use secrecy::ExposeSecret;

use crate::component::PasswordGenerator;
use crate::config::GeneratorConfig;
use crate::strength::Strength;
use crate::theme::Theme;
use crate::toast::Toast;

pub const TITLE: &str = "Password Generator";
const MASK: char = '•';

/// Colour of the strength bar and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterColor {
    Red,
    Yellow,
    Green,
}

impl From<Strength> for MeterColor {
    fn from(strength: Strength) -> Self {
        match strength {
            Strength::Weak => Self::Red,
            Strength::Medium => Self::Yellow,
            Strength::Strong => Self::Green,
        }
    }
}

/// Everything the rendering surface needs, derived from the component state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub title: &'static str,
    /// Password text, masked unless visibility is on.
    pub password_field: String,
    pub visibility_label: &'static str,
    pub copy_enabled: bool,
    pub toast: Option<&'static str>,
    pub length: usize,
    pub length_range: RangeInclusive<usize>,
    pub numbers_checked: bool,
    pub symbols_checked: bool,
    pub strength: Strength,
    pub meter_percent: u8,
    pub meter_color: MeterColor,
    pub theme: Theme,
}

impl From<&PasswordGenerator> for ViewModel {
    fn from(generator: &PasswordGenerator) -> Self {
        let config = generator.config();
        let password = generator.password().expose_secret();
        let password_field = if generator.is_password_visible() {
            password.to_string()
        } else {
            password.chars().map(|_| MASK).collect()
        };
        let strength = generator.strength();

        Self {
            title: TITLE,
            password_field,
            visibility_label: show_hide_label(generator.is_password_visible()),
            copy_enabled: generator.can_copy(),
            toast: generator.is_toast_visible().then_some(Toast::MESSAGE),
            length: config.length(),
            length_range: GeneratorConfig::MIN_LENGTH..=GeneratorConfig::MAX_LENGTH,
            numbers_checked: config.numbers(),
            symbols_checked: config.symbols(),
            strength,
            meter_percent: generator.score().value(),
            meter_color: strength.into(),
            theme: generator.theme(),
        }
    }
}

fn show_hide_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BAR_WIDTH: usize = 20;
        let filled = BAR_WIDTH * self.meter_percent as usize / 100;

        writeln!(f, "{} ({})", self.title, self.theme)?;
        write!(f, "{} [{}]", self.password_field, self.visibility_label)?;
        if self.copy_enabled {
            writeln!(f, " [Copy]")?;
        } else {
            writeln!(f, " (Copy disabled)")?;
        }
        if let Some(toast) = self.toast {
            writeln!(f, "{}", toast)?;
        }
        writeln!(
            f,
            "Length: {} ({}-{})",
            self.length,
            self.length_range.start(),
            self.length_range.end()
        )?;
        writeln!(
            f,
            "{} Numbers {} Symbols",
            checkbox(self.numbers_checked),
            checkbox(self.symbols_checked)
        )?;
        writeln!(
            f,
            "[{}{}] {}%",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            self.meter_percent
        )?;
        write!(f, "Strength: {}", self.strength)
    }
}
