//! The generator component - one owned state record driven by user intents.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::clipboard::ClipboardWriter;
use crate::config::{GeneratorConfig, Options};
use crate::evaluator::evaluate_strength;
use crate::generator::generate_password;
use crate::strength::{Strength, StrengthEvaluation, StrengthScore};
use crate::theme::Theme;
use crate::toast::{Toast, ToastTicket};

/// A user action, or the toast timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SetLength(usize),
    ToggleNumbers,
    ToggleSymbols,
    Regenerate,
    ToggleVisibility,
    Copy,
    ToggleTheme,
    HideToast(ToastTicket),
}

/// Work the host must perform after an intent was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Deliver `Intent::HideToast(ticket)` once `after` has elapsed.
    ScheduleToastHide { ticket: ToastTicket, after: Duration },
}

#[derive(Debug)]
pub struct PasswordGenerator {
    options: Options,
    config: GeneratorConfig,
    password: SecretString,
    evaluation: StrengthEvaluation,
    password_visible: bool,
    toast: Toast,
    theme: Theme,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl PasswordGenerator {
    /// Initial state: length 8, letters only, password hidden, no toast.
    pub fn new(options: Options) -> Self {
        Self::with_config(GeneratorConfig::default(), options)
    }

    pub fn with_config(config: GeneratorConfig, options: Options) -> Self {
        Self {
            options,
            config,
            password: generate_password(&config),
            evaluation: evaluate_strength(&config),
            password_visible: false,
            toast: Toast::default(),
            theme: options.theme,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn evaluation(&self) -> &StrengthEvaluation {
        &self.evaluation
    }

    pub fn score(&self) -> StrengthScore {
        self.evaluation.score
    }

    pub fn strength(&self) -> Strength {
        self.evaluation.strength()
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn is_toast_visible(&self) -> bool {
        self.toast.is_visible()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the copy action is currently accepted.
    pub fn can_copy(&self) -> bool {
        !(self.options.gate_weak_copy && self.strength() == Strength::Weak)
    }

    /// Applies one intent and reports follow-up work for the host.
    pub fn apply<C: ClipboardWriter + ?Sized>(&mut self, intent: Intent, clipboard: &mut C) -> Effect {
        match intent {
            Intent::SetLength(length) => self.set_length(length),
            Intent::ToggleNumbers => self.toggle_numbers(),
            Intent::ToggleSymbols => self.toggle_symbols(),
            Intent::Regenerate => self.regenerate(),
            Intent::ToggleVisibility => self.toggle_visibility(),
            Intent::Copy => return self.copy(clipboard),
            Intent::ToggleTheme => self.toggle_theme(),
            Intent::HideToast(ticket) => self.hide_toast(ticket),
        }
        Effect::None
    }

    pub fn set_length(&mut self, length: usize) {
        self.config.set_length(length);
        self.refresh();
    }

    pub fn toggle_numbers(&mut self) {
        self.config.toggle_numbers();
        self.refresh();
    }

    pub fn toggle_symbols(&mut self) {
        self.config.toggle_symbols();
        self.refresh();
    }

    /// Draws a new password for the unchanged configuration.
    pub fn regenerate(&mut self) {
        self.password = generate_password(&self.config);
    }

    pub fn toggle_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Copies the password and shows the toast.
    ///
    /// Refused while the password is weak in the gated variant. A failed
    /// clipboard write is logged and the toast is shown regardless.
    pub fn copy<C: ClipboardWriter + ?Sized>(&mut self, clipboard: &mut C) -> Effect {
        if !self.can_copy() {
            #[cfg(feature = "tracing")]
            tracing::warn!("copy refused: password strength is {}", self.strength());
            return Effect::None;
        }

        match clipboard.write_text(self.password.expose_secret()) {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::info!("password copied to clipboard");
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Failed to copy password: {}", _e);
            }
        }

        let ticket = self.toast.show();
        Effect::ScheduleToastHide {
            ticket,
            after: self.options.toast_duration,
        }
    }

    /// Timer callback for a previous copy.
    pub fn hide_toast(&mut self, ticket: ToastTicket) {
        let _hidden = self.toast.expire(ticket, self.options.toast_policy);

        #[cfg(feature = "tracing")]
        tracing::debug!("toast timer {} fired, hidden={}", ticket.generation(), _hidden);
    }

    fn refresh(&mut self) {
        self.password = generate_password(&self.config);
        self.evaluation = evaluate_strength(&self.config);
    }
}
