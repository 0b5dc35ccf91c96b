//! Transient "copied" notice and its hide policy.

/// What happens when a second copy lands inside the visibility window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastPolicy {
    /// Every copy schedules its own hide; the earliest one wins.
    #[default]
    Stack,
    /// Only the most recent copy's hide counts.
    Reset,
}

/// Identifies the copy that scheduled a hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastTicket {
    generation: u64,
}

impl ToastTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toast {
    visible: bool,
    generation: u64,
}

impl Toast {
    pub const MESSAGE: &'static str = "Password Copied!";

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows the toast and hands out a ticket for the matching hide.
    pub fn show(&mut self) -> ToastTicket {
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        ToastTicket {
            generation: self.generation,
        }
    }

    /// Applies an elapsed hide timer. Returns whether the toast was hidden.
    pub fn expire(&mut self, ticket: ToastTicket, policy: ToastPolicy) -> bool {
        if !self.visible {
            return false;
        }
        match policy {
            ToastPolicy::Stack => {
                self.visible = false;
                true
            }
            ToastPolicy::Reset if ticket.generation == self.generation => {
                self.visible = false;
                true
            }
            ToastPolicy::Reset => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut toast = Toast::default();
        assert!(!toast.is_visible());
        let ticket = toast.show();
        assert!(toast.is_visible());
        assert!(toast.expire(ticket, ToastPolicy::Stack));
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_stack_hides_on_stale_ticket() {
        let mut toast = Toast::default();
        let first = toast.show();
        let second = toast.show();
        assert_ne!(first, second);
        assert!(toast.expire(first, ToastPolicy::Stack));
        assert!(!toast.is_visible());
        assert!(!toast.expire(second, ToastPolicy::Stack));
    }

    #[test]
    fn test_reset_ignores_stale_ticket() {
        let mut toast = Toast::default();
        let first = toast.show();
        let second = toast.show();
        assert!(!toast.expire(first, ToastPolicy::Reset));
        assert!(toast.is_visible());
        assert!(toast.expire(second, ToastPolicy::Reset));
        assert!(!toast.is_visible());
    }
}
