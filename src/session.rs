//! Async driver owning the component, the clipboard and the toast timers.

use std::collections::HashSet;

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use crate::clipboard::ClipboardWriter;
use crate::component::{Effect, Intent, PasswordGenerator};
use crate::config::Options;
use crate::toast::{ToastPolicy, ToastTicket};
use crate::view::ViewModel;

/// Runs a [`PasswordGenerator`] on a tokio runtime.
///
/// Every copy spawns a one-shot task that sends `Intent::HideToast` back
/// through the session channel once the toast duration elapsed. Dropping
/// the session cancels the timers that are still pending.
pub struct Session<C: ClipboardWriter> {
    generator: PasswordGenerator,
    clipboard: C,
    tx: mpsc::UnboundedSender<Intent>,
    rx: mpsc::UnboundedReceiver<Intent>,
    shutdown: CancellationToken,
    // Tickets whose hide message has neither arrived nor been cancelled.
    outstanding: HashSet<ToastTicket>,
    // Latest hide timer, cancelled on the next copy under `ToastPolicy::Reset`.
    latest: Option<(ToastTicket, CancellationToken)>,
}

impl<C: ClipboardWriter> Session<C> {
    pub fn new(options: Options, clipboard: C) -> Self {
        Self::from_generator(PasswordGenerator::new(options), clipboard)
    }

    pub fn from_generator(generator: PasswordGenerator, clipboard: C) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            generator,
            clipboard,
            tx,
            rx,
            shutdown: CancellationToken::new(),
            outstanding: HashSet::new(),
            latest: None,
        }
    }

    pub fn generator(&self) -> &PasswordGenerator {
        &self.generator
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::from(&self.generator)
    }

    /// Number of hide timers still expected to fire.
    pub fn pending_timers(&self) -> usize {
        self.outstanding.len()
    }

    /// Applies an intent.
    ///
    /// # Panics
    ///
    /// An accepted `Intent::Copy` spawns its hide timer with
    /// [`tokio::spawn`] and panics outside a tokio runtime. Every other
    /// intent is applied synchronously and needs no runtime.
    pub fn dispatch(&mut self, intent: Intent) {
        if let Intent::HideToast(ticket) = intent {
            self.outstanding.remove(&ticket);
        }
        if let Effect::ScheduleToastHide { ticket, after } =
            self.generator.apply(intent, &mut self.clipboard)
        {
            self.schedule_hide(ticket, after);
        }
    }

    /// Waits for the next timer message and applies it.
    ///
    /// Returns `None` right away when no hide timer is outstanding, so a
    /// `while let Some(_)` loop ends once the last toast was handled.
    pub async fn next_timer_event(&mut self) -> Option<Intent> {
        if self.outstanding.is_empty() {
            return None;
        }
        let intent = self.rx.recv().await?;
        self.dispatch(intent);
        Some(intent)
    }

    /// Applies every timer message already delivered, without waiting.
    pub fn poll_timers(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.rx.try_recv() {
            self.dispatch(intent);
            applied += 1;
        }
        applied
    }

    fn schedule_hide(&mut self, ticket: ToastTicket, after: Duration) {
        // Deadline is fixed now, not when the task is first polled.
        let deadline = Instant::now() + after;
        let token = self.shutdown.child_token();

        if self.generator.options().toast_policy == ToastPolicy::Reset {
            if let Some((previous, previous_token)) = self.latest.replace((ticket, token.clone())) {
                // A message it already sent is still received, but no longer awaited.
                previous_token.cancel();
                self.outstanding.remove(&previous);
            }
        }
        self.outstanding.insert(ticket);

        #[cfg(feature = "tracing")]
        tracing::debug!("toast hide scheduled in {:?}", after);

        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = sleep_until(deadline) => {
                    if let Err(_e) = tx.send(Intent::HideToast(ticket)) {
                        #[cfg(feature = "tracing")]
                        tracing::error!("Failed to deliver toast timer: {}", _e);
                    }
                }
            }
        });
    }
}

impl<C: ClipboardWriter> Drop for Session<C> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
