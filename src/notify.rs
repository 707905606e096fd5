//! Notifications
//!
//! Transient messages with a severity. Flows take anything implementing
//! [`Notify`]; the app passes a [`Notifier`] that feeds the snackbar.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::SNACKBAR_HIDE_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "snackbar success",
            Severity::Warning => "snackbar warning",
            Severity::Error => "snackbar error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

pub trait Notify {
    fn notify(&self, notice: Notice);

    fn success(&self, message: impl Into<String>) {
        self.notify(Notice { message: message.into(), severity: Severity::Success });
    }

    fn warning(&self, message: impl Into<String>) {
        self.notify(Notice { message: message.into(), severity: Severity::Warning });
    }

    /// Show backend/validation messages joined into one notice
    fn errors(&self, messages: &[String]) {
        self.notify(Notice { message: messages.join(" "), severity: Severity::Error });
    }
}

/// Snackbar-backed notifier handle
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notice>>,
    /// Bumped per notice so an older hide timer can't close a newer notice
    generation: RwSignal<u32>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for Notifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => tracing::warn!(message = %notice.message, "notify"),
            _ => tracing::info!(message = %notice.message, "notify"),
        }
        self.current.set(Some(notice));
        self.generation.update(|g| *g += 1);

        let shown = self.generation.get_untracked();
        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SNACKBAR_HIDE_MS).await;
            if this.generation.get_untracked() == shown {
                this.current.set(None);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNotifier;

    #[test]
    fn test_errors_join_into_one_notice() {
        let notifier = RecordingNotifier::default();
        notifier.errors(&["Name is taken.".to_string(), "Email is invalid.".to_string()]);
        assert_eq!(
            notifier.notices(),
            vec![Notice { message: "Name is taken. Email is invalid.".into(), severity: Severity::Error }]
        );
    }

    #[test]
    fn test_each_severity_has_its_own_class() {
        assert_eq!(Severity::Success.css_class(), "snackbar success");
        assert_eq!(Severity::Warning.css_class(), "snackbar warning");
        assert_eq!(Severity::Error.css_class(), "snackbar error");
    }

    #[test]
    fn test_default_notifier_starts_empty() {
        let notifier = Notifier::default();
        assert_eq!(notifier.current(), None);
    }
}
