//! Transient status messages for the history viewer

use std::time::{Duration, Instant};

use crate::theme;
use crate::theme::notification::NotificationColors;

/// Severity of a notification; picks its colors and lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    /// Stays until dismissed by the next key press
    Error,
}

impl Severity {
    fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_millis(1500)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }

    pub fn colors(self) -> &'static NotificationColors {
        match self {
            Severity::Info => &theme::notification::INFO,
            Severity::Warning => &theme::notification::WARNING,
            Severity::Error => &theme::notification::ERROR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    shown_at: Instant,
    lifetime: Option<Duration>,
}

impl Notification {
    pub fn new(message: &str, severity: Severity) -> Self {
        Self {
            message: message.to_string(),
            severity,
            shown_at: Instant::now(),
            lifetime: severity.lifetime(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime
            .is_some_and(|lifetime| self.shown_at.elapsed() > lifetime)
    }
}

/// At most one notification is visible; showing a new one replaces it.
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::new(message, Severity::Info));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(message, Severity::Warning));
    }

    pub fn show_error(&mut self, message: &str) {
        self.current = Some(Notification::new(message, Severity::Error));
    }

    /// Drop a sticky error notification; timed ones are left alone.
    pub fn dismiss_error(&mut self) {
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.severity == Severity::Error)
        {
            self.current = None;
        }
    }

    /// Clear an expired notification, returns true if one was cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    #[cfg(test)]
    pub(crate) fn expire_after(&mut self, lifetime: Duration) {
        if let Some(ref mut notif) = self.current {
            notif.lifetime = Some(lifetime);
        }
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
