//! Transient user-facing notifications.
//!
//! The core never renders anything. Components push [`Notification`]s into
//! an [`Outbox`] and callers drain it, so every side effect is observable
//! in tests.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Display duration for rating confirmations.
pub const RATING_NOTICE_MS: u64 = 3_000;

/// Display duration for review outcomes.
pub const REVIEW_NOTICE_MS: u64 = 4_000;

/// Display duration for recipe outcomes and blocking notices.
pub const RECIPE_NOTICE_MS: u64 = 5_000;

/// Visual treatment of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A toast shown to the user that auto-dismisses after `duration_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub duration_ms: u64,
    pub issued_at: Timestamp,
}

impl Notification {
    /// An informational notification issued now.
    pub fn info(title: impl Into<String>, description: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
            duration_ms,
            issued_at: chrono::Utc::now(),
        }
    }

    /// A destructive (error) notification issued now.
    pub fn error(
        title: impl Into<String>,
        description: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::info(title, description, duration_ms)
        }
    }

    /// When the notification dismisses itself.
    pub fn expires_at(&self) -> Timestamp {
        self.issued_at + Duration::milliseconds(self.duration_ms as i64)
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at()
    }
}

/// Ordered list of notifications emitted by a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Outbox {
    items: Vec<Notification>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(
            title = %notification.title,
            variant = ?notification.variant,
            "Notification raised"
        );
        self.items.push(notification);
    }

    /// Remove and return everything emitted so far.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }

    /// Drop notifications whose display duration has elapsed at `now`.
    pub fn prune_expired(&mut self, now: Timestamp) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_expires_after_duration() {
        let n = Notification::info("Saved", "ok", RATING_NOTICE_MS);
        assert!(!n.is_expired(n.issued_at));
        assert!(!n.is_expired(n.issued_at + Duration::milliseconds(2_999)));
        assert!(n.is_expired(n.issued_at + Duration::milliseconds(3_000)));
    }

    #[test]
    fn error_notifications_are_destructive() {
        let n = Notification::error("Oops!", "failed", REVIEW_NOTICE_MS);
        assert_eq!(n.variant, NotificationVariant::Destructive);
        assert_eq!(n.duration_ms, REVIEW_NOTICE_MS);
    }

    #[test]
    fn prune_keeps_only_live_notifications() {
        let mut outbox = Outbox::new();
        let short = Notification::info("short", "", RATING_NOTICE_MS);
        let long = Notification::info("long", "", RECIPE_NOTICE_MS);
        let now = short.issued_at + Duration::milliseconds(4_000);
        outbox.push(short);
        outbox.push(long.clone());

        outbox.prune_expired(now);

        assert_eq!(outbox.len(), 1);
        assert_eq!(outbox.iter().next().map(|n| n.title.as_str()), Some("long"));
        // `long` was issued at or after `short`, so it is still visible.
        assert!(!long.is_expired(now));
    }

    #[test]
    fn take_drains_the_outbox() {
        let mut outbox = Outbox::new();
        outbox.push(Notification::info("a", "", RECIPE_NOTICE_MS));
        assert_eq!(outbox.take().len(), 1);
        assert!(outbox.is_empty());
    }
}
