use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::Clock;

/// How long a banner stays up before it dismisses itself.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl NotificationKind {
    /// Bootstrap alert modifier.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Warning => "alert-warning",
            Self::Danger => "alert-danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

/// Transient banners in display order.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    clock: Clock,
    ttl: Duration,
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            ttl: NOTIFICATION_TTL,
            next_id: 1,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let message = message.into();
        tracing::debug!(?kind, %message, "notification shown");
        self.items.push(Notification {
            id,
            kind,
            message,
            shown_at: self.clock.now(),
        });
        id
    }

    /// Remove a banner. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    /// Whether any banner has been up for at least the TTL at `now`.
    #[must_use]
    pub fn has_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.items.iter().any(|item| self.is_expired(item, now))
    }

    /// Drop every banner that has been up for at least the TTL.
    pub fn expire_at(&mut self, now: DateTime<Utc>) {
        let ttl = self.chrono_ttl();
        self.items.retain(|item| now - item.shown_at < ttl);
    }

    fn is_expired(&self, item: &Notification, now: DateTime<Utc>) -> bool {
        now - item.shown_at >= self.chrono_ttl()
    }

    fn chrono_ttl(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::MAX)
    }
}
