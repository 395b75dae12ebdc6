//! Transient advisory messages
//!
//! Alerts expire after their lifetime. The number shown at once is capped so
//! repeated invalid submissions cannot pile up messages.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default maximum number of alerts on screen at once
pub const DEFAULT_MAX_ALERTS: usize = 7;

/// A single alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub text: String,
    pub kind: AlertKind,
    /// `None` means the alert stays until cleared
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Advisory,
    Win,
    Loss,
}

/// Bounded queue of alerts, newest first
#[derive(Debug, Clone)]
pub struct AlertQueue {
    alerts: VecDeque<Alert>,
    capacity: usize,
}

impl Default for AlertQueue {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ALERTS)
    }
}

impl AlertQueue {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            alerts: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Show an alert
    ///
    /// Returns `false` (and drops the alert) when the queue is already full.
    pub fn push(
        &mut self,
        text: impl Into<String>,
        kind: AlertKind,
        lifetime: Option<Duration>,
        now: Instant,
    ) -> bool {
        if self.alerts.len() >= self.capacity {
            return false;
        }

        self.alerts.push_front(Alert {
            text: text.into(),
            kind,
            expires_at: lifetime.map(|d| now + d),
        });
        true
    }

    /// Show an alert even when full, evicting the oldest one
    ///
    /// Used for end-of-game messages, which must never be dropped.
    pub fn push_evicting(
        &mut self,
        text: impl Into<String>,
        kind: AlertKind,
        lifetime: Option<Duration>,
        now: Instant,
    ) {
        while self.alerts.len() >= self.capacity.max(1) {
            self.alerts.pop_back();
        }
        self.alerts.push_front(Alert {
            text: text.into(),
            kind,
            expires_at: lifetime.map(|d| now + d),
        });
    }

    /// Drop alerts whose lifetime has elapsed
    pub fn prune(&mut self, now: Instant) {
        self.alerts
            .retain(|alert| alert.expires_at.is_none_or(|at| at > now));
    }

    /// Remove every alert, persistent ones included
    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
