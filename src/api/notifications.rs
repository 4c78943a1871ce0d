use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Title used for placeholder notices of unavailable actions.
pub const NOT_IMPLEMENTED_TITLE: &str = "Feature not implemented yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Name/role of a clicked node.
    NodeInfo,
    /// Outcome of "go to my position".
    Position,
    /// Placeholder for an action the host has not wired up.
    NotImplemented,
}

/// Transient toast-style message for the host's notification surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    #[must_use]
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn not_implemented(feature: &str) -> Self {
        Self::new(
            NotificationKind::NotImplemented,
            NOT_IMPLEMENTED_TITLE,
            format!("{feature} is not available yet."),
        )
    }
}

/// Bounded FIFO of pending notifications. When full, the oldest entry is
/// dropped to make room.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    capacity: usize,
    pending: VecDeque<Notification>,
}

impl NotificationCenter {
    /// `capacity` is raised to at least 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            pending: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        if self.pending.len() == self.capacity {
            if let Some(dropped) = self.pending.pop_front() {
                warn!(
                    capacity = self.capacity,
                    dropped_title = %dropped.title,
                    "notification queue full, dropping oldest entry"
                );
            }
        }
        self.pending.push_back(notification);
    }

    #[must_use]
    pub fn pending(&self) -> &VecDeque<Notification> {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }
}
