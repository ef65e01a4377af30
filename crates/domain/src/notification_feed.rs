use crate::{notification::Notification, shared::entity::ID};
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;

/// How long a freshly delivered `Notification` stays in the transient
/// toast view
pub const TOAST_DURATION_SECS: i64 = 8;

/// Change to a user's notifications as pushed to a connected client
#[derive(Debug, Clone)]
pub enum FeedEvent {
    Inserted(Notification),
    Updated(Notification),
    Deleted(ID),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub notification_id: ID,
    pub expires_at: DateTime<Utc>,
}

/// The live list of notifications a client session renders.
///
/// Push events are only queued by `enqueue`. `apply_pending` merges
/// them into the list keyed by notification id, so duplicate or out of
/// order deliveries never produce duplicate rows, and the unread count
/// is always derived from the list itself.
#[derive(Debug, Default)]
pub struct NotificationFeed {
    pending: VecDeque<FeedEvent>,
    notifications: Vec<Notification>,
    toasts: Vec<Toast>,
}

impl NotificationFeed {
    pub fn new(notifications: Vec<Notification>) -> Self {
        let mut feed = Self::default();
        for notification in notifications {
            feed.upsert(notification);
        }
        feed
    }

    pub fn enqueue(&mut self, event: FeedEvent) {
        self.pending.push_back(event);
    }

    /// Drains the queued events into the list. Returns how many events
    /// were applied.
    pub fn apply_pending(&mut self, now: DateTime<Utc>) -> usize {
        let mut applied = 0;
        while let Some(event) = self.pending.pop_front() {
            match event {
                FeedEvent::Inserted(notification) => {
                    let is_new = !self.contains(&notification.id);
                    if is_new && !notification.read {
                        self.toasts.push(Toast {
                            notification_id: notification.id.clone(),
                            expires_at: now + Duration::seconds(TOAST_DURATION_SECS),
                        });
                    }
                    self.upsert(notification);
                }
                FeedEvent::Updated(notification) => self.upsert(notification),
                FeedEvent::Deleted(id) => {
                    self.notifications.retain(|n| n.id != id);
                    self.dismiss_toast(&id);
                }
            }
            applied += 1;
        }
        applied
    }

    fn contains(&self, id: &ID) -> bool {
        self.notifications.iter().any(|n| n.id == *id)
    }

    fn upsert(&mut self, notification: Notification) {
        match self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification.id)
        {
            Some(existing) => {
                // A stale copy must not flip a read notification back to unread
                let read = existing.read || notification.read;
                *existing = notification;
                existing.read = read;
            }
            None => self.notifications.push(notification),
        }
        self.notifications
            .sort_by(|n1, n2| n2.created_at.cmp(&n1.created_at));
    }

    /// Newest first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Notifications currently shown as toasts
    pub fn visible_toasts(&self, now: DateTime<Utc>) -> Vec<&Notification> {
        self.toasts
            .iter()
            .filter(|toast| toast.expires_at > now)
            .filter_map(|toast| {
                self.notifications
                    .iter()
                    .find(|n| n.id == toast.notification_id)
            })
            .collect()
    }

    /// Removes the toast only, the notification keeps its `read` state
    pub fn dismiss_toast(&mut self, notification_id: &ID) {
        self.toasts.retain(|t| t.notification_id != *notification_id);
    }

    /// Drops toasts that have expired at `now`
    pub fn prune_toasts(&mut self, now: DateTime<Utc>) {
        self.toasts.retain(|t| t.expires_at > now);
    }
}
