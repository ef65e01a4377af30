use crate::{
    reminder::{string_enum, Reminder},
    shared::entity::{Entity, ID},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What produced a `Notification`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Reminder,
    TaskAssigned,
    TaskUpdated,
    ProjectUpdated,
    ChatMessage,
    FileUploaded,
    System,
}

string_enum!(NotificationType, "notification type", {
    Reminder => "reminder",
    TaskAssigned => "task_assigned",
    TaskUpdated => "task_updated",
    ProjectUpdated => "project_updated",
    ChatMessage => "chat_message",
    FileUploaded => "file_uploaded",
    System => "system",
});

/// Payload the client uses to navigate from a `Notification`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    /// Id of the row the notification is about, e.g. the `Reminder`
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "related_id")]
    pub related_id: Option<ID>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: ID,
    pub user_id: ID,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub data: NotificationData,
    /// Starts out `false` and is only ever set to `true`
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        user_id: ID,
        kind: NotificationType,
        title: String,
        message: String,
        data: NotificationData,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            user_id,
            kind,
            title,
            message,
            data,
            read: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The notification delivered to the owner when `reminder` fires
    pub fn from_reminder(reminder: &Reminder, now: DateTime<Utc>) -> Self {
        let message = match &reminder.description {
            Some(description) if !description.trim().is_empty() => description.clone(),
            _ => format!("Recordatorio: {}", reminder.title),
        };
        let data = NotificationData {
            related_id: Some(reminder.id.clone()),
            link: Some(reminder.link()),
        };

        Self::new(
            reminder.user_id.clone(),
            NotificationType::Reminder,
            reminder.title.clone(),
            message,
            data,
            now,
        )
    }

    pub fn mark_read(&mut self, now: DateTime<Utc>) {
        if !self.read {
            self.read = true;
            self.updated_at = now;
        }
    }
}

impl Entity for Notification {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Which notifications of a user to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFilter {
    All,
    Unread,
}

impl Default for NotificationFilter {
    fn default() -> Self {
        Self::All
    }
}

impl NotificationFilter {
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.read,
        }
    }
}
