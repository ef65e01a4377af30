use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tooflow_domain::{Notification, NotificationData, NotificationType, ID};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDTO {
    pub id: ID,
    pub user_id: ID,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub data: NotificationData,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NotificationDTO {
    pub fn new(notification: Notification) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            data: notification.data,
            read: notification.read,
            created_at: notification.created_at,
            updated_at: notification.updated_at,
        }
    }
}

impl From<NotificationDTO> for Notification {
    fn from(dto: NotificationDTO) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            kind: dto.kind,
            title: dto.title,
            message: dto.message,
            data: dto.data,
            read: dto.read,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}
