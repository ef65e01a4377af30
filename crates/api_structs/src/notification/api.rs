use crate::dtos::NotificationDTO;
use serde::{Deserialize, Serialize};
use tooflow_domain::{Notification, NotificationData, NotificationFilter, NotificationType, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub notification: NotificationDTO,
}

impl NotificationResponse {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification: NotificationDTO::new(notification),
        }
    }
}

pub mod create_notification {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: ID,
        #[serde(rename = "type")]
        pub kind: NotificationType,
        pub title: String,
        pub message: String,
        #[serde(default)]
        pub data: Option<NotificationData>,
    }

    pub type APIResponse = NotificationResponse;
}

pub mod get_notifications {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub filter: Option<NotificationFilter>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub notifications: Vec<NotificationDTO>,
        pub unread_count: usize,
    }

    impl APIResponse {
        pub fn new(notifications: Vec<Notification>, unread_count: usize) -> Self {
            Self {
                notifications: notifications
                    .into_iter()
                    .map(NotificationDTO::new)
                    .collect(),
                unread_count,
            }
        }
    }
}

pub mod mark_notification_read {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub notification_id: ID,
    }

    pub type APIResponse = NotificationResponse;
}

pub mod mark_all_notifications_read {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub updated_count: u64,
    }
}

pub mod delete_notification {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub notification_id: ID,
    }

    pub type APIResponse = NotificationResponse;
}
