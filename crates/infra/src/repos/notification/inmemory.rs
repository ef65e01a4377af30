use super::INotificationRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use tooflow_domain::{Notification, NotificationFilter, ID};

pub struct InMemoryNotificationRepo {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for InMemoryNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &ID,
        filter: NotificationFilter,
    ) -> anyhow::Result<Vec<Notification>> {
        let mut notifications = find_by(&self.notifications, |n| {
            n.user_id == *user_id && filter.matches(n)
        });
        notifications.sort_by(|n1, n2| n2.created_at.cmp(&n1.created_at));
        Ok(notifications)
    }

    async fn mark_read(
        &self,
        notification_id: &ID,
        user_id: &ID,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Option<Notification>> {
        Ok(update_many(
            &self.notifications,
            |n| n.id == *notification_id && n.user_id == *user_id,
            |n| n.mark_read(now),
        )
        .pop())
    }

    async fn mark_all_read(&self, user_id: &ID, now: DateTime<Utc>) -> anyhow::Result<u64> {
        let updated = update_many(
            &self.notifications,
            |n| n.user_id == *user_id && !n.read,
            |n| n.mark_read(now),
        );
        Ok(updated.len() as u64)
    }

    async fn delete(
        &self,
        notification_id: &ID,
        user_id: &ID,
    ) -> anyhow::Result<Option<Notification>> {
        Ok(delete_one_by(&self.notifications, |n| {
            n.id == *notification_id && n.user_id == *user_id
        }))
    }
}
