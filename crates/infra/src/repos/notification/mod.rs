mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryNotificationRepo;
pub use postgres::PostgresNotificationRepo;
use tooflow_domain::{Notification, NotificationFilter, ID};

#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()>;
    /// Notifications of the user, newest first
    async fn find_by_user(
        &self,
        user_id: &ID,
        filter: NotificationFilter,
    ) -> anyhow::Result<Vec<Notification>>;
    /// Sets `read` on the user's `Notification` and returns it. `updated_at`
    /// is only moved when the notification was unread.
    async fn mark_read(
        &self,
        notification_id: &ID,
        user_id: &ID,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Option<Notification>>;
    /// Marks every unread `Notification` of the user as read and returns
    /// how many were changed
    async fn mark_all_read(&self, user_id: &ID, now: DateTime<Utc>) -> anyhow::Result<u64>;
    async fn delete(
        &self,
        notification_id: &ID,
        user_id: &ID,
    ) -> anyhow::Result<Option<Notification>>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::{Duration, TimeZone, Utc};
    use tooflow_domain::{Notification, NotificationFilter, NotificationType, ID};

    fn notification_factory(user_id: &ID, minute: i64) -> Notification {
        let created_at =
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::minutes(minute);
        Notification::new(
            user_id.clone(),
            NotificationType::TaskAssigned,
            format!("Task {}", minute),
            "You were assigned a task".into(),
            Default::default(),
            created_at,
        )
    }

    #[tokio::test]
    async fn lists_newest_first_and_filters_unread() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let first = notification_factory(&user_id, 0);
        let second = notification_factory(&user_id, 1);
        let third = notification_factory(&user_id, 2);
        for n in [&second, &first, &third] {
            ctx.repos.notifications.insert(n).await.unwrap();
        }

        let all = ctx
            .repos
            .notifications
            .find_by_user(&user_id, NotificationFilter::All)
            .await
            .unwrap();
        assert_eq!(
            all.iter().map(|n| n.id.clone()).collect::<Vec<_>>(),
            vec![third.id.clone(), second.id.clone(), first.id.clone()]
        );

        let now = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        let read = ctx
            .repos
            .notifications
            .mark_read(&second.id, &user_id, now)
            .await
            .unwrap()
            .expect("To mark notification read");
        assert!(read.read);
        assert_eq!(read.updated_at, now);

        let unread = ctx
            .repos
            .notifications
            .find_by_user(&user_id, NotificationFilter::Unread)
            .await
            .unwrap();
        assert_eq!(
            unread.iter().map(|n| n.id.clone()).collect::<Vec<_>>(),
            vec![third.id, first.id]
        );
    }

    #[tokio::test]
    async fn mark_read_keeps_first_read_time() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let notification = notification_factory(&user_id, 0);
        ctx.repos.notifications.insert(&notification).await.unwrap();

        let first_read = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        ctx.repos
            .notifications
            .mark_read(&notification.id, &user_id, first_read)
            .await
            .unwrap()
            .unwrap();
        let again = ctx
            .repos
            .notifications
            .mark_read(&notification.id, &user_id, first_read + Duration::days(1))
            .await
            .unwrap()
            .unwrap();
        assert!(again.read);
        assert_eq!(again.updated_at, first_read);

        // Not the owner
        assert!(ctx
            .repos
            .notifications
            .mark_read(&notification.id, &ID::default(), first_read)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn mark_all_read_only_touches_the_user() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let other_user_id = ID::default();
        for minute in 0..3 {
            ctx.repos
                .notifications
                .insert(&notification_factory(&user_id, minute))
                .await
                .unwrap();
        }
        let other = notification_factory(&other_user_id, 0);
        ctx.repos.notifications.insert(&other).await.unwrap();

        let now = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        let changed = ctx
            .repos
            .notifications
            .mark_all_read(&user_id, now)
            .await
            .unwrap();
        assert_eq!(changed, 3);
        assert!(ctx
            .repos
            .notifications
            .find_by_user(&user_id, NotificationFilter::Unread)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            ctx.repos
                .notifications
                .find_by_user(&other_user_id, NotificationFilter::Unread)
                .await
                .unwrap(),
            vec![other]
        );

        // Nothing left to mark
        assert_eq!(
            ctx.repos
                .notifications
                .mark_all_read(&user_id, now)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn deletes_only_own_notifications() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let notification = notification_factory(&user_id, 0);
        ctx.repos.notifications.insert(&notification).await.unwrap();

        assert!(ctx
            .repos
            .notifications
            .delete(&notification.id, &ID::default())
            .await
            .unwrap()
            .is_none());
        assert!(ctx
            .repos
            .notifications
            .delete(&notification.id, &user_id)
            .await
            .unwrap()
            .is_some());
        assert!(ctx
            .repos
            .notifications
            .find_by_user(&user_id, NotificationFilter::All)
            .await
            .unwrap()
            .is_empty());
    }
}
