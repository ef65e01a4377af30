mod cancel_reminder;
mod create_reminder;
mod delete_reminder;
mod get_reminder;
mod get_reminders;
pub mod process_due_reminders;
mod send_immediate_reminder;

use actix_web::web;
use cancel_reminder::cancel_reminder_controller;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_reminder::get_reminder_controller;
use get_reminders::get_reminders_controller;
use process_due_reminders::process_due_reminders_controller;
use send_immediate_reminder::send_immediate_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/reminders/process",
        web::post().to(process_due_reminders_controller),
    );
    cfg.route(
        "/reminders/send-immediate",
        web::post().to(send_immediate_reminder_controller),
    );

    cfg.route("/me/reminders", web::post().to(create_reminder_controller));
    cfg.route("/me/reminders", web::get().to(get_reminders_controller));
    cfg.route(
        "/me/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/me/reminders/{reminder_id}/cancel",
        web::put().to(cancel_reminder_controller),
    );
    cfg.route(
        "/me/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::{DateTime, Utc};
    use tooflow_domain::{
        Channel, Frequency, Notification, NotificationFilter, Reminder, ReminderStatus,
        ReminderType, ID,
    };
    use tooflow_infra::{INotificationRepo, IReminderRepo, InMemoryNotificationRepo};

    pub fn reminder_for(
        user_id: &ID,
        title: &str,
        frequency: Frequency,
        reminder_date: DateTime<Utc>,
    ) -> Reminder {
        Reminder {
            id: Default::default(),
            user_id: user_id.clone(),
            task_id: Some(ID::default()),
            project_id: Some(ID::default()),
            title: title.into(),
            description: Some("Check the checklist in the task".into()),
            reminder_date,
            reminder_type: ReminderType::TaskDue,
            frequency,
            channels: vec![Channel::Notification, Channel::Email],
            status: ReminderStatus::Active,
            sent_at: None,
        }
    }

    /// Notification store that refuses notifications with the given title
    pub struct FailingNotificationRepo {
        failing_title: String,
        inner: InMemoryNotificationRepo,
    }

    impl FailingNotificationRepo {
        pub fn new(failing_title: &str) -> Self {
            Self {
                failing_title: failing_title.into(),
                inner: InMemoryNotificationRepo::new(),
            }
        }
    }

    #[async_trait::async_trait]
    impl INotificationRepo for FailingNotificationRepo {
        async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
            if notification.title == self.failing_title {
                anyhow::bail!("Connection reset while inserting notification");
            }
            self.inner.insert(notification).await
        }

        async fn find_by_user(
            &self,
            user_id: &ID,
            filter: NotificationFilter,
        ) -> anyhow::Result<Vec<Notification>> {
            self.inner.find_by_user(user_id, filter).await
        }

        async fn mark_read(
            &self,
            notification_id: &ID,
            user_id: &ID,
            now: DateTime<Utc>,
        ) -> anyhow::Result<Option<Notification>> {
            self.inner.mark_read(notification_id, user_id, now).await
        }

        async fn mark_all_read(&self, user_id: &ID, now: DateTime<Utc>) -> anyhow::Result<u64> {
            self.inner.mark_all_read(user_id, now).await
        }

        async fn delete(
            &self,
            notification_id: &ID,
            user_id: &ID,
        ) -> anyhow::Result<Option<Notification>> {
            self.inner.delete(notification_id, user_id).await
        }
    }

    /// Reminder store whose database is unreachable
    pub struct FailingReminderRepo;

    #[async_trait::async_trait]
    impl IReminderRepo for FailingReminderRepo {
        async fn insert(&self, _reminder: &Reminder) -> anyhow::Result<()> {
            anyhow::bail!("Pool timed out while waiting for a connection")
        }

        async fn find(&self, _reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
            anyhow::bail!("Pool timed out while waiting for a connection")
        }

        async fn find_by_user(
            &self,
            _reminder_id: &ID,
            _user_id: &ID,
        ) -> anyhow::Result<Option<Reminder>> {
            anyhow::bail!("Pool timed out while waiting for a connection")
        }

        async fn find_many_by_user(
            &self,
            _user_id: &ID,
            _status: Option<ReminderStatus>,
        ) -> anyhow::Result<Vec<Reminder>> {
            anyhow::bail!("Pool timed out while waiting for a connection")
        }

        async fn find_due(&self, _now: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>> {
            anyhow::bail!("Pool timed out while waiting for a connection")
        }

        async fn mark_sent(
            &self,
            _reminder_id: &ID,
            _sent_at: DateTime<Utc>,
        ) -> anyhow::Result<()> {
            anyhow::bail!("Pool timed out while waiting for a connection")
        }

        async fn cancel(
            &self,
            _reminder_id: &ID,
            _user_id: &ID,
        ) -> anyhow::Result<Option<Reminder>> {
            anyhow::bail!("Pool timed out while waiting for a connection")
        }

        async fn delete(
            &self,
            _reminder_id: &ID,
            _user_id: &ID,
        ) -> anyhow::Result<Option<Reminder>> {
            anyhow::bail!("Pool timed out while waiting for a connection")
        }
    }
}
