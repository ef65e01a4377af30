use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use tooflow_domain::{Reminder, ReminderStatus, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(find(reminder_id, &self.reminders))
    }

    async fn find_by_user(
        &self,
        reminder_id: &ID,
        user_id: &ID,
    ) -> anyhow::Result<Option<Reminder>> {
        Ok(find_one_by(&self.reminders, |r| {
            r.id == *reminder_id && r.user_id == *user_id
        }))
    }

    async fn find_many_by_user(
        &self,
        user_id: &ID,
        status: Option<ReminderStatus>,
    ) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| {
            r.user_id == *user_id && status.map(|s| s == r.status).unwrap_or(true)
        });
        reminders.sort_by_key(|r| r.reminder_date);
        Ok(reminders)
    }

    async fn find_due(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| r.is_due(now)))
    }

    async fn mark_sent(&self, reminder_id: &ID, sent_at: DateTime<Utc>) -> anyhow::Result<()> {
        let updated = update_many(
            &self.reminders,
            |r| r.id == *reminder_id && r.status == ReminderStatus::Active,
            |r| {
                r.status = ReminderStatus::Sent;
                r.sent_at = Some(sent_at);
            },
        );
        if updated.is_empty() {
            anyhow::bail!("Reminder with id: {} is not active", reminder_id);
        }
        Ok(())
    }

    async fn cancel(&self, reminder_id: &ID, user_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(update_many(
            &self.reminders,
            |r| {
                r.id == *reminder_id
                    && r.user_id == *user_id
                    && r.status == ReminderStatus::Active
            },
            |r| r.status = ReminderStatus::Cancelled,
        )
        .pop())
    }

    async fn delete(&self, reminder_id: &ID, user_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(delete_one_by(&self.reminders, |r| {
            r.id == *reminder_id && r.user_id == *user_id
        }))
    }
}
