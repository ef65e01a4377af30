mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;
use tooflow_domain::{Reminder, ReminderStatus, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    /// Finds the `Reminder` only when it belongs to `user_id`
    async fn find_by_user(&self, reminder_id: &ID, user_id: &ID)
        -> anyhow::Result<Option<Reminder>>;
    /// All `Reminder`s of the user ordered by `reminder_date`, optionally
    /// restricted to one status
    async fn find_many_by_user(
        &self,
        user_id: &ID,
        status: Option<ReminderStatus>,
    ) -> anyhow::Result<Vec<Reminder>>;
    /// Active `Reminder`s with a `reminder_date` at or before `now`
    async fn find_due(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>>;
    /// Fails when the `Reminder` is missing or no longer active
    async fn mark_sent(&self, reminder_id: &ID, sent_at: DateTime<Utc>) -> anyhow::Result<()>;
    /// Cancels the user's `Reminder` if it is still active and returns it.
    /// `None` when there is no active reminder with that id for the user.
    async fn cancel(&self, reminder_id: &ID, user_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn delete(&self, reminder_id: &ID, user_id: &ID) -> anyhow::Result<Option<Reminder>>;
}
