mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderPreferenceRepo;
pub use postgres::PostgresReminderPreferenceRepo;
use tooflow_domain::{ReminderPreference, ID};

#[async_trait::async_trait]
pub trait IReminderPreferenceRepo: Send + Sync {
    /// Inserts the preferences, skipping any whose `(user_id, reminder_type)`
    /// already has a row
    async fn bulk_insert(&self, preferences: &[ReminderPreference]) -> anyhow::Result<()>;
    async fn save(&self, preference: &ReminderPreference) -> anyhow::Result<()>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<ReminderPreference>>;
    /// Finds the `ReminderPreference` only when it belongs to `user_id`
    async fn find_by_id_and_user(
        &self,
        preference_id: &ID,
        user_id: &ID,
    ) -> anyhow::Result<Option<ReminderPreference>>;
}
