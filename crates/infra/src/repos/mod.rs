mod notification;
mod reminder;
mod reminder_preference;
mod shared;

use notification::PostgresNotificationRepo;
use reminder::PostgresReminderRepo;
use reminder_preference::PostgresReminderPreferenceRepo;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

pub use notification::{INotificationRepo, InMemoryNotificationRepo};
pub use reminder::{IReminderRepo, InMemoryReminderRepo};
pub use reminder_preference::{IReminderPreferenceRepo, InMemoryReminderPreferenceRepo};

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
    pub reminder_preferences: Arc<dyn IReminderPreferenceRepo>,
    pub notifications: Arc<dyn INotificationRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB RUNNING MIGRATIONS ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB RUNNING MIGRATIONS ... [done]");

        Ok(Self {
            reminders: Arc::new(PostgresReminderRepo::new(pool.clone())),
            reminder_preferences: Arc::new(PostgresReminderPreferenceRepo::new(pool.clone())),
            notifications: Arc::new(PostgresNotificationRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
            reminder_preferences: Arc::new(InMemoryReminderPreferenceRepo::new()),
            notifications: Arc::new(InMemoryNotificationRepo::new()),
        }
    }
}
