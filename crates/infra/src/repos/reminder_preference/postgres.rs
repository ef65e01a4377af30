use super::IReminderPreferenceRepo;
use sqlx::{types::Uuid, FromRow, PgPool};
use tooflow_domain::{ReminderPreference, ID};

pub struct PostgresReminderPreferenceRepo {
    pool: PgPool,
}

impl PostgresReminderPreferenceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderPreferenceRaw {
    preference_uid: Uuid,
    user_uid: Uuid,
    reminder_type: String,
    enabled: bool,
    advance_time: i64,
    channels: Vec<String>,
    frequency: String,
}

impl TryFrom<ReminderPreferenceRaw> for ReminderPreference {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderPreferenceRaw) -> Result<Self, Self::Error> {
        Ok(ReminderPreference {
            id: raw.preference_uid.into(),
            user_id: raw.user_uid.into(),
            reminder_type: raw.reminder_type.parse()?,
            enabled: raw.enabled,
            advance_time: raw.advance_time,
            channels: raw
                .channels
                .iter()
                .map(|c| c.parse())
                .collect::<Result<Vec<_>, _>>()?,
            frequency: raw.frequency.parse()?,
        })
    }
}

fn channel_names(preference: &ReminderPreference) -> Vec<String> {
    preference.channels.iter().map(|c| c.to_string()).collect()
}

#[async_trait::async_trait]
impl IReminderPreferenceRepo for PostgresReminderPreferenceRepo {
    async fn bulk_insert(&self, preferences: &[ReminderPreference]) -> anyhow::Result<()> {
        for preference in preferences {
            sqlx::query(
                r#"
            INSERT INTO reminder_preferences
            (preference_uid, user_uid, reminder_type, enabled, advance_time, channels, frequency)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_uid, reminder_type) DO NOTHING
            "#,
            )
            .bind(preference.id.inner_ref())
            .bind(preference.user_id.inner_ref())
            .bind(preference.reminder_type.as_str())
            .bind(preference.enabled)
            .bind(preference.advance_time)
            .bind(channel_names(preference))
            .bind(preference.frequency.to_string())
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn save(&self, preference: &ReminderPreference) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE reminder_preferences
            SET enabled = $2,
            advance_time = $3,
            channels = $4,
            frequency = $5
            WHERE preference_uid = $1
            "#,
        )
        .bind(preference.id.inner_ref())
        .bind(preference.enabled)
        .bind(preference.advance_time)
        .bind(channel_names(preference))
        .bind(preference.frequency.to_string())
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            anyhow::bail!("Reminder preference with id: {} does not exist", preference.id);
        }
        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<ReminderPreference>> {
        let rows = sqlx::query_as::<_, ReminderPreferenceRaw>(
            r#"
            SELECT * FROM reminder_preferences AS p
            WHERE p.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ReminderPreference::try_from).collect()
    }

    async fn find_by_id_and_user(
        &self,
        preference_id: &ID,
        user_id: &ID,
    ) -> anyhow::Result<Option<ReminderPreference>> {
        sqlx::query_as::<_, ReminderPreferenceRaw>(
            r#"
            SELECT * FROM reminder_preferences AS p
            WHERE p.preference_uid = $1 AND
            p.user_uid = $2
            "#,
        )
        .bind(preference_id.inner_ref())
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?
        .map(ReminderPreference::try_from)
        .transpose()
    }
}
