use super::IReminderRepo;
use chrono::{DateTime, Utc};
use sqlx::{types::Uuid, FromRow, PgPool};
use tooflow_domain::{Reminder, ReminderStatus, ID};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    user_uid: Uuid,
    task_uid: Option<Uuid>,
    project_uid: Option<Uuid>,
    title: String,
    description: Option<String>,
    reminder_date: DateTime<Utc>,
    reminder_type: String,
    frequency: String,
    channels: Vec<String>,
    status: String,
    sent_at: Option<DateTime<Utc>>,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderRaw) -> Result<Self, Self::Error> {
        Ok(Reminder {
            id: raw.reminder_uid.into(),
            user_id: raw.user_uid.into(),
            task_id: raw.task_uid.map(ID::from),
            project_id: raw.project_uid.map(ID::from),
            title: raw.title,
            description: raw.description,
            reminder_date: raw.reminder_date,
            reminder_type: raw.reminder_type.parse()?,
            frequency: raw.frequency.parse()?,
            channels: raw
                .channels
                .iter()
                .map(|c| c.parse())
                .collect::<Result<Vec<_>, _>>()?,
            status: raw.status.parse()?,
            sent_at: raw.sent_at,
        })
    }
}

/// Rows that can not be read back are logged and left out, so one bad
/// reminder does not hold back the others
fn into_valid_reminders(rows: Vec<ReminderRaw>) -> Vec<Reminder> {
    rows.into_iter()
        .filter_map(|row| {
            let reminder_id = row.reminder_uid;
            match Reminder::try_from(row) {
                Ok(reminder) => Some(reminder),
                Err(e) => {
                    error!("Stored reminder {} is malformed. Err: {:?}", reminder_id, e);
                    None
                }
            }
        })
        .collect()
}

fn into_reminders(rows: Vec<ReminderRaw>) -> anyhow::Result<Vec<Reminder>> {
    rows.into_iter().map(Reminder::try_from).collect()
}

fn into_reminder(row: Option<ReminderRaw>) -> anyhow::Result<Option<Reminder>> {
    row.map(Reminder::try_from).transpose()
}

fn channel_names(reminder: &Reminder) -> Vec<String> {
    reminder.channels.iter().map(|c| c.to_string()).collect()
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, user_uid, task_uid, project_uid, title, description,
             reminder_date, reminder_type, frequency, channels, status, sent_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.user_id.inner_ref())
        .bind(reminder.task_id.as_ref().map(|id| *id.inner_ref()))
        .bind(reminder.project_id.as_ref().map(|id| *id.inner_ref()))
        .bind(&reminder.title)
        .bind(&reminder.description)
        .bind(reminder.reminder_date)
        .bind(reminder.reminder_type.as_str())
        .bind(reminder.frequency.as_str())
        .bind(channel_names(reminder))
        .bind(reminder.status.as_str())
        .bind(reminder.sent_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let row = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        into_reminder(row)
    }

    async fn find_by_user(
        &self,
        reminder_id: &ID,
        user_id: &ID,
    ) -> anyhow::Result<Option<Reminder>> {
        let row = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1 AND
            r.user_uid = $2
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        into_reminder(row)
    }

    async fn find_many_by_user(
        &self,
        user_id: &ID,
        status: Option<ReminderStatus>,
    ) -> anyhow::Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.user_uid = $1 AND
            ($2::text IS NULL OR r.status = $2)
            ORDER BY r.reminder_date ASC
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;
        into_reminders(rows)
    }

    async fn find_due(&self, now: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.status = 'active' AND
            r.reminder_date <= $1
            ORDER BY r.reminder_date ASC
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;
        Ok(into_valid_reminders(rows))
    }

    async fn mark_sent(&self, reminder_id: &ID, sent_at: DateTime<Utc>) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE reminders
            SET status = 'sent',
            sent_at = $2
            WHERE reminder_uid = $1 AND
            status = 'active'
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(sent_at)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            anyhow::bail!("Reminder with id: {} is not active", reminder_id);
        }
        Ok(())
    }

    async fn cancel(&self, reminder_id: &ID, user_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let row = sqlx::query_as::<_, ReminderRaw>(
            r#"
            UPDATE reminders
            SET status = 'cancelled'
            WHERE reminder_uid = $1 AND
            user_uid = $2 AND
            status = 'active'
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        into_reminder(row)
    }

    async fn delete(&self, reminder_id: &ID, user_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let row = sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders AS r
            WHERE r.reminder_uid = $1 AND
            r.user_uid = $2
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        into_reminder(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn raw_reminder(channels: Vec<&str>) -> ReminderRaw {
        ReminderRaw {
            reminder_uid: Uuid::new_v4(),
            user_uid: Uuid::new_v4(),
            task_uid: None,
            project_uid: None,
            title: "Renew the domain".into(),
            description: None,
            reminder_date: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            reminder_type: "task_due".into(),
            frequency: "once".into(),
            channels: channels.into_iter().map(String::from).collect(),
            status: "active".into(),
            sent_at: None,
        }
    }

    #[test]
    fn skips_malformed_due_reminders() {
        let valid = raw_reminder(vec!["notification"]);
        let valid_id = valid.reminder_uid;
        let rows = vec![raw_reminder(vec!["pager"]), valid];

        let reminders = into_valid_reminders(rows);
        assert_eq!(reminders.len(), 1);
        assert_eq!(*reminders[0].id.inner_ref(), valid_id);
    }

    #[test]
    fn malformed_single_reminder_is_an_error() {
        assert!(into_reminder(Some(raw_reminder(vec!["pager"]))).is_err());
        assert!(into_reminder(None).unwrap().is_none());
    }
}
