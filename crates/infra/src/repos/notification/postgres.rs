use super::INotificationRepo;
use chrono::{DateTime, Utc};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use tooflow_domain::{Notification, NotificationData, NotificationFilter, ID};

pub struct PostgresNotificationRepo {
    pool: PgPool,
}

impl PostgresNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRaw {
    notification_uid: Uuid,
    user_uid: Uuid,
    r#type: String,
    title: String,
    message: String,
    data: Json<NotificationData>,
    read: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NotificationRaw> for Notification {
    type Error = anyhow::Error;

    fn try_from(raw: NotificationRaw) -> Result<Self, Self::Error> {
        Ok(Notification {
            id: raw.notification_uid.into(),
            user_id: raw.user_uid.into(),
            kind: raw.r#type.parse()?,
            title: raw.title,
            message: raw.message,
            data: raw.data.0,
            read: raw.read,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

#[async_trait::async_trait]
impl INotificationRepo for PostgresNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications
            (notification_uid, user_uid, type, title, message, data, read, created_at, updated_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(notification.id.inner_ref())
        .bind(notification.user_id.inner_ref())
        .bind(notification.kind.as_str())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(Json(&notification.data))
        .bind(notification.read)
        .bind(notification.created_at)
        .bind(notification.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &ID,
        filter: NotificationFilter,
    ) -> anyhow::Result<Vec<Notification>> {
        let only_unread = filter == NotificationFilter::Unread;
        let rows = sqlx::query_as::<_, NotificationRaw>(
            r#"
            SELECT * FROM notifications AS n
            WHERE n.user_uid = $1 AND
            (NOT $2 OR n.read = false)
            ORDER BY n.created_at DESC
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(only_unread)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Notification::try_from).collect()
    }

    async fn mark_read(
        &self,
        notification_id: &ID,
        user_id: &ID,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Option<Notification>> {
        sqlx::query_as::<_, NotificationRaw>(
            r#"
            UPDATE notifications
            SET updated_at = CASE WHEN read THEN updated_at ELSE $3 END,
            read = true
            WHERE notification_uid = $1 AND
            user_uid = $2
            RETURNING *
            "#,
        )
        .bind(notification_id.inner_ref())
        .bind(user_id.inner_ref())
        .bind(now)
        .fetch_optional(&self.pool)
        .await?
        .map(Notification::try_from)
        .transpose()
    }

    async fn mark_all_read(&self, user_id: &ID, now: DateTime<Utc>) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE notifications
            SET read = true,
            updated_at = $2
            WHERE user_uid = $1 AND
            read = false
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected())
    }

    async fn delete(
        &self,
        notification_id: &ID,
        user_id: &ID,
    ) -> anyhow::Result<Option<Notification>> {
        sqlx::query_as::<_, NotificationRaw>(
            r#"
            DELETE FROM notifications AS n
            WHERE n.notification_uid = $1 AND
            n.user_uid = $2
            RETURNING *
            "#,
        )
        .bind(notification_id.inner_ref())
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?
        .map(Notification::try_from)
        .transpose()
    }
}
