use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tooflow_domain::{Channel, Frequency, Reminder, ReminderStatus, ReminderType, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub user_id: ID,
    pub task_id: Option<ID>,
    pub project_id: Option<ID>,
    pub title: String,
    pub description: Option<String>,
    pub reminder_date: DateTime<Utc>,
    pub reminder_type: ReminderType,
    pub frequency: Frequency,
    pub channels: Vec<Channel>,
    pub status: ReminderStatus,
    pub sent_at: Option<DateTime<Utc>>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            user_id: reminder.user_id,
            task_id: reminder.task_id,
            project_id: reminder.project_id,
            title: reminder.title,
            description: reminder.description,
            reminder_date: reminder.reminder_date,
            reminder_type: reminder.reminder_type,
            frequency: reminder.frequency,
            channels: reminder.channels,
            status: reminder.status,
            sent_at: reminder.sent_at,
        }
    }
}
