use crate::dtos::ReminderDTO;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tooflow_domain::{Channel, Frequency, Reminder, ReminderStatus, ReminderType, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        #[serde(default)]
        pub description: Option<String>,
        pub reminder_type: ReminderType,
        #[serde(default)]
        pub task_id: Option<ID>,
        #[serde(default)]
        pub project_id: Option<ID>,
        /// When the reminder should fire
        #[serde(default)]
        pub reminder_date: Option<DateTime<Utc>>,
        /// When the event takes place. Used together with the advance time
        /// of the user's preference when `reminder_date` is not given.
        #[serde(default)]
        pub event_date: Option<DateTime<Utc>>,
        #[serde(default)]
        pub frequency: Option<Frequency>,
        #[serde(default)]
        pub channels: Option<Vec<Channel>>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub status: Option<ReminderStatus>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod cancel_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod process_due_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub sent_count: usize,
        pub processed_count: usize,
    }

    impl APIResponse {
        pub fn new(sent_count: usize, processed_count: usize) -> Self {
            Self {
                success: true,
                message: format!(
                    "Processed {} reminders, sent {}",
                    processed_count, sent_count
                ),
                sent_count,
                processed_count,
            }
        }
    }
}

pub mod send_immediate_reminder {
    use super::*;

    /// Both fields are required. They are optional here so that a missing
    /// field is reported by name instead of as a malformed body.
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default, alias = "reminderId")]
        pub reminder_id: Option<ID>,
        #[serde(default, alias = "userId")]
        pub user_id: Option<ID>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
    }

    impl APIResponse {
        pub fn new(reminder: &Reminder) -> Self {
            Self {
                success: true,
                message: format!("Reminder \"{}\" sent", reminder.title),
            }
        }
    }
}
