use serde::{Deserialize, Serialize};
use tooflow_domain::{Channel, PreferenceSchedule, ReminderPreference, ReminderType, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPreferenceDTO {
    pub id: ID,
    pub user_id: ID,
    pub reminder_type: ReminderType,
    pub enabled: bool,
    pub advance_time: i64,
    pub channels: Vec<Channel>,
    pub frequency: PreferenceSchedule,
}

impl ReminderPreferenceDTO {
    pub fn new(preference: ReminderPreference) -> Self {
        Self {
            id: preference.id,
            user_id: preference.user_id,
            reminder_type: preference.reminder_type,
            enabled: preference.enabled,
            advance_time: preference.advance_time,
            channels: preference.channels,
            frequency: preference.frequency,
        }
    }
}
