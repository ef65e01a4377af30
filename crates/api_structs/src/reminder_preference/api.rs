use crate::dtos::ReminderPreferenceDTO;
use serde::{Deserialize, Serialize};
use tooflow_domain::{Channel, ReminderPreference, ID};

pub mod get_reminder_preferences {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub preferences: Vec<ReminderPreferenceDTO>,
    }

    impl APIResponse {
        pub fn new(preferences: Vec<ReminderPreference>) -> Self {
            Self {
                preferences: preferences
                    .into_iter()
                    .map(ReminderPreferenceDTO::new)
                    .collect(),
            }
        }
    }
}

pub mod update_reminder_preference {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub preference_id: ID,
    }

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub enabled: Option<bool>,
        #[serde(default)]
        pub advance_time: Option<i64>,
        #[serde(default)]
        pub channels: Option<Vec<Channel>>,
        /// `once`, `daily`, `weekly`, `monthly` or a `HH:MM` clock time
        #[serde(default)]
        pub frequency: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub preference: ReminderPreferenceDTO,
    }

    impl APIResponse {
        pub fn new(preference: ReminderPreference) -> Self {
            Self {
                preference: ReminderPreferenceDTO::new(preference),
            }
        }
    }
}
