use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use tooflow_api_structs::*;
use tooflow_domain::{Channel, ID};

#[derive(Clone)]
pub struct ReminderPreferenceClient {
    base: Arc<BaseClient>,
}

pub struct UpdateReminderPreferenceInput {
    pub preference_id: ID,
    pub enabled: Option<bool>,
    pub advance_time: Option<i64>,
    pub channels: Option<Vec<Channel>>,
    pub frequency: Option<String>,
}

impl ReminderPreferenceClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Also stores the default preferences the user does not have yet
    pub async fn list(&self) -> APIResponse<get_reminder_preferences::APIResponse> {
        self.base
            .get("me/reminder-preferences".into(), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateReminderPreferenceInput,
    ) -> APIResponse<update_reminder_preference::APIResponse> {
        let body = update_reminder_preference::RequestBody {
            enabled: input.enabled,
            advance_time: input.advance_time,
            channels: input.channels,
            frequency: input.frequency,
        };
        self.base
            .put(
                body,
                format!("me/reminder-preferences/{}", input.preference_id),
                StatusCode::OK,
            )
            .await
    }
}
