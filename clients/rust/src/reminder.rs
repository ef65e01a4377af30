use crate::{APIResponse, BaseClient};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::sync::Arc;
use tooflow_api_structs::*;
use tooflow_domain::{Channel, Frequency, ReminderStatus, ReminderType, ID};

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub title: String,
    pub description: Option<String>,
    pub reminder_type: ReminderType,
    pub task_id: Option<ID>,
    pub project_id: Option<ID>,
    pub reminder_date: Option<DateTime<Utc>>,
    pub event_date: Option<DateTime<Utc>>,
    pub frequency: Option<Frequency>,
    pub channels: Option<Vec<Channel>>,
}

pub struct SendImmediateReminderInput {
    pub reminder_id: ID,
    pub user_id: ID,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            title: input.title,
            description: input.description,
            reminder_type: input.reminder_type,
            task_id: input.task_id,
            project_id: input.project_id,
            reminder_date: input.reminder_date,
            event_date: input.event_date,
            frequency: input.frequency,
            channels: input.channels,
        };
        self.base
            .post(body, "me/reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("me/reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn list(
        &self,
        status: Option<ReminderStatus>,
    ) -> APIResponse<get_reminders::APIResponse> {
        let path = match status {
            Some(status) => format!("me/reminders?status={}", status),
            None => "me/reminders".into(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn cancel(&self, reminder_id: ID) -> APIResponse<cancel_reminder::APIResponse> {
        self.base
            .put(
                (),
                format!("me/reminders/{}/cancel", reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("me/reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    /// Runs the reminder dispatcher once
    pub async fn process_due(&self) -> APIResponse<process_due_reminders::APIResponse> {
        self.base
            .post((), "reminders/process".into(), StatusCode::OK)
            .await
    }

    pub async fn send_immediate(
        &self,
        input: SendImmediateReminderInput,
    ) -> APIResponse<send_immediate_reminder::APIResponse> {
        let body = send_immediate_reminder::RequestBody {
            reminder_id: Some(input.reminder_id),
            user_id: Some(input.user_id),
        };
        self.base
            .post(body, "reminders/send-immediate".into(), StatusCode::OK)
            .await
    }
}
