use crate::{
    error::TooFlowError,
    reminder_preference::GetReminderPreferencesUseCase,
    shared::{
        auth::protect_user_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Duration, Utc};
use tooflow_api_structs::create_reminder::*;
use tooflow_domain::{
    normalize_channels, Channel, Frequency, Reminder, ReminderPreference, ReminderStatus,
    ReminderType, ID,
};
use tooflow_infra::TooFlowContext;

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::EmptyTitle => {
            TooFlowError::BadClientData("A reminder must have a title.".into())
        }
        UseCaseErrors::MissingDate => TooFlowError::BadClientData(
            "Either the reminder date or the event date must be given.".into(),
        ),
        UseCaseErrors::DateInPast(date) => TooFlowError::BadClientData(format!(
            "The reminder date: {} has already passed.",
            date
        )),
        UseCaseErrors::EventDateOutOfRange(date) => TooFlowError::BadClientData(format!(
            "The event date: {} is too early to be reminded about.",
            date
        )),
        UseCaseErrors::EmptyChannels => {
            TooFlowError::BadClientData("At least one channel must be selected.".into())
        }
        UseCaseErrors::CategoryDisabled(reminder_type) => TooFlowError::Conflict(format!(
            "Reminders of type: {} are disabled in the reminder preferences.",
            reminder_type
        )),
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

pub async fn create_reminder_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let user_id = protect_user_route(&http_req)?;

    let body = body.0;
    let usecase = CreateReminderUseCase {
        user_id,
        title: body.title,
        description: body.description,
        reminder_type: body.reminder_type,
        task_id: body.task_id,
        project_id: body.project_id,
        reminder_date: body.reminder_date,
        event_date: body.event_date,
        frequency: body.frequency,
        channels: body.channels,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub reminder_type: ReminderType,
    pub task_id: Option<ID>,
    pub project_id: Option<ID>,
    pub reminder_date: Option<DateTime<Utc>>,
    /// Used with the advance time of the preference when there is no
    /// `reminder_date`
    pub event_date: Option<DateTime<Utc>>,
    pub frequency: Option<Frequency>,
    pub channels: Option<Vec<Channel>>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyTitle,
    MissingDate,
    DateInPast(DateTime<Utc>),
    EventDateOutOfRange(DateTime<Utc>),
    EmptyChannels,
    CategoryDisabled(ReminderType),
    StorageError,
}

impl CreateReminderUseCase {
    async fn preference(&self, ctx: &TooFlowContext) -> Result<ReminderPreference, UseCaseErrors> {
        if !self.reminder_type.has_preference() {
            return Ok(ReminderPreference::default_for(
                self.user_id.clone(),
                self.reminder_type,
            ));
        }

        let usecase = GetReminderPreferencesUseCase {
            user_id: self.user_id.clone(),
        };
        let preferences = execute(usecase, ctx)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        preferences
            .into_iter()
            .find(|p| p.reminder_type == self.reminder_type)
            .ok_or(UseCaseErrors::StorageError)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
        if self.title.trim().is_empty() {
            return Err(UseCaseErrors::EmptyTitle);
        }

        let preference = self.preference(ctx).await?;
        if !preference.enabled {
            return Err(UseCaseErrors::CategoryDisabled(self.reminder_type));
        }

        let reminder_date = match (self.reminder_date, self.event_date) {
            (Some(reminder_date), _) => reminder_date,
            (None, Some(event_date)) => event_date
                .checked_sub_signed(Duration::minutes(preference.advance_time))
                .ok_or(UseCaseErrors::EventDateOutOfRange(event_date))?,
            (None, None) => return Err(UseCaseErrors::MissingDate),
        };
        if reminder_date < ctx.sys.now() {
            return Err(UseCaseErrors::DateInPast(reminder_date));
        }

        let channels = normalize_channels(
            self.channels
                .take()
                .unwrap_or_else(|| preference.channels.clone()),
        );
        if channels.is_empty() {
            return Err(UseCaseErrors::EmptyChannels);
        }

        let reminder = Reminder {
            id: Default::default(),
            user_id: self.user_id.clone(),
            task_id: self.task_id.clone(),
            project_id: self.project_id.clone(),
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            reminder_date,
            reminder_type: self.reminder_type,
            frequency: self
                .frequency
                .unwrap_or_else(|| preference.frequency.frequency()),
            channels,
            status: ReminderStatus::Active,
            sent_at: None,
        };

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
