use crate::{
    error::TooFlowError,
    shared::{
        auth::protect_user_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tooflow_api_structs::update_reminder_preference::*;
use tooflow_domain::{
    is_valid_advance_time, normalize_channels, Channel, PreferenceSchedule, ReminderPreference,
    ReminderType, ADVANCE_TIME_OPTIONS, ID,
};
use tooflow_infra::TooFlowContext;
use tracing::error;

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::NotFound(preference_id) => TooFlowError::NotFound(format!(
            "The reminder preference with id: {}, was not found.",
            preference_id
        )),
        UseCaseErrors::InvalidAdvanceTime(minutes) => TooFlowError::BadClientData(format!(
            "The advance time: {} is not valid, it must be one of {:?} minutes.",
            minutes, ADVANCE_TIME_OPTIONS
        )),
        UseCaseErrors::InvalidFrequency(frequency) => TooFlowError::BadClientData(format!(
            "The frequency: {} is not valid, it must be once, daily, weekly, monthly or a HH:MM clock time.",
            frequency
        )),
        UseCaseErrors::ClockTimeNotAllowed(reminder_type) => TooFlowError::BadClientData(format!(
            "A clock time can only be used for the {} reminders, not for {}.",
            ReminderType::DailySummary,
            reminder_type
        )),
        UseCaseErrors::EmptyChannels => {
            TooFlowError::BadClientData("At least one channel must be selected.".into())
        }
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

pub async fn update_reminder_preference_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let user_id = protect_user_route(&http_req)?;

    let body = body.0;
    let usecase = UpdateReminderPreferenceUseCase {
        user_id,
        preference_id: path_params.preference_id.clone(),
        enabled: body.enabled,
        advance_time: body.advance_time,
        channels: body.channels,
        frequency: body.frequency,
    };

    execute(usecase, &ctx)
        .await
        .map(|preference| HttpResponse::Ok().json(APIResponse::new(preference)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateReminderPreferenceUseCase {
    pub user_id: ID,
    pub preference_id: ID,
    pub enabled: Option<bool>,
    pub advance_time: Option<i64>,
    pub channels: Option<Vec<Channel>>,
    pub frequency: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    InvalidAdvanceTime(i64),
    InvalidFrequency(String),
    ClockTimeNotAllowed(ReminderType),
    EmptyChannels,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderPreferenceUseCase {
    type Response = ReminderPreference;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
        let mut preference = ctx
            .repos
            .reminder_preferences
            .find_by_id_and_user(&self.preference_id, &self.user_id)
            .await
            .map_err(|e| {
                error!(
                    "Unable to fetch reminder preference: {}. Err: {:?}",
                    self.preference_id, e
                );
                UseCaseErrors::StorageError
            })?
            .ok_or_else(|| UseCaseErrors::NotFound(self.preference_id.clone()))?;

        if let Some(enabled) = self.enabled {
            preference.enabled = enabled;
        }

        if let Some(advance_time) = self.advance_time {
            if !is_valid_advance_time(advance_time) {
                return Err(UseCaseErrors::InvalidAdvanceTime(advance_time));
            }
            preference.advance_time = advance_time;
        }

        if let Some(frequency) = &self.frequency {
            let schedule = frequency
                .parse::<PreferenceSchedule>()
                .map_err(|_| UseCaseErrors::InvalidFrequency(frequency.clone()))?;
            if matches!(schedule, PreferenceSchedule::ClockTime(_))
                && preference.reminder_type != ReminderType::DailySummary
            {
                return Err(UseCaseErrors::ClockTimeNotAllowed(preference.reminder_type));
            }
            preference.frequency = schedule;
        }

        if let Some(channels) = self.channels.take() {
            let channels = normalize_channels(channels);
            if channels.is_empty() {
                return Err(UseCaseErrors::EmptyChannels);
            }
            preference.channels = channels;
        }

        ctx.repos
            .reminder_preferences
            .save(&preference)
            .await
            .map(|_| preference)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
