use crate::{
    error::TooFlowError,
    shared::{
        auth::protect_user_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tooflow_api_structs::cancel_reminder::*;
use tooflow_domain::{Reminder, ReminderStatus, ID};
use tooflow_infra::TooFlowContext;
use tracing::error;

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::NotFound(reminder_id) => TooFlowError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
        UseCaseErrors::NotActive(status) => TooFlowError::Conflict(format!(
            "Only active reminders can be cancelled, this one is {}.",
            status
        )),
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

pub async fn cancel_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let user_id = protect_user_route(&http_req)?;

    let usecase = CancelReminderUseCase {
        user_id,
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CancelReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    NotActive(ReminderStatus),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
        let cancelled = ctx
            .repos
            .reminders
            .cancel(&self.reminder_id, &self.user_id)
            .await
            .map_err(|e| {
                error!("Unable to cancel reminder: {}. Err: {:?}", self.reminder_id, e);
                UseCaseErrors::StorageError
            })?;
        if let Some(reminder) = cancelled {
            return Ok(reminder);
        }

        // Nothing was cancelled, either the reminder is gone or it already
        // left the active state
        let reminder = ctx
            .repos
            .reminders
            .find_by_user(&self.reminder_id, &self.user_id)
            .await
            .map_err(|e| {
                error!("Unable to fetch reminder: {}. Err: {:?}", self.reminder_id, e);
                UseCaseErrors::StorageError
            })?
            .ok_or_else(|| UseCaseErrors::NotFound(self.reminder_id.clone()))?;
        Err(UseCaseErrors::NotActive(reminder.status))
    }
}
