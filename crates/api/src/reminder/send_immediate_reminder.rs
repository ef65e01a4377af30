use crate::{
    error::TooFlowError,
    notification::CreateNotificationUseCase,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use tooflow_api_structs::send_immediate_reminder::*;
use tooflow_domain::{Notification, Reminder, ID};
use tooflow_infra::TooFlowContext;
use tracing::error;

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::NotFound(reminder_id) => TooFlowError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

pub async fn send_immediate_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let body = body.0;
    let usecase = SendImmediateReminderUseCase {
        reminder_id: Guard::against_missing(body.reminder_id, "reminder_id")?,
        user_id: Guard::against_missing(body.user_id, "user_id")?,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(&reminder)))
        .map_err(handle_error)
}

/// Notifies the owner about a reminder right away. The reminder itself is
/// left as it is, so it still fires on its own schedule.
#[derive(Debug)]
pub struct SendImmediateReminderUseCase {
    pub reminder_id: ID,
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendImmediateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
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

        let usecase = CreateNotificationUseCase {
            notification: Notification::from_reminder(&reminder, ctx.sys.now()),
        };
        execute(usecase, ctx)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
