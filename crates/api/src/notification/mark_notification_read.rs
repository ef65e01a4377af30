use crate::{
    error::TooFlowError,
    shared::{
        auth::protect_user_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tooflow_api_structs::mark_notification_read::*;
use tooflow_domain::{Notification, ID};
use tooflow_infra::TooFlowContext;
use tracing::error;

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::NotFound(notification_id) => TooFlowError::NotFound(format!(
            "The notification with id: {}, was not found.",
            notification_id
        )),
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

pub async fn mark_notification_read_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let user_id = protect_user_route(&http_req)?;

    let usecase = MarkNotificationReadUseCase {
        user_id,
        notification_id: path_params.notification_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|notification| HttpResponse::Ok().json(APIResponse::new(notification)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct MarkNotificationReadUseCase {
    pub user_id: ID,
    pub notification_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkNotificationReadUseCase {
    type Response = Notification;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .notifications
            .mark_read(&self.notification_id, &self.user_id, ctx.sys.now())
            .await
            .map_err(|e| {
                error!(
                    "Unable to mark as read notification: {}. Err: {:?}",
                    self.notification_id, e
                );
                UseCaseErrors::StorageError
            })?
            .ok_or_else(|| UseCaseErrors::NotFound(self.notification_id.clone()))
    }
}
