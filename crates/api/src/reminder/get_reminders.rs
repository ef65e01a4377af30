use crate::{
    error::TooFlowError,
    shared::{
        auth::protect_user_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tooflow_api_structs::get_reminders::*;
use tooflow_domain::{Reminder, ReminderStatus, ID};
use tooflow_infra::TooFlowContext;

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

pub async fn get_reminders_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let user_id = protect_user_route(&http_req)?;

    let usecase = GetRemindersUseCase {
        user_id,
        status: query_params.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub user_id: ID,
    pub status: Option<ReminderStatus>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminders
            .find_many_by_user(&self.user_id, self.status)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
