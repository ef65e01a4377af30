use crate::{
    error::TooFlowError,
    shared::{
        auth::protect_user_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tooflow_api_structs::get_notifications::*;
use tooflow_domain::{Notification, NotificationFilter, ID};
use tooflow_infra::TooFlowContext;

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

pub async fn get_notifications_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let user_id = protect_user_route(&http_req)?;

    let usecase = GetNotificationsUseCase {
        user_id,
        filter: query_params.filter.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.notifications, res.unread_count)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetNotificationsUseCase {
    pub user_id: ID,
    pub filter: NotificationFilter,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    /// Newest first
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotificationsUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
        let notifications = ctx
            .repos
            .notifications
            .find_by_user(&self.user_id, self.filter)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let unread_count = match self.filter {
            NotificationFilter::Unread => notifications.len(),
            NotificationFilter::All => notifications.iter().filter(|n| !n.read).count(),
        };

        Ok(UseCaseResponse {
            notifications,
            unread_count,
        })
    }
}
