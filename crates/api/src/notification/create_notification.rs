use crate::{
    error::TooFlowError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use tooflow_api_structs::create_notification::*;
use tooflow_domain::Notification;
use tooflow_infra::TooFlowContext;
use tracing::debug;

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::EmptyTitle => {
            TooFlowError::BadClientData("A notification must have a title".into())
        }
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

/// Endpoint for the other parts of TooFlow that produce notifications,
/// e.g. task assignments and chat messages
pub async fn create_notification_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let body = body.0;
    let notification = Notification::new(
        body.user_id,
        body.kind,
        body.title,
        body.message,
        body.data.unwrap_or_default(),
        ctx.sys.now(),
    );
    let usecase = CreateNotificationUseCase { notification };

    execute(usecase, &ctx)
        .await
        .map(|notification| HttpResponse::Created().json(APIResponse::new(notification)))
        .map_err(handle_error)
}

/// Appends a `Notification` to the feed of its owner and pushes it to
/// the owner's live subscribers once it is stored
#[derive(Debug)]
pub struct CreateNotificationUseCase {
    pub notification: Notification,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyTitle,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateNotificationUseCase {
    type Response = Notification;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
        if self.notification.title.trim().is_empty() {
            return Err(UseCaseErrors::EmptyTitle);
        }

        ctx.repos
            .notifications
            .insert(&self.notification)
            .await
            .map(|_| self.notification.clone())
            .map_err(|_| UseCaseErrors::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PublishNotificationSubscriber)]
    }
}

pub struct PublishNotificationSubscriber;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateNotificationUseCase> for PublishNotificationSubscriber {
    async fn notify(&self, e: &Notification, ctx: &TooFlowContext) {
        let receivers = ctx.realtime.publish(e);
        debug!(
            "Notification: {} pushed to {} live subscribers",
            e.id, receivers
        );
    }
}
