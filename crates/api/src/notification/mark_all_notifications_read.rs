use crate::{
    error::TooFlowError,
    shared::{
        auth::protect_user_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tooflow_api_structs::mark_all_notifications_read::*;
use tooflow_domain::ID;
use tooflow_infra::TooFlowContext;

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

pub async fn mark_all_notifications_read_controller(
    http_req: HttpRequest,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let user_id = protect_user_route(&http_req)?;

    let usecase = MarkAllNotificationsReadUseCase { user_id };

    execute(usecase, &ctx)
        .await
        .map(|updated_count| HttpResponse::Ok().json(APIResponse { updated_count }))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct MarkAllNotificationsReadUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkAllNotificationsReadUseCase {
    /// Number of notifications that went from unread to read
    type Response = u64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .notifications
            .mark_all_read(&self.user_id, ctx.sys.now())
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tooflow_domain::{Notification, NotificationFilter, NotificationType};
    use tooflow_infra::setup_context;

    async fn insert_unread(user_id: &ID, ctx: &TooFlowContext) -> Notification {
        let notification = Notification::new(
            user_id.clone(),
            NotificationType::FileUploaded,
            "Design.pdf uploaded".into(),
            "A file was added to the project".into(),
            Default::default(),
            ctx.sys.now(),
        );
        ctx.repos.notifications.insert(&notification).await.unwrap();
        notification
    }

    #[actix_web::test]
    async fn marks_all_unread_of_the_user_only() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let other_user_id = ID::default();
        for _ in 0..4 {
            insert_unread(&user_id, &ctx).await;
        }
        let other = insert_unread(&other_user_id, &ctx).await;

        let usecase = MarkAllNotificationsReadUseCase {
            user_id: user_id.clone(),
        };
        assert_eq!(execute(usecase, &ctx).await.unwrap(), 4);

        assert!(ctx
            .repos
            .notifications
            .find_by_user(&user_id, NotificationFilter::Unread)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            ctx.repos
                .notifications
                .find_by_user(&other_user_id, NotificationFilter::All)
                .await
                .unwrap(),
            vec![other]
        );
    }
}
