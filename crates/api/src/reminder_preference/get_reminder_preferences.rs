use crate::{
    error::TooFlowError,
    shared::{
        auth::protect_user_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tooflow_api_structs::get_reminder_preferences::*;
use tooflow_domain::{ReminderPreference, ReminderType, ID};
use tooflow_infra::TooFlowContext;
use tracing::info;

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

pub async fn get_reminder_preferences_controller(
    http_req: HttpRequest,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let user_id = protect_user_route(&http_req)?;

    let usecase = GetReminderPreferencesUseCase { user_id };

    execute(usecase, &ctx)
        .await
        .map(|preferences| HttpResponse::Ok().json(APIResponse::new(preferences)))
        .map_err(handle_error)
}

/// Returns one `ReminderPreference` per catalog `ReminderType`, storing
/// the defaults for the types the user has no row for yet
#[derive(Debug)]
pub struct GetReminderPreferencesUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderPreferencesUseCase {
    /// Ordered as `ReminderType::CATALOG`
    type Response = Vec<ReminderPreference>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
        let repo = &ctx.repos.reminder_preferences;
        let mut preferences = repo
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let missing = ReminderPreference::missing_defaults(&self.user_id, &preferences);
        if !missing.is_empty() {
            info!(
                "Creating {} default reminder preferences for user: {}",
                missing.len(),
                self.user_id
            );
            repo.bulk_insert(&missing)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
            // A concurrent request may have stored its own defaults first
            preferences = repo
                .find_by_user(&self.user_id)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
        }

        preferences.sort_by_key(|p| {
            ReminderType::CATALOG
                .iter()
                .position(|reminder_type| *reminder_type == p.reminder_type)
        });
        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tooflow_domain::{Channel, Frequency, PreferenceSchedule};
    use tooflow_infra::setup_context;

    #[actix_web::test]
    async fn creates_missing_defaults_once() {
        let ctx = setup_context().await;
        let user_id = ID::default();

        let usecase = GetReminderPreferencesUseCase {
            user_id: user_id.clone(),
        };
        let first = execute(usecase, &ctx).await.unwrap();
        assert_eq!(first.len(), 4);
        assert_eq!(
            first.iter().map(|p| p.reminder_type).collect::<Vec<_>>(),
            ReminderType::CATALOG.to_vec()
        );
        for preference in &first {
            assert!(preference.enabled);
            assert_eq!(preference.advance_time, 60);
            assert_eq!(preference.channels, vec![Channel::Notification]);
            assert_eq!(
                preference.frequency,
                PreferenceSchedule::Recurrence(Frequency::Once)
            );
        }

        let usecase = GetReminderPreferencesUseCase {
            user_id: user_id.clone(),
        };
        let second = execute(usecase, &ctx).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(
            ctx.repos
                .reminder_preferences
                .find_by_user(&user_id)
                .await
                .unwrap()
                .len(),
            4
        );
    }

    #[actix_web::test]
    async fn keeps_existing_rows_unmodified() {
        let ctx = setup_context().await;
        let user_id = ID::default();
        let mut meeting = ReminderPreference::default_for(user_id.clone(), ReminderType::Meeting);
        meeting.enabled = false;
        meeting.advance_time = 15;
        ctx.repos
            .reminder_preferences
            .bulk_insert(&[meeting.clone()])
            .await
            .unwrap();

        let usecase = GetReminderPreferencesUseCase { user_id };
        let preferences = execute(usecase, &ctx).await.unwrap();
        assert_eq!(preferences.len(), 4);
        assert!(preferences.contains(&meeting));
    }
}
