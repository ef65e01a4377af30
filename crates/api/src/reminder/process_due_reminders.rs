use crate::{
    error::TooFlowError,
    notification::CreateNotificationUseCase,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use tooflow_api_structs::process_due_reminders::*;
use tooflow_domain::{Notification, Reminder};
use tooflow_infra::TooFlowContext;
use tracing::{error, info};

fn handle_error(e: UseCaseErrors) -> TooFlowError {
    match e {
        UseCaseErrors::StorageError => TooFlowError::InternalError,
    }
}

pub async fn process_due_reminders_controller(
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let usecase = ProcessDueRemindersUseCase {
        now: ctx.sys.now(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse::new(res.sent_count, res.processed_count))
        })
        .map_err(handle_error)
}

/// Delivers every active reminder that is due at `now`.
///
/// For each due reminder a notification is stored, the reminder is marked
/// as sent and, when it recurs, its successor is scheduled. A reminder that
/// fails along the way is logged and skipped so it does not stop the rest
/// of the batch. Delivery is at least once: a reminder whose notification
/// was stored but which could not be marked as sent stays active and is
/// notified again by the next run.
#[derive(Debug)]
pub struct ProcessDueRemindersUseCase {
    pub now: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub struct UseCaseResponse {
    /// Reminders that went through every step
    pub sent_count: usize,
    /// Due reminders that were looked at
    pub processed_count: usize,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

/// Step a single reminder failed at, with the cause
#[derive(Debug)]
enum DispatchStep {
    Notify(<CreateNotificationUseCase as UseCase>::Errors),
    MarkSent(anyhow::Error),
    Reschedule(anyhow::Error),
}

impl std::fmt::Display for DispatchStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Notify(e) => write!(f, "storing the notification failed: {:?}", e),
            Self::MarkSent(e) => write!(f, "marking it as sent failed: {:?}", e),
            Self::Reschedule(e) => write!(f, "scheduling the next reminder failed: {:?}", e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ProcessDueRemindersUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TooFlowContext) -> Result<Self::Response, Self::Errors> {
        let due_reminders = ctx
            .repos
            .reminders
            .find_due(self.now)
            .await
            .map_err(|e| {
                error!("Unable to fetch the due reminders: {:?}", e);
                UseCaseErrors::StorageError
            })?;

        let processed_count = due_reminders.len();
        let mut sent_count = 0;
        for reminder in &due_reminders {
            match dispatch(reminder, self.now, ctx).await {
                Ok(()) => sent_count += 1,
                Err(step) => error!(
                    "Unable to dispatch reminder: {}, {}",
                    reminder.id, step
                ),
            }
        }

        info!(
            "Dispatched {} of {} due reminders",
            sent_count, processed_count
        );
        Ok(UseCaseResponse {
            sent_count,
            processed_count,
        })
    }
}

async fn dispatch(
    reminder: &Reminder,
    now: DateTime<Utc>,
    ctx: &TooFlowContext,
) -> Result<(), DispatchStep> {
    let usecase = CreateNotificationUseCase {
        notification: Notification::from_reminder(reminder, now),
    };
    execute(usecase, ctx)
        .await
        .map_err(DispatchStep::Notify)?;

    ctx.repos
        .reminders
        .mark_sent(&reminder.id, now)
        .await
        .map_err(DispatchStep::MarkSent)?;

    if let Some(next) = reminder.advance() {
        ctx.repos
            .reminders
            .insert(&next)
            .await
            .map_err(DispatchStep::Reschedule)?;
    }

    Ok(())
}
