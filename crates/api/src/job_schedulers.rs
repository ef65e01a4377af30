use crate::{
    reminder::process_due_reminders::ProcessDueRemindersUseCase, shared::usecase::execute,
};
use actix_web::rt::time::{interval, sleep_until, Instant};
use std::time::Duration;
use tooflow_infra::TooFlowContext;
use tracing::info;

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Runs the reminder dispatcher on every tick, starting at the next full
/// minute. Runs are spawned separately so that a slow run does not hold
/// back the next one.
pub fn start_dispatch_job(ctx: TooFlowContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);
        info!(
            "Reminder dispatcher starts in {} seconds and runs every {} seconds",
            secs_to_next_run, ctx.config.dispatch_interval_secs
        );

        sleep_until(start).await;
        let mut dispatch_interval = interval(Duration::from_secs(ctx.config.dispatch_interval_secs));
        loop {
            dispatch_interval.tick().await;
            let context = ctx.clone();
            actix_web::rt::spawn(dispatch_due_reminders(context));
        }
    });
}

async fn dispatch_due_reminders(context: TooFlowContext) {
    let usecase = ProcessDueRemindersUseCase {
        now: context.sys.now(),
    };
    // Failures are logged by the use case and the next tick tries again
    let _ = execute(usecase, &context).await;
}
