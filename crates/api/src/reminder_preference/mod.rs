mod get_reminder_preferences;
mod update_reminder_preference;

use actix_web::web;
use get_reminder_preferences::get_reminder_preferences_controller;
use update_reminder_preference::update_reminder_preference_controller;

pub use get_reminder_preferences::GetReminderPreferencesUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/me/reminder-preferences",
        web::get().to(get_reminder_preferences_controller),
    );
    cfg.route(
        "/me/reminder-preferences/{preference_id}",
        web::put().to(update_reminder_preference_controller),
    );
}
