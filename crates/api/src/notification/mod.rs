mod create_notification;
mod delete_notification;
mod get_notifications;
mod mark_all_notifications_read;
mod mark_notification_read;
mod subscribe_notifications;

use actix_web::web;
use create_notification::create_notification_controller;
use delete_notification::delete_notification_controller;
use get_notifications::get_notifications_controller;
use mark_all_notifications_read::mark_all_notifications_read_controller;
use mark_notification_read::mark_notification_read_controller;
use subscribe_notifications::subscribe_notifications_controller;

pub use create_notification::CreateNotificationUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications",
        web::post().to(create_notification_controller),
    );

    cfg.route(
        "/me/notifications",
        web::get().to(get_notifications_controller),
    );
    cfg.route(
        "/me/notifications/stream",
        web::get().to(subscribe_notifications_controller),
    );
    cfg.route(
        "/me/notifications/read",
        web::put().to(mark_all_notifications_read_controller),
    );
    cfg.route(
        "/me/notifications/{notification_id}/read",
        web::put().to(mark_notification_read_controller),
    );
    cfg.route(
        "/me/notifications/{notification_id}",
        web::delete().to(delete_notification_controller),
    );
}
