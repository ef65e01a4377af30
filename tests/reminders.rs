mod helpers;

use chrono::{Duration, Utc};
use helpers::setup::spawn_app;
use tooflow_sdk::{
    APIErrorVariant, Channel, CreateReminderInput, Frequency, NotificationFilter, ReminderStatus,
    ReminderType, SendImmediateReminderInput, UpdateReminderPreferenceInput, ID,
};

fn reminder_input(title: &str) -> CreateReminderInput {
    CreateReminderInput {
        title: title.into(),
        description: None,
        reminder_type: ReminderType::TaskDue,
        task_id: Some(ID::default()),
        project_id: None,
        reminder_date: Some(Utc::now() + Duration::hours(1)),
        event_date: None,
        frequency: None,
        channels: None,
    }
}

#[actix_web::main]
#[test]
async fn test_reminder_lifecycle() {
    let (app, sdk) = spawn_app().await;

    let mut input = reminder_input("Prepare the sprint review");
    input.channels = Some(vec![Channel::Email, Channel::Notification, Channel::Email]);
    let reminder = sdk
        .reminder
        .create(input)
        .await
        .expect("Expected to create reminder")
        .reminder;
    assert_eq!(reminder.user_id, app.user_id);
    assert_eq!(reminder.status, ReminderStatus::Active);
    assert_eq!(reminder.frequency, Frequency::Once);
    assert_eq!(reminder.channels, vec![Channel::Email, Channel::Notification]);

    let fetched = sdk
        .reminder
        .get(reminder.id.clone())
        .await
        .expect("Expected to get reminder")
        .reminder;
    assert_eq!(fetched.id, reminder.id);

    let (other_sdk, _) = app.sdk_for_new_user();
    let res = other_sdk.reminder.get(reminder.id.clone()).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);

    let cancelled = sdk
        .reminder
        .cancel(reminder.id.clone())
        .await
        .expect("Expected to cancel reminder")
        .reminder;
    assert_eq!(cancelled.status, ReminderStatus::Cancelled);
    let res = sdk.reminder.cancel(reminder.id.clone()).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::Conflict);

    let active = sdk
        .reminder
        .list(Some(ReminderStatus::Active))
        .await
        .expect("Expected to list reminders")
        .reminders;
    assert!(active.is_empty());
    let cancelled = sdk
        .reminder
        .list(Some(ReminderStatus::Cancelled))
        .await
        .expect("Expected to list reminders")
        .reminders;
    assert_eq!(cancelled.len(), 1);

    assert!(sdk.reminder.delete(reminder.id.clone()).await.is_ok());
    let res = sdk.reminder.get(reminder.id.clone()).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);
}

#[actix_web::main]
#[test]
async fn test_create_reminder_validation() {
    let (_, sdk) = spawn_app().await;

    let mut input = reminder_input("Too late");
    input.reminder_date = Some(Utc::now() - Duration::minutes(5));
    let res = sdk.reminder.create(input).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);

    let mut input = reminder_input("No date");
    input.reminder_date = None;
    let res = sdk.reminder.create(input).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);

    let meeting = sdk
        .preference
        .list()
        .await
        .expect("Expected to get preferences")
        .preferences
        .into_iter()
        .find(|p| p.reminder_type == ReminderType::Meeting)
        .expect("Expected meeting preference");
    sdk.preference
        .update(UpdateReminderPreferenceInput {
            preference_id: meeting.id,
            enabled: Some(false),
            advance_time: None,
            channels: None,
            frequency: None,
        })
        .await
        .expect("Expected to disable meetings");
    let mut input = reminder_input("Board meeting");
    input.reminder_type = ReminderType::Meeting;
    let res = sdk.reminder.create(input).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::Conflict);
}

#[actix_web::main]
#[test]
async fn test_send_immediate() {
    let (app, sdk) = spawn_app().await;
    let reminder = sdk
        .reminder
        .create(reminder_input("Call the client"))
        .await
        .expect("Expected to create reminder")
        .reminder;

    let (other_sdk, other_user_id) = app.sdk_for_new_user();
    let res = other_sdk
        .reminder
        .send_immediate(SendImmediateReminderInput {
            reminder_id: reminder.id.clone(),
            user_id: other_user_id,
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);
    let notifications = sdk
        .notification
        .list(NotificationFilter::All)
        .await
        .expect("Expected to list notifications");
    assert!(notifications.notifications.is_empty());

    let res = sdk
        .reminder
        .send_immediate(SendImmediateReminderInput {
            reminder_id: reminder.id.clone(),
            user_id: app.user_id.clone(),
        })
        .await
        .expect("Expected to send reminder");
    assert!(res.success);

    let notifications = sdk
        .notification
        .list(NotificationFilter::All)
        .await
        .expect("Expected to list notifications");
    assert_eq!(notifications.notifications.len(), 1);
    assert_eq!(notifications.unread_count, 1);
    assert_eq!(
        notifications.notifications[0].data.related_id,
        Some(reminder.id.clone())
    );
    assert_eq!(
        notifications.notifications[0].message,
        "Recordatorio: Call the client"
    );

    // The reminder keeps its schedule
    let reminder = sdk
        .reminder
        .get(reminder.id)
        .await
        .expect("Expected to get reminder")
        .reminder;
    assert_eq!(reminder.status, ReminderStatus::Active);
}

#[actix_web::main]
#[test]
async fn test_send_immediate_requires_both_fields() {
    let (app, _) = spawn_app().await;
    let res = reqwest::Client::new()
        .post(format!("{}/reminders/send-immediate", app.address))
        .json(&serde_json::json!({ "reminder_id": ID::default() }))
        .send()
        .await
        .expect("Expected response");
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.expect("Expected json body");
    assert!(body["error"]
        .as_str()
        .expect("Expected error message")
        .contains("user_id"));
}

#[actix_web::main]
#[test]
async fn test_process_due_reminders() {
    let (app, sdk) = spawn_app().await;
    let mut input = reminder_input("Weekly report");
    input.frequency = Some(Frequency::Weekly);
    input.reminder_date = Some(Utc::now() + Duration::seconds(1));
    let reminder = sdk
        .reminder
        .create(input)
        .await
        .expect("Expected to create reminder")
        .reminder;

    actix_web::rt::time::sleep(std::time::Duration::from_millis(1500)).await;
    let res = sdk
        .reminder
        .process_due()
        .await
        .expect("Expected to process due reminders");
    assert!(res.success);
    assert!(res.sent_count >= 1);
    assert!(res.processed_count >= res.sent_count);

    let sent = sdk
        .reminder
        .get(reminder.id.clone())
        .await
        .expect("Expected to get reminder")
        .reminder;
    assert_eq!(sent.status, ReminderStatus::Sent);
    assert!(sent.sent_at.is_some());

    let active = sdk
        .reminder
        .list(Some(ReminderStatus::Active))
        .await
        .expect("Expected to list reminders")
        .reminders;
    assert_eq!(active.len(), 1);
    assert_eq!(
        active[0].reminder_date,
        sent.reminder_date + Duration::weeks(1)
    );

    let notifications = sdk
        .notification
        .list(NotificationFilter::Unread)
        .await
        .expect("Expected to list notifications")
        .notifications;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Weekly report");
    assert_eq!(notifications[0].data.related_id, Some(reminder.id));
    assert_eq!(app.user_id, notifications[0].user_id);
}
