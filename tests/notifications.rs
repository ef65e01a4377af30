mod helpers;

use futures::StreamExt;
use helpers::setup::spawn_app;
use std::time::Duration;
use tooflow_sdk::{
    APIErrorVariant, CreateNotificationInput, FeedEvent, NotificationData, NotificationFeed,
    NotificationFilter, NotificationType, ID,
};

fn notification_input(user_id: &ID, title: &str) -> CreateNotificationInput {
    CreateNotificationInput {
        user_id: user_id.clone(),
        kind: NotificationType::TaskAssigned,
        title: title.into(),
        message: "You were assigned a task".into(),
        data: Some(NotificationData {
            related_id: Some(ID::default()),
            link: Some("/tasks".into()),
        }),
    }
}

#[actix_web::main]
#[test]
async fn test_notification_inbox() {
    let (app, sdk) = spawn_app().await;
    let first = sdk
        .notification
        .create(notification_input(&app.user_id, "Review the designs"))
        .await
        .expect("Expected to create notification")
        .notification;
    assert!(!first.read);
    let second = sdk
        .notification
        .create(notification_input(&app.user_id, "Fix the login bug"))
        .await
        .expect("Expected to create notification")
        .notification;

    let inbox = sdk
        .notification
        .list(NotificationFilter::All)
        .await
        .expect("Expected to list notifications");
    assert_eq!(inbox.notifications.len(), 2);
    assert_eq!(inbox.unread_count, 2);
    assert_eq!(inbox.notifications[0].id, second.id);

    // Another user can neither read nor delete them
    let (other_sdk, _) = app.sdk_for_new_user();
    let res = other_sdk.notification.mark_read(first.id.clone()).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);
    let res = other_sdk.notification.delete(first.id.clone()).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);

    let read = sdk
        .notification
        .mark_read(first.id.clone())
        .await
        .expect("Expected to mark notification read")
        .notification;
    assert!(read.read);

    let unread = sdk
        .notification
        .list(NotificationFilter::Unread)
        .await
        .expect("Expected to list notifications");
    assert_eq!(unread.notifications.len(), 1);
    assert_eq!(unread.notifications[0].id, second.id);
    assert_eq!(unread.unread_count, 1);

    let res = sdk
        .notification
        .mark_all_read()
        .await
        .expect("Expected to mark all notifications read");
    assert_eq!(res.updated_count, 1);
    let res = sdk
        .notification
        .mark_all_read()
        .await
        .expect("Expected to mark all notifications read");
    assert_eq!(res.updated_count, 0);

    assert!(sdk.notification.delete(first.id.clone()).await.is_ok());
    let inbox = sdk
        .notification
        .list(NotificationFilter::All)
        .await
        .expect("Expected to list notifications");
    assert_eq!(inbox.notifications.len(), 1);
    assert_eq!(inbox.unread_count, 0);
    let res = sdk.notification.delete(first.id).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);
}

#[actix_web::main]
#[test]
async fn test_create_notification_requires_title() {
    let (app, sdk) = spawn_app().await;
    let res = sdk
        .notification
        .create(notification_input(&app.user_id, "  "))
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_subscriber_receives_own_notifications() {
    let (app, sdk) = spawn_app().await;
    let mut inbox = NotificationFeed::new(vec![]);
    let feed = sdk
        .notification
        .subscribe()
        .await
        .expect("Expected to subscribe");
    futures::pin_mut!(feed);

    // Only the owner is notified
    let (other_sdk, other_user_id) = app.sdk_for_new_user();
    other_sdk
        .notification
        .create(notification_input(&other_user_id, "Someone else's task"))
        .await
        .expect("Expected to create notification");
    let created = sdk
        .notification
        .create(notification_input(&app.user_id, "Deploy to staging"))
        .await
        .expect("Expected to create notification")
        .notification;

    let received = actix_web::rt::time::timeout(Duration::from_secs(5), feed.next())
        .await
        .expect("Expected a notification before the timeout")
        .expect("Expected the feed to stay open")
        .expect("Expected a valid notification");
    assert_eq!(received, created);

    inbox.enqueue(FeedEvent::Inserted(received.clone().into()));
    inbox.enqueue(FeedEvent::Inserted(received.into()));
    let now = chrono::Utc::now();
    assert_eq!(inbox.apply_pending(now), 2);
    assert_eq!(inbox.notifications().len(), 1);
    assert_eq!(inbox.unread_count(), 1);
    assert_eq!(inbox.visible_toasts(now).len(), 1);
}
