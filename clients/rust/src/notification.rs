use crate::{APIError, APIErrorVariant, APIResponse, BaseClient};
use futures::stream::{self, Stream, StreamExt};
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use tooflow_api_structs::{dtos::NotificationDTO, *};
use tooflow_domain::{NotificationData, NotificationFilter, NotificationType, ID};

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

pub struct CreateNotificationInput {
    pub user_id: ID,
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub data: Option<NotificationData>,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateNotificationInput,
    ) -> APIResponse<create_notification::APIResponse> {
        let body = create_notification::RequestBody {
            user_id: input.user_id,
            kind: input.kind,
            title: input.title,
            message: input.message,
            data: input.data,
        };
        self.base
            .post(body, "notifications".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list(
        &self,
        filter: NotificationFilter,
    ) -> APIResponse<get_notifications::APIResponse> {
        let filter = match filter {
            NotificationFilter::All => "all",
            NotificationFilter::Unread => "unread",
        };
        self.base
            .get(
                format!("me/notifications?filter={}", filter),
                StatusCode::OK,
            )
            .await
    }

    pub async fn mark_read(
        &self,
        notification_id: ID,
    ) -> APIResponse<mark_notification_read::APIResponse> {
        self.base
            .put(
                (),
                format!("me/notifications/{}/read", notification_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn mark_all_read(&self) -> APIResponse<mark_all_notifications_read::APIResponse> {
        self.base
            .put((), "me/notifications/read".into(), StatusCode::OK)
            .await
    }

    pub async fn delete(
        &self,
        notification_id: ID,
    ) -> APIResponse<delete_notification::APIResponse> {
        self.base
            .delete(
                format!("me/notifications/{}", notification_id),
                StatusCode::OK,
            )
            .await
    }

    /// Live feed of the notifications stored for the user after the
    /// subscription was made
    pub async fn subscribe(
        &self,
    ) -> APIResponse<impl Stream<Item = APIResponse<NotificationDTO>>> {
        let res = self
            .base
            .get_client(Method::GET, "me/notifications/stream".into())
            .send()
            .await
            .map_err(|_| APIError::new(APIErrorVariant::Network))?;
        let res = self.base.check_status_code(res, StatusCode::OK).await?;

        let state = (Box::pin(res.bytes_stream()), String::new());
        Ok(stream::unfold(state, |(mut bytes, mut buffer)| async move {
            loop {
                if let Some(end) = buffer.find("\n\n") {
                    let frame: String = buffer.drain(..end + 2).collect();
                    match parse_frame(&frame) {
                        Some(notification) => return Some((notification, (bytes, buffer))),
                        None => continue,
                    }
                }
                match bytes.next().await {
                    Some(Ok(chunk)) => buffer.push_str(&String::from_utf8_lossy(&chunk)),
                    Some(Err(_)) => {
                        return Some((
                            Err(APIError::new(APIErrorVariant::Network)),
                            (bytes, buffer),
                        ))
                    }
                    None => return None,
                }
            }
        }))
    }
}

/// Parses one server-sent event. Comment frames carry no notification.
fn parse_frame(frame: &str) -> Option<APIResponse<NotificationDTO>> {
    let data = frame
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|data| data.trim_start())
        .collect::<Vec<_>>();
    if data.is_empty() {
        return None;
    }

    Some(
        serde_json::from_str(&data.join("\n"))
            .map_err(|_| APIError::new(APIErrorVariant::MalformedResponse)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comment_frames() {
        assert!(parse_frame(": connected\n\n").is_none());
    }

    #[test]
    fn reports_malformed_frames() {
        let res = parse_frame("data: {\"id\": 1}\n\n").unwrap();
        assert_eq!(
            res.unwrap_err().variant,
            APIErrorVariant::MalformedResponse
        );
    }
}
