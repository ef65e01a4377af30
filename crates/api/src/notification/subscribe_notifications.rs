use crate::{error::TooFlowError, shared::auth::protect_user_route};
use actix_web::{web, web::Bytes, HttpRequest, HttpResponse};
use futures::stream::{self, StreamExt};
use tokio::sync::broadcast::{error::RecvError, Receiver};
use tooflow_api_structs::dtos::NotificationDTO;
use tooflow_domain::Notification;
use tooflow_infra::TooFlowContext;
use tracing::{error, warn};

/// Streams every notification stored for the user from now on as
/// server-sent events
pub async fn subscribe_notifications_controller(
    http_req: HttpRequest,
    ctx: web::Data<TooFlowContext>,
) -> Result<HttpResponse, TooFlowError> {
    let user_id = protect_user_route(&http_req)?;
    let receiver = ctx.realtime.subscribe(&user_id);

    let opened = stream::once(async {
        Ok::<_, actix_web::Error>(Bytes::from_static(b": connected\n\n"))
    });
    let events = stream::unfold(receiver, |receiver| async move {
        next_event(receiver)
            .await
            .map(|(frame, receiver)| (Ok(frame), receiver))
    });

    Ok(HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("cache-control", "no-cache"))
        .streaming(opened.chain(events)))
}

async fn next_event(
    mut receiver: Receiver<Notification>,
) -> Option<(Bytes, Receiver<Notification>)> {
    loop {
        match receiver.recv().await {
            Ok(notification) => match sse_frame(notification) {
                Ok(frame) => return Some((frame, receiver)),
                Err(e) => error!("Unable to serialize notification: {:?}", e),
            },
            Err(RecvError::Lagged(skipped)) => {
                warn!("Notification subscriber lagged behind by {} events", skipped);
            }
            Err(RecvError::Closed) => return None,
        }
    }
}

fn sse_frame(notification: Notification) -> serde_json::Result<Bytes> {
    let json = serde_json::to_string(&NotificationDTO::new(notification))?;
    Ok(Bytes::from(format!("data: {}\n\n", json)))
}
