use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::broadcast;
use tooflow_domain::{Notification, ID};
use tracing::debug;

/// Fans newly stored notifications out to the live subscribers of their
/// owner. Only subscribers connected to this process receive them.
pub struct NotificationHub {
    capacity: usize,
    channels: Mutex<HashMap<ID, broadcast::Sender<Notification>>>,
}

impl NotificationHub {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            channels: Mutex::new(HashMap::new()),
        }
    }

    pub fn subscribe(&self, user_id: &ID) -> broadcast::Receiver<Notification> {
        let mut channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        // Channels of users who disconnected and never got published to
        channels.retain(|_, sender| sender.receiver_count() > 0);
        match channels.get(user_id) {
            Some(sender) => sender.subscribe(),
            None => {
                let (sender, receiver) = broadcast::channel(self.capacity);
                channels.insert(user_id.clone(), sender);
                receiver
            }
        }
    }

    /// Returns the number of subscribers the notification was handed to
    pub fn publish(&self, notification: &Notification) -> usize {
        let mut channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        let sender = match channels.get(&notification.user_id) {
            Some(sender) => sender,
            None => return 0,
        };
        match sender.send(notification.clone()) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!(
                    "No live subscribers left for user: {}",
                    notification.user_id
                );
                channels.remove(&notification.user_id);
                0
            }
        }
    }

    pub fn subscriber_count(&self, user_id: &ID) -> usize {
        let channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        channels
            .get(user_id)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }
}
