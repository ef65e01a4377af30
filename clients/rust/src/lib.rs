mod base;
mod notification;
mod preference;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use notification::NotificationClient;
pub use notification::CreateNotificationInput;
use preference::ReminderPreferenceClient;
pub use preference::UpdateReminderPreferenceInput;
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, SendImmediateReminderInput};
use status::StatusClient;
use std::sync::Arc;
pub use tooflow_api_structs::dtos::*;
pub use tooflow_domain::{
    Channel, FeedEvent, Frequency, NotificationData, NotificationFeed, NotificationFilter,
    NotificationType, PreferenceSchedule, ReminderStatus, ReminderType, ID,
};

// Domain
pub use tooflow_api_structs::dtos::NotificationDTO as Notification;
pub use tooflow_api_structs::dtos::ReminderDTO as Reminder;
pub use tooflow_api_structs::dtos::ReminderPreferenceDTO as ReminderPreference;

/// TooFlow Reminders SDK
///
/// The SDK contains methods for interacting with the TooFlow reminders
/// API on behalf of a single user.
#[derive(Clone)]
pub struct TooFlowSDK {
    pub notification: NotificationClient,
    pub preference: ReminderPreferenceClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl TooFlowSDK {
    pub fn new<T: Into<String>>(address: T, user_id: ID) -> Self {
        let mut base = BaseClient::new(address.into());
        base.set_user(user_id);
        let base = Arc::new(base);
        let notification = NotificationClient::new(base.clone());
        let preference = ReminderPreferenceClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            notification,
            preference,
            reminder,
            status,
        }
    }
}
