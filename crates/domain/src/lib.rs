mod notification;
mod notification_feed;
mod reminder;
mod reminder_preference;
mod shared;

pub use notification::{Notification, NotificationData, NotificationFilter, NotificationType};
pub use notification_feed::{FeedEvent, NotificationFeed, Toast, TOAST_DURATION_SECS};
pub use reminder::{
    normalize_channels, Channel, Frequency, InvalidVariantError, Reminder, ReminderStatus,
    ReminderType,
};
pub use reminder_preference::{
    is_valid_advance_time, PreferenceSchedule, ReminderPreference, ADVANCE_TIME_OPTIONS,
    DEFAULT_ADVANCE_TIME,
};
pub use shared::entity::{Entity, ID};
