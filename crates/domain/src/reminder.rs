use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Duration, Months, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("`{value}` is not a valid {kind}")]
pub struct InvalidVariantError {
    kind: &'static str,
    value: String,
}

impl InvalidVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Implements `Display` and `FromStr` over the same snake_case names
/// that serde uses, so that the stores can keep the variants as text.
macro_rules! string_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::reminder::InvalidVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err($crate::reminder::InvalidVariantError::new($kind, s)),
                }
            }
        }
    };
}

pub(crate) use string_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Active,
    Sent,
    Cancelled,
}

string_enum!(ReminderStatus, "reminder status", {
    Active => "active",
    Sent => "sent",
    Cancelled => "cancelled",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Once,
    Daily,
    Weekly,
    Monthly,
}

string_enum!(Frequency, "frequency", {
    Once => "once",
    Daily => "daily",
    Weekly => "weekly",
    Monthly => "monthly",
});

impl Frequency {
    /// The occurrence one period after `date`, or `None` for
    /// `Frequency::Once`.
    ///
    /// Monthly recurrence keeps the day of month when possible and
    /// otherwise clamps to the last day of the next month, e.g.
    /// January 31 is followed by the last day of February.
    pub fn next_occurrence(&self, date: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Once => None,
            Self::Daily => date.checked_add_signed(Duration::days(1)),
            Self::Weekly => date.checked_add_signed(Duration::weeks(1)),
            Self::Monthly => date.checked_add_months(Months::new(1)),
        }
    }
}

/// Category of a `Reminder`. Every category except `Generic` has a
/// `ReminderPreference` row per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    TaskDue,
    ProjectDeadline,
    Meeting,
    DailySummary,
    Generic,
}

string_enum!(ReminderType, "reminder type", {
    TaskDue => "task_due",
    ProjectDeadline => "project_deadline",
    Meeting => "meeting",
    DailySummary => "daily_summary",
    Generic => "generic",
});

impl ReminderType {
    /// The reminder types a user has preferences for
    pub const CATALOG: [ReminderType; 4] = [
        Self::TaskDue,
        Self::ProjectDeadline,
        Self::Meeting,
        Self::DailySummary,
    ];

    pub fn has_preference(&self) -> bool {
        match self {
            Self::TaskDue | Self::ProjectDeadline | Self::Meeting | Self::DailySummary => true,
            Self::Generic => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Notification,
    Email,
    Push,
}

string_enum!(Channel, "channel", {
    Notification => "notification",
    Email => "email",
    Push => "push",
});

/// Channels form a set, so duplicates are dropped while keeping the
/// order in which they were first given.
pub fn normalize_channels(channels: Vec<Channel>) -> Vec<Channel> {
    channels.into_iter().unique().collect()
}

/// A scheduled instruction to notify the owning user about a task,
/// project or event once `reminder_date` is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ID,
    pub user_id: ID,
    pub task_id: Option<ID>,
    pub project_id: Option<ID>,
    pub title: String,
    pub description: Option<String>,
    /// When the `Reminder` becomes due
    pub reminder_date: DateTime<Utc>,
    pub reminder_type: ReminderType,
    pub frequency: Frequency,
    pub channels: Vec<Channel>,
    pub status: ReminderStatus,
    /// Set by the dispatcher when the `Reminder` was delivered
    pub sent_at: Option<DateTime<Utc>>,
}

impl Reminder {
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == ReminderStatus::Active && self.reminder_date <= now
    }

    /// The reminder that replaces this one after it has been sent.
    ///
    /// The successor is a fresh active row whose date is one period after
    /// this reminder's `reminder_date`, never after the time of processing.
    /// Reminders with `Frequency::Once` have no successor.
    pub fn advance(&self) -> Option<Reminder> {
        let reminder_date = self.frequency.next_occurrence(self.reminder_date)?;

        Some(Reminder {
            id: Default::default(),
            user_id: self.user_id.clone(),
            task_id: self.task_id.clone(),
            project_id: self.project_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            reminder_date,
            reminder_type: self.reminder_type,
            frequency: self.frequency,
            channels: self.channels.clone(),
            status: ReminderStatus::Active,
            sent_at: None,
        })
    }

    /// Path in the web app the user should land on from a notification
    /// about this reminder
    pub fn link(&self) -> String {
        match (&self.task_id, &self.project_id) {
            (Some(task_id), _) => format!("/tasks/{}", task_id),
            (None, Some(project_id)) => format!("/projects/{}", project_id),
            (None, None) => "/reminders".into(),
        }
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub fn reminder_factory(frequency: Frequency, reminder_date: DateTime<Utc>) -> Reminder {
        Reminder {
            id: Default::default(),
            user_id: Default::default(),
            task_id: Some(Default::default()),
            project_id: None,
            title: "Send the weekly report".into(),
            description: Some("Numbers for the board".into()),
            reminder_date,
            reminder_type: ReminderType::TaskDue,
            frequency,
            channels: vec![Channel::Notification, Channel::Email],
            status: ReminderStatus::Active,
            sent_at: None,
        }
    }

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn once_has_no_next_occurrence() {
        assert_eq!(Frequency::Once.next_occurrence(utc(2024, 1, 1, 9)), None);
        let reminder = reminder_factory(Frequency::Once, utc(2024, 1, 1, 9));
        assert!(reminder.advance().is_none());
    }

    #[test]
    fn adds_one_period() {
        let date = utc(2024, 1, 1, 9);
        assert_eq!(
            Frequency::Daily.next_occurrence(date),
            Some(utc(2024, 1, 2, 9))
        );
        assert_eq!(
            Frequency::Weekly.next_occurrence(date),
            Some(utc(2024, 1, 8, 9))
        );
        assert_eq!(
            Frequency::Monthly.next_occurrence(date),
            Some(utc(2024, 2, 1, 9))
        );
        // Crossing a year
        assert_eq!(
            Frequency::Monthly.next_occurrence(utc(2024, 12, 15, 9)),
            Some(utc(2025, 1, 15, 9))
        );
    }

    #[test]
    fn monthly_clamps_to_end_of_month() {
        assert_eq!(
            Frequency::Monthly.next_occurrence(utc(2024, 1, 31, 9)),
            Some(utc(2024, 2, 29, 9))
        );
        assert_eq!(
            Frequency::Monthly.next_occurrence(utc(2023, 1, 31, 9)),
            Some(utc(2023, 2, 28, 9))
        );
        assert_eq!(
            Frequency::Monthly.next_occurrence(utc(2024, 3, 31, 9)),
            Some(utc(2024, 4, 30, 9))
        );
    }

    #[test]
    fn advance_clones_reminder_into_new_active_row() {
        let mut reminder = reminder_factory(Frequency::Weekly, utc(2024, 1, 1, 9));
        reminder.status = ReminderStatus::Sent;
        reminder.sent_at = Some(utc(2024, 1, 1, 9));

        let next = reminder.advance().expect("Weekly reminder to recur");
        assert_ne!(next.id, reminder.id);
        assert_eq!(next.reminder_date, utc(2024, 1, 8, 9));
        assert_eq!(next.status, ReminderStatus::Active);
        assert_eq!(next.sent_at, None);
        assert_eq!(next.user_id, reminder.user_id);
        assert_eq!(next.task_id, reminder.task_id);
        assert_eq!(next.project_id, reminder.project_id);
        assert_eq!(next.title, reminder.title);
        assert_eq!(next.description, reminder.description);
        assert_eq!(next.reminder_type, reminder.reminder_type);
        assert_eq!(next.frequency, reminder.frequency);
        assert_eq!(next.channels, reminder.channels);
    }

    #[test]
    fn advance_anchors_on_scheduled_date() {
        // Even when processed days late, the successor is one period
        // after the scheduled date
        let reminder = reminder_factory(Frequency::Daily, utc(2024, 1, 1, 9));
        let next = reminder.advance().unwrap();
        assert_eq!(next.reminder_date, utc(2024, 1, 2, 9));
    }

    #[test]
    fn due_only_when_active_and_reached() {
        let now = utc(2024, 1, 1, 9);
        let mut reminder = reminder_factory(Frequency::Once, now);
        assert!(reminder.is_due(now));
        reminder.reminder_date = utc(2024, 1, 1, 10);
        assert!(!reminder.is_due(now));
        reminder.reminder_date = now;
        reminder.status = ReminderStatus::Cancelled;
        assert!(!reminder.is_due(now));
    }

    #[test]
    fn string_names_match_serde() {
        for reminder_type in ReminderType::CATALOG {
            let json = serde_json::to_string(&reminder_type).unwrap();
            assert_eq!(json, format!("\"{}\"", reminder_type));
            assert_eq!(reminder_type.as_str().parse::<ReminderType>(), Ok(reminder_type));
        }
        assert_eq!("monthly".parse::<Frequency>(), Ok(Frequency::Monthly));
        assert!("yearly".parse::<Frequency>().is_err());
        assert!("sms".parse::<Channel>().is_err());
    }

    #[test]
    fn channels_are_a_set() {
        let channels = normalize_channels(vec![
            Channel::Push,
            Channel::Notification,
            Channel::Push,
        ]);
        assert_eq!(channels, vec![Channel::Push, Channel::Notification]);
    }

    #[test]
    fn links_to_subject() {
        let mut reminder = reminder_factory(Frequency::Once, utc(2024, 1, 1, 9));
        let task_id = reminder.task_id.clone().unwrap();
        assert_eq!(reminder.link(), format!("/tasks/{}", task_id));
        reminder.task_id = None;
        reminder.project_id = Some(Default::default());
        assert!(reminder.link().starts_with("/projects/"));
        reminder.project_id = None;
        assert_eq!(reminder.link(), "/reminders");
    }
}
