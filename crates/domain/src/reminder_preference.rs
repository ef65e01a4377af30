use crate::{
    reminder::{Channel, Frequency, ReminderType},
    shared::entity::{Entity, ID},
};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Lead times, in minutes, a user can pick between:
/// 15 minutes, 1 hour, 1 day, 1 week and 30 days
pub const ADVANCE_TIME_OPTIONS: [i64; 5] = [15, 60, 1440, 10080, 43200];

pub const DEFAULT_ADVANCE_TIME: i64 = 60;

/// When reminders of a category recur. The daily summary is sent at a
/// clock time instead, e.g. "08:00".
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceSchedule {
    Recurrence(Frequency),
    ClockTime(NaiveTime),
}

impl PreferenceSchedule {
    /// The `Frequency` new reminders of the category get by default
    pub fn frequency(&self) -> Frequency {
        match self {
            Self::Recurrence(frequency) => *frequency,
            Self::ClockTime(_) => Frequency::Once,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("`{0}` is neither a frequency nor a HH:MM clock time")]
pub struct InvalidScheduleError(String);

impl FromStr for PreferenceSchedule {
    type Err = InvalidScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(frequency) = s.parse::<Frequency>() {
            return Ok(Self::Recurrence(frequency));
        }
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self::ClockTime)
            .map_err(|_| InvalidScheduleError(s.to_string()))
    }
}

impl Display for PreferenceSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recurrence(frequency) => write!(f, "{}", frequency),
            Self::ClockTime(time) => write!(f, "{}", time.format("%H:%M")),
        }
    }
}

impl Serialize for PreferenceSchedule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PreferenceSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Per user defaults for one `ReminderType`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderPreference {
    pub id: ID,
    pub user_id: ID,
    pub reminder_type: ReminderType,
    /// Whether reminders of this type fire at all
    pub enabled: bool,
    /// Minutes before the event the reminder should fire
    pub advance_time: i64,
    pub channels: Vec<Channel>,
    pub frequency: PreferenceSchedule,
}

impl ReminderPreference {
    /// The preference a user gets for `reminder_type` before changing
    /// anything
    pub fn default_for(user_id: ID, reminder_type: ReminderType) -> Self {
        Self {
            id: Default::default(),
            user_id,
            reminder_type,
            enabled: true,
            advance_time: DEFAULT_ADVANCE_TIME,
            channels: vec![Channel::Notification],
            frequency: PreferenceSchedule::Recurrence(Frequency::Once),
        }
    }

    /// Default rows for the catalog types not present in `existing`
    pub fn missing_defaults(user_id: &ID, existing: &[ReminderPreference]) -> Vec<Self> {
        ReminderType::CATALOG
            .iter()
            .filter(|reminder_type| {
                !existing
                    .iter()
                    .any(|pref| pref.reminder_type == **reminder_type)
            })
            .map(|reminder_type| Self::default_for(user_id.clone(), *reminder_type))
            .collect()
    }
}

pub fn is_valid_advance_time(minutes: i64) -> bool {
    ADVANCE_TIME_OPTIONS.contains(&minutes)
}

impl Entity for ReminderPreference {
    fn id(&self) -> &ID {
        &self.id
    }
}
