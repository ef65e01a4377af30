use super::IReminderPreferenceRepo;
use crate::repos::shared::inmemory_repo::*;
use tooflow_domain::{ReminderPreference, ID};

pub struct InMemoryReminderPreferenceRepo {
    preferences: std::sync::Mutex<Vec<ReminderPreference>>,
}

impl InMemoryReminderPreferenceRepo {
    pub fn new() -> Self {
        Self {
            preferences: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IReminderPreferenceRepo for InMemoryReminderPreferenceRepo {
    async fn bulk_insert(&self, preferences: &[ReminderPreference]) -> anyhow::Result<()> {
        for preference in preferences {
            let exists = find_one_by(&self.preferences, |p| {
                p.user_id == preference.user_id && p.reminder_type == preference.reminder_type
            })
            .is_some();
            if !exists {
                insert(preference, &self.preferences);
            }
        }
        Ok(())
    }

    async fn save(&self, preference: &ReminderPreference) -> anyhow::Result<()> {
        if !save(preference, &self.preferences) {
            anyhow::bail!("Reminder preference with id: {} does not exist", preference.id);
        }
        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<ReminderPreference>> {
        Ok(find_by(&self.preferences, |p| p.user_id == *user_id))
    }

    async fn find_by_id_and_user(
        &self,
        preference_id: &ID,
        user_id: &ID,
    ) -> anyhow::Result<Option<ReminderPreference>> {
        Ok(find_one_by(&self.preferences, |p| {
            p.id == *preference_id && p.user_id == *user_id
        }))
    }
}
