mod config;
mod realtime;
mod repos;
mod system;

pub use config::Config;
pub use realtime::NotificationHub;
pub use repos::{
    INotificationRepo, IReminderPreferenceRepo, IReminderRepo, InMemoryNotificationRepo,
    InMemoryReminderPreferenceRepo, InMemoryReminderRepo, Repos,
};
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::info;

#[derive(Clone)]
pub struct TooFlowContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub realtime: Arc<NotificationHub>,
}

impl TooFlowContext {
    fn create(repos: Repos, config: Config) -> Self {
        let realtime = Arc::new(NotificationHub::new(config.notification_stream_capacity));
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            realtime,
        }
    }

    pub fn create_inmemory() -> Self {
        Self::create(Repos::create_inmemory(), Config::new())
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> TooFlowContext {
    let config = Config::new();
    match &config.database_url {
        Some(connection_string) => {
            let repos = Repos::create_postgres(connection_string)
                .await
                .expect("Postgres credentials must be set and valid");
            TooFlowContext::create(repos, config)
        }
        None => {
            info!("Using inmemory repositories");
            TooFlowContext::create(Repos::create_inmemory(), config)
        }
    }
}
