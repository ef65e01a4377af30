use tooflow_api::Application;
use tooflow_infra::{setup_context, Config};
use tooflow_sdk::{TooFlowSDK, ID};

pub struct TestApp {
    pub config: Config,
    pub address: String,
    pub user_id: ID,
}

impl TestApp {
    /// SDK acting on behalf of another, freshly created user
    pub fn sdk_for_new_user(&self) -> (TooFlowSDK, ID) {
        let user_id = ID::default();
        (TooFlowSDK::new(self.address.clone(), user_id.clone()), user_id)
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, TooFlowSDK) {
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port
    // Tests trigger the dispatcher themselves
    ctx.config.dispatcher_enabled = false;

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let user_id = ID::default();
    let sdk = TooFlowSDK::new(address.clone(), user_id.clone());
    let app = TestApp {
        config,
        address,
        user_id,
    };
    (app, sdk)
}
