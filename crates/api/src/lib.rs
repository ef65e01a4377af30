mod error;
mod job_schedulers;
mod notification;
mod reminder;
mod reminder_preference;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use error::TooFlowError;
use job_schedulers::start_dispatch_job;
use std::net::TcpListener;
use tooflow_infra::TooFlowContext;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use shared::auth::USER_HEADER;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    notification::configure_routes(cfg);
    reminder::configure_routes(cfg);
    reminder_preference::configure_routes(cfg);
    status::configure_routes(cfg);
}

/// Malformed bodies, paths and queries get the same json error body as
/// every other failed request
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| TooFlowError::BadClientData(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| TooFlowError::BadClientData(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| TooFlowError::BadClientData(err.to_string()).into()),
    );
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: TooFlowContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: TooFlowContext) {
        if context.config.dispatcher_enabled {
            start_dispatch_job(context);
        } else {
            info!("Reminder dispatcher job is disabled");
        }
    }

    async fn configure_server(context: TooFlowContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .configure(configure_extractors)
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
