use crate::configuration::Settings;
use crate::contact_service::ContactService;
use crate::observability::{SubmissionSink, TracingSink};
use crate::routes::{contact, health_check, method_not_allowed};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        Self::build_with_sink(configuration, Arc::new(TracingSink)).await
    }

    /// Same as [`Application::build`], recording submissions into `sink`.
    pub async fn build_with_sink(
        configuration: Settings,
        sink: Arc<dyn SubmissionSink>,
    ) -> Result<Self, anyhow::Error> {
        let notifier = configuration.contact.notifier.notifier()?;
        let recipient = configuration.contact.recipient()?;
        let contact_service = ContactService::new(sink, notifier, recipient);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, contact_service)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, contact_service: ContactService) -> Result<Server, std::io::Error> {
    let contact_service = web::Data::new(contact_service);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource("/api/contact")
                    .route(web::post().to(contact))
                    .default_service(web::to(method_not_allowed)),
            )
            .app_data(contact_service.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
