use nextswitch::configuration::{get_configuration, EmailClientSettings, NotifierSettings, Settings};
use nextswitch::observability::{SubmissionEvent, SubmissionSink};
use nextswitch::startup::Application;
use nextswitch::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use secrecy::Secret;
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // We cannot assign the output of `get_subscriber` to a variable based on the
    // value TEST_LOG` because the sink is part of the type returned by
    // `get_subscriber`, therefore they are not the same type.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

/// Keeps every submission the application records.
#[derive(Default)]
pub struct RecordingSink(Mutex<Vec<SubmissionEvent>>);

impl RecordingSink {
    pub fn events(&self) -> Vec<SubmissionEvent> {
        self.0.lock().unwrap().clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn record(&self, event: &SubmissionEvent) {
        self.0.lock().unwrap().push(event.clone());
    }
}

pub struct TestApp {
    pub address: String,
    pub sink: Arc<RecordingSink>,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact_json(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Spawns the application with notifications logged only.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_, _| {}).await
}

/// Spawns the application with notifications emailed to `email_server`.
pub async fn spawn_app_with_email_notifier() -> TestApp {
    spawn_app_with(|c, email_server| {
        c.contact.notifier = NotifierSettings::Email(EmailClientSettings {
            base_url: email_server.uri(),
            sender_email: "website@nextswitch.io".into(),
            authorization_token: Secret::new("test-token".into()),
            timeout_milliseconds: 200,
        });
    })
    .await
}

async fn spawn_app_with(customise: impl FnOnce(&mut Settings, &MockServer)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.contact.notifier = NotifierSettings::Log;
        customise(&mut c, &email_server);
        c
    };

    let sink = Arc::new(RecordingSink::default());
    let application = Application::build_with_sink(configuration, sink.clone())
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        sink,
        email_server,
        api_client: reqwest::Client::new(),
    }
}
