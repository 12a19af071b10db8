use crate::domain::EmailAddress;
use crate::notifier::{EmailClient, LogNotifier, Notifier};
use anyhow::Context;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::sync::Arc;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub contact: ContactSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct ContactSettings {
    /// Where contact notifications are addressed.
    pub recipient: String,
    pub notifier: NotifierSettings,
}

impl ContactSettings {
    pub fn recipient(&self) -> Result<EmailAddress, anyhow::Error> {
        EmailAddress::parse(self.recipient.clone())
            .map_err(|e| anyhow::anyhow!("Invalid contact recipient `{}`: {}", self.recipient, e))
    }
}

#[derive(serde::Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotifierSettings {
    /// Only log the notification. Nothing leaves the process.
    Log,
    Email(EmailClientSettings),
}

impl NotifierSettings {
    pub fn notifier(&self) -> Result<Arc<dyn Notifier>, anyhow::Error> {
        let notifier: Arc<dyn Notifier> = match self {
            NotifierSettings::Log => Arc::new(LogNotifier),
            NotifierSettings::Email(settings) => Arc::new(settings.client()?),
        };
        Ok(notifier)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn client(&self) -> Result<EmailClient, anyhow::Error> {
        let sender_email = self.sender().map_err(|e| {
            anyhow::anyhow!("Invalid sender email `{}`: {}", self.sender_email, e)
        })?;
        EmailClient::new(
            self.base_url.clone(),
            sender_email,
            self.authorization_token.clone(),
            self.timeout(),
        )
        .context("Failed to build the HTTP client for email notifications")
    }

    pub fn sender(&self) -> Result<EmailAddress, crate::domain::FieldError> {
        EmailAddress::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_APPLICATION__PORT=5001 would set `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
