//! Dispatching contact notifications to the people who answer them.
//!
//! The contact handler only sees the [`Notifier`] trait. Which
//! implementation backs it is decided by configuration at startup.

mod email_client;
mod log_notifier;
mod notification;

pub use email_client::EmailClient;
pub use log_notifier::LogNotifier;
pub use notification::Notification;

use crate::domain::EmailAddress;

#[derive(thiserror::Error, Debug)]
pub enum NotifierError {
    #[error("Failed to reach the notification provider")]
    Transport(#[from] reqwest::Error),
    #[error("The notification provider rejected the request with status {0}")]
    Rejected(reqwest::StatusCode),
}

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        recipient: &EmailAddress,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), NotifierError>;
}
