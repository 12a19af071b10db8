use crate::domain::EmailAddress;
use crate::notifier::{Notifier, NotifierError};

/// Records the notification it would have sent and reports success.
///
/// Used until an email provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    #[tracing::instrument(name = "Log contact notification", skip_all)]
    async fn send(
        &self,
        recipient: &EmailAddress,
        subject: &str,
        _html_content: &str,
        text_content: &str,
    ) -> Result<(), NotifierError> {
        tracing::info!(
            notification.recipient = %recipient,
            notification.subject = %subject,
            notification.body = %text_content,
            "No notification provider configured, logging the notification instead"
        );
        Ok(())
    }
}
