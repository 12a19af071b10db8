use crate::domain::{ContactSubmission, EmailAddress};
use crate::notifier::{Notification, Notifier, NotifierError};
use crate::observability::{SubmissionEvent, SubmissionSink};
use chrono::Utc;
use std::sync::Arc;

/// What happens to a contact submission once it has been validated.
pub struct ContactService {
    sink: Arc<dyn SubmissionSink>,
    notifier: Arc<dyn Notifier>,
    recipient: EmailAddress,
}

impl ContactService {
    pub fn new(
        sink: Arc<dyn SubmissionSink>,
        notifier: Arc<dyn Notifier>,
        recipient: EmailAddress,
    ) -> Self {
        Self {
            sink,
            notifier,
            recipient,
        }
    }

    #[tracing::instrument(name = "Accept a contact submission", skip_all)]
    pub async fn accept(&self, submission: &ContactSubmission) -> Result<(), NotifierError> {
        self.sink
            .record(&SubmissionEvent::new(submission, Utc::now()));
        let notification = Notification::from_submission(submission);
        self.notifier
            .send(
                &self.recipient,
                &notification.subject,
                &notification.html_content,
                &notification.text_content,
            )
            .await
    }
}
