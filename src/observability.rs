use crate::domain::ContactSubmission;
use chrono::{DateTime, Utc};

/// Diagnostic record of an accepted contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionEvent {
    pub received_at: DateTime<Utc>,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service_interest: Option<String>,
    pub service_interest_known: bool,
    pub message: String,
}

impl SubmissionEvent {
    pub fn new(submission: &ContactSubmission, received_at: DateTime<Utc>) -> Self {
        Self {
            received_at,
            full_name: submission.full_name.as_ref().to_owned(),
            email: submission.email.as_ref().to_owned(),
            phone: submission.phone.as_ref().map(|p| p.as_ref().to_owned()),
            company: submission.company.clone(),
            service_interest: submission
                .service_interest
                .as_ref()
                .map(|s| s.as_ref().to_owned()),
            service_interest_known: submission
                .service_interest
                .as_ref()
                .map_or(false, |s| s.is_known()),
            message: submission.message.as_ref().to_owned(),
        }
    }
}

/// Where accepted submissions are recorded.
pub trait SubmissionSink: Send + Sync {
    fn record(&self, event: &SubmissionEvent);
}

/// Emits each submission as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn record(&self, event: &SubmissionEvent) {
        tracing::info!(
            submission.received_at = %event.received_at.to_rfc3339(),
            submission.full_name = %event.full_name,
            submission.email = %event.email,
            submission.phone = event.phone.as_deref().unwrap_or(""),
            submission.company = event.company.as_deref().unwrap_or(""),
            submission.service_interest = event.service_interest.as_deref().unwrap_or(""),
            submission.service_interest_known = event.service_interest_known,
            submission.message = %event.message,
            "Contact form submission received"
        );
    }
}
