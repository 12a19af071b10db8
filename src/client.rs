//! Typed client for the contact endpoint.
//!
//! Mirrors what the contact page does in the browser: validate while the
//! visitor types, refuse to submit a form that is known to be invalid, then
//! surface either the acknowledgement or the per-field errors the server
//! sends back. Retrying is left to the caller.

use crate::domain::{
    validate, validate_field, ContactField, ContactForm, FieldError, ValidationResult,
};
use crate::routes::ContactResponseBody;
use reqwest::{Client, StatusCode};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server acknowledged the submission.
    Accepted(String),
    /// Field name to error message, from local or server validation.
    Rejected(BTreeMap<String, String>),
    /// The server could not process the submission.
    Failed(String),
}

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Failed to send the contact form")]
    Transport(#[from] reqwest::Error),
}

pub struct ContactClient {
    http_client: Client,
    base_url: String,
}

impl ContactClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    pub fn validate(&self, form: &ContactForm) -> ValidationResult {
        validate(form)
    }

    pub fn validate_field(&self, field: ContactField, value: &str) -> Option<FieldError> {
        validate_field(field, value)
    }

    #[tracing::instrument(name = "Submit the contact form", skip_all)]
    pub async fn submit(&self, form: &ContactForm) -> Result<SubmissionOutcome, ClientError> {
        let local = self.validate(form);
        if local.has_errors() {
            return Ok(SubmissionOutcome::Rejected(local.messages()));
        }

        let response = self
            .http_client
            .post(format!("{}/api/contact", self.base_url))
            .json(form)
            .send()
            .await?;
        let status = response.status();
        // Error responses from proxies are not necessarily JSON.
        let body: Option<ContactResponseBody> = response.json().await.ok();

        Ok(match (status, body) {
            (
                StatusCode::OK,
                Some(ContactResponseBody {
                    message: Some(message),
                    ..
                }),
            ) => SubmissionOutcome::Accepted(message),
            (
                StatusCode::BAD_REQUEST,
                Some(ContactResponseBody {
                    errors: Some(errors),
                    ..
                }),
            ) => SubmissionOutcome::Rejected(errors),
            (StatusCode::OK | StatusCode::BAD_REQUEST, _) => SubmissionOutcome::Failed(format!(
                "Unreadable response body with status {}",
                status
            )),
            (_, body) => SubmissionOutcome::Failed(
                body.and_then(|b| b.error)
                    .unwrap_or_else(|| format!("Unexpected response status {}", status)),
            ),
        })
    }
}
