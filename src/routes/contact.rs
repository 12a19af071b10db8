use crate::contact_service::ContactService;
use crate::domain::{ContactForm, ContactSubmission, ValidationResult};
use crate::utils::error_chain_fmt;
use actix_web::body::BoxBody;
use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use futures::StreamExt;
use std::collections::BTreeMap;
use tracing::field::display;
use tracing::Span;

pub const SUCCESS_MESSAGE: &str = "Thank you for contacting us. We'll get back to you soon.";
pub const VALIDATION_FAILED: &str = "Validation failed";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again later.";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Largest request body the contact endpoint reads, in bytes.
pub const MAX_BODY_SIZE: usize = 256 * 1024;

/// Body of every response sent by the contact endpoint.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ContactResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Validation failed")]
    ValidationError(ValidationResult),
    #[error("The request body is not a contact form")]
    MalformedRequest(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::ValidationError(errors) => {
                writeln!(f, "{}", self)?;
                for error in errors.errors() {
                    writeln!(f, "\t{}: {}", error.field(), error)?;
                }
                Ok(())
            }
            _ => error_chain_fmt(self, f),
        }
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::MalformedRequest(_) | ContactError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let body = match self {
            ContactError::ValidationError(errors) => ContactResponseBody {
                success: Some(false),
                error: Some(VALIDATION_FAILED.to_owned()),
                errors: Some(errors.messages()),
                ..Default::default()
            },
            // The cause is logged by the tracing middleware, never sent back.
            ContactError::MalformedRequest(_) | ContactError::UnexpectedError(_) => {
                ContactResponseBody {
                    success: Some(false),
                    error: Some(UNEXPECTED_ERROR.to_owned()),
                    ..Default::default()
                }
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(payload, service),
    fields(
        contact_email = tracing::field::Empty,
        contact_name = tracing::field::Empty,
    )
)]
pub async fn contact(
    payload: web::Payload,
    service: web::Data<ContactService>,
) -> Result<HttpResponse, ContactError> {
    let body = read_body(payload)
        .await
        .map_err(ContactError::MalformedRequest)?;
    let form = parse_contact_form(&body).map_err(ContactError::MalformedRequest)?;
    Span::current()
        .record("contact_email", &display(&form.email))
        .record("contact_name", &display(&form.full_name));

    // Whatever the browser checked, the rules are enforced again here.
    let submission = ContactSubmission::try_from(form).map_err(ContactError::ValidationError)?;
    service
        .accept(&submission)
        .await
        .context("Failed to dispatch the contact notification")?;

    Ok(HttpResponse::Ok().json(ContactResponseBody {
        success: Some(true),
        message: Some(SUCCESS_MESSAGE.to_owned()),
        ..Default::default()
    }))
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .json(ContactResponseBody {
            error: Some(METHOD_NOT_ALLOWED.to_owned()),
            ..Default::default()
        })
}

/// Reads the whole body, up to `MAX_BODY_SIZE`.
///
/// An oversized body is still drained so the client gets to read our answer.
async fn read_body(mut payload: web::Payload) -> Result<web::BytesMut, anyhow::Error> {
    let mut body = web::BytesMut::new();
    let mut received = 0usize;
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.context("Failed to read the request body")?;
        received += chunk.len();
        if received <= MAX_BODY_SIZE {
            body.extend_from_slice(&chunk);
        }
    }
    if received > MAX_BODY_SIZE {
        anyhow::bail!(
            "The request body is {} bytes, more than the {} allowed",
            received,
            MAX_BODY_SIZE
        );
    }
    Ok(body)
}

fn parse_contact_form(body: &[u8]) -> Result<ContactForm, anyhow::Error> {
    let document: serde_json::Value =
        serde_json::from_slice(body).context("The request body is not valid JSON")?;
    ContactForm::from_untrusted_json(&document)
        .ok_or_else(|| anyhow::anyhow!("The request body is not a JSON object"))
}
