mod contact_form;
mod contact_message;
mod contact_submission;
mod email_address;
mod full_name;
mod phone_number;
mod service_interest;
mod validation;

pub use contact_form::{ContactField, ContactForm};
pub use contact_message::{ContactMessage, MESSAGE_MIN_LENGTH};
pub use contact_submission::ContactSubmission;
pub use email_address::EmailAddress;
pub use full_name::FullName;
pub use phone_number::PhoneNumber;
pub use service_interest::{Service, ServiceInterest};
pub use validation::{validate, validate_field, FieldError, ValidationResult};
