use crate::domain::{
    ContactField, ContactForm, ContactMessage, ContactSubmission, EmailAddress, FullName,
    PhoneNumber,
};
use serde::ser::SerializeMap;
use std::collections::BTreeMap;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(ContactField),
    #[error("Please enter a valid {}", .0.format_label())]
    Format(ContactField),
    #[error("{label} must be at least {min} characters", label = .field.label())]
    TooShort { field: ContactField, min: usize },
}

impl FieldError {
    pub fn field(&self) -> ContactField {
        match self {
            FieldError::Required(field) | FieldError::Format(field) => *field,
            FieldError::TooShort { field, .. } => *field,
        }
    }
}

/// Field-addressed outcome of validating a contact form.
///
/// A field that does not appear has no error. Serializes as an object
/// of `fieldName -> message`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<ContactField, FieldError>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    pub fn messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str().to_owned(), error.to_string()))
            .collect()
    }

    /// Keeps the parsed value, or records the error against its field.
    pub(crate) fn check<T>(&mut self, outcome: Result<T, FieldError>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(e) => {
                self.errors.insert(e.field(), e);
                None
            }
        }
    }
}

impl serde::Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.as_str(), &error.to_string())?;
        }
        map.end()
    }
}

/// Validates a whole form. Pure: the same form always gives the same result.
pub fn validate(form: &ContactForm) -> ValidationResult {
    match ContactSubmission::try_from(form.clone()) {
        Ok(_) => ValidationResult::default(),
        Err(result) => result,
    }
}

/// Validates one field in isolation, for live feedback while typing.
pub fn validate_field(field: ContactField, value: &str) -> Option<FieldError> {
    let value = value.to_owned();
    match field {
        ContactField::FullName => FullName::parse(value).err(),
        ContactField::Email => EmailAddress::parse(value).err(),
        ContactField::Phone => PhoneNumber::parse_optional(value).err(),
        ContactField::Message => ContactMessage::parse(value).err(),
        ContactField::Company | ContactField::ServiceInterest => None,
    }
}
