use crate::domain::{ContactField, FieldError};
use validator::validate_email;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Accepts `local-part@domain` where the domain has at least one dot.
    pub fn parse(s: String) -> Result<EmailAddress, FieldError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FieldError::Required(ContactField::Email));
        }
        if validate_email(trimmed) && has_dotted_domain(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(FieldError::Format(ContactField::Email))
        }
    }
}

fn has_dotted_domain(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => {
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
