use crate::domain::{ContactField, FieldError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Permissive on purpose: digits, spaces, `+`, `-` and parentheses.
    pub fn parse(s: String) -> Result<PhoneNumber, FieldError> {
        let trimmed = s.trim();
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');
        if !trimmed.is_empty() && trimmed.chars().all(allowed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(FieldError::Format(ContactField::Phone))
        }
    }

    /// The phone number is optional: blank input is not an error.
    pub fn parse_optional(s: String) -> Result<Option<PhoneNumber>, FieldError> {
        if s.trim().is_empty() {
            Ok(None)
        } else {
            Self::parse(s).map(Some)
        }
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
