use crate::domain::{ContactField, FieldError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    /// Returns an instance of `FullName` if the input holds anything other
    /// than whitespace. The stored name is trimmed.
    pub fn parse(s: String) -> Result<FullName, FieldError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(FieldError::Required(ContactField::FullName))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
