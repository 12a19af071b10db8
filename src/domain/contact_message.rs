use crate::domain::{ContactField, FieldError};
use unicode_segmentation::UnicodeSegmentation;

/// Shortest message we accept, in grapheme clusters.
pub const MESSAGE_MIN_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String) -> Result<ContactMessage, FieldError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FieldError::Required(ContactField::Message));
        }
        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two characters.
        if trimmed.graphemes(true).count() < MESSAGE_MIN_LENGTH {
            return Err(FieldError::TooShort {
                field: ContactField::Message,
                min: MESSAGE_MIN_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
