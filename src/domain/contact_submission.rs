use crate::domain::{
    ContactForm, ContactMessage, EmailAddress, FullName, PhoneNumber, ServiceInterest,
    ValidationResult,
};

/// A contact form that passed validation.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub full_name: FullName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub company: Option<String>,
    pub service_interest: Option<ServiceInterest>,
    pub message: ContactMessage,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationResult;

    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        let mut result = ValidationResult::default();
        let full_name = result.check(FullName::parse(value.full_name));
        let email = result.check(EmailAddress::parse(value.email));
        let phone = result.check(PhoneNumber::parse_optional(value.phone));
        let message = result.check(ContactMessage::parse(value.message));
        let company = Some(value.company.trim().to_owned()).filter(|c| !c.is_empty());
        let service_interest = ServiceInterest::parse(value.service_interest);

        match (full_name, email, phone, message) {
            (Some(full_name), Some(email), Some(phone), Some(message)) => Ok(Self {
                full_name,
                email,
                phone,
                company,
                service_interest,
                message,
            }),
            _ => Err(result),
        }
    }
}
