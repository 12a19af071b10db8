/// The fields of the contact form, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FullName,
    Email,
    Phone,
    Company,
    ServiceInterest,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::FullName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::ServiceInterest,
        ContactField::Message,
    ];

    /// Name of the field on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::FullName => "fullName",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::ServiceInterest => "serviceInterest",
            ContactField::Message => "message",
        }
    }

    /// Human readable label, used at the start of error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FullName => "Full name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone number",
            ContactField::Company => "Company",
            ContactField::ServiceInterest => "Service interest",
            ContactField::Message => "Message",
        }
    }

    /// What a well-formed value of this field is called.
    pub fn format_label(&self) -> &'static str {
        match self {
            ContactField::Email => "email address",
            ContactField::Phone => "phone number",
            ContactField::FullName => "full name",
            ContactField::Company => "company name",
            ContactField::ServiceInterest => "service",
            ContactField::Message => "message",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw contact form input, exactly as collected from the page.
///
/// Every field is plain text and defaults to an empty string when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service_interest: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::ServiceInterest => &self.service_interest,
            ContactField::Message => &self.message,
        }
    }

    /// Builds a form out of an untrusted JSON document.
    ///
    /// Returns `None` if the document is not an object. Missing and `null`
    /// fields become empty strings, numbers and booleans keep their JSON
    /// text, arrays and objects are dropped.
    pub fn from_untrusted_json(document: &serde_json::Value) -> Option<Self> {
        let object = document.as_object()?;
        let text = |field: ContactField| -> String {
            match object.get(field.as_str()) {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(serde_json::Value::Number(n)) => n.to_string(),
                Some(serde_json::Value::Bool(b)) => b.to_string(),
                _ => String::new(),
            }
        };
        Some(Self {
            full_name: text(ContactField::FullName),
            email: text(ContactField::Email),
            phone: text(ContactField::Phone),
            company: text(ContactField::Company),
            service_interest: text(ContactField::ServiceInterest),
            message: text(ContactField::Message),
        })
    }
}
