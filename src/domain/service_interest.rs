/// Services listed on the contact form's drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    WebDevelopment,
    MobileDevelopment,
    TechTraining,
    InnovationLabs,
    CustomSoftwareDevelopment,
    ItConsulting,
    GeneralInquiry,
}

impl Service {
    pub const ALL: [Service; 7] = [
        Service::WebDevelopment,
        Service::MobileDevelopment,
        Service::TechTraining,
        Service::InnovationLabs,
        Service::CustomSoftwareDevelopment,
        Service::ItConsulting,
        Service::GeneralInquiry,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Service::WebDevelopment => "web-development",
            Service::MobileDevelopment => "mobile-development",
            Service::TechTraining => "tech-training",
            Service::InnovationLabs => "innovation-labs",
            Service::CustomSoftwareDevelopment => "custom-software-development",
            Service::ItConsulting => "it-consulting",
            Service::GeneralInquiry => "general-inquiry",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Service::WebDevelopment => "Web Development",
            Service::MobileDevelopment => "Mobile Development",
            Service::TechTraining => "Tech Training",
            Service::InnovationLabs => "Innovation Labs",
            Service::CustomSoftwareDevelopment => "Custom Software Development",
            Service::ItConsulting => "IT Consulting",
            Service::GeneralInquiry => "General Inquiry",
        }
    }

    pub fn from_code(code: &str) -> Option<Service> {
        Self::ALL.into_iter().find(|service| service.code() == code)
    }
}

/// What the visitor said they are interested in.
///
/// The field is advisory: codes we do not know are kept verbatim instead
/// of being rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceInterest {
    Known(Service),
    Other(String),
}

impl ServiceInterest {
    /// Never fails. Blank input means no interest was given.
    pub fn parse(s: String) -> Option<ServiceInterest> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match Service::from_code(trimmed) {
            Some(service) => ServiceInterest::Known(service),
            None => ServiceInterest::Other(trimmed.to_owned()),
        })
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ServiceInterest::Known(_))
    }

    pub fn title(&self) -> &str {
        match self {
            ServiceInterest::Known(service) => service.title(),
            ServiceInterest::Other(s) => s,
        }
    }
}

impl AsRef<str> for ServiceInterest {
    fn as_ref(&self) -> &str {
        match self {
            ServiceInterest::Known(service) => service.code(),
            ServiceInterest::Other(s) => s,
        }
    }
}
