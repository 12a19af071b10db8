use crate::domain::ContactSubmission;
use htmlescape::encode_minimal;

/// The message sent to the contact inbox for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub html_content: String,
    pub text_content: String,
}

impl Notification {
    pub fn from_submission(submission: &ContactSubmission) -> Self {
        let subject = format!("New contact form submission from {}", submission.full_name);

        let mut rows: Vec<(&str, &str)> = vec![
            ("Name", submission.full_name.as_ref()),
            ("Email", submission.email.as_ref()),
        ];
        if let Some(phone) = &submission.phone {
            rows.push(("Phone", phone.as_ref()));
        }
        if let Some(company) = &submission.company {
            rows.push(("Company", company.as_str()));
        }
        if let Some(interest) = &submission.service_interest {
            rows.push(("Service interest", interest.title()));
        }

        let text_content = format!(
            "{}\n\n{}",
            rows.iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect::<Vec<_>>()
                .join("\n"),
            submission.message.as_ref()
        );
        // Everything here comes from the visitor.
        let html_content = format!(
            "<h2>New contact form submission</h2>\n<ul>\n{}\n</ul>\n<p>{}</p>",
            rows.iter()
                .map(|(label, value)| format!(
                    "<li><strong>{label}:</strong> {}</li>",
                    encode_minimal(value)
                ))
                .collect::<Vec<_>>()
                .join("\n"),
            encode_minimal(submission.message.as_ref()).replace('\n', "<br>")
        );

        Self {
            subject,
            html_content,
            text_content,
        }
    }
}
