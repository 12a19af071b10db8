use crate::helpers::{spawn_app, spawn_app_with_email_notifier};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again later.";

#[tokio::test]
async fn contact_returns_a_200_for_a_valid_submission() {
    // Arrange
    let app = spawn_app().await;
    let body = json!({
        "fullName": "Jane Doe",
        "email": "jane@x.com",
        "message": "Hello, I need a website built."
    });

    // Act
    let response = app.post_contact_json(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Thank you for contacting us. We'll get back to you soon."
        })
    );
}

#[tokio::test]
async fn contact_records_the_accepted_submission() {
    // Arrange
    let app = spawn_app().await;
    let body = json!({
        "fullName": "Jane Doe",
        "email": "jane@x.com",
        "phone": "+1 (555) 010-2030",
        "company": "Acme",
        "serviceInterest": "innovation-labs",
        "message": "Hello, I need a website built."
    });

    // Act
    app.post_contact_json(&body).await;

    // Assert
    let events = app.sink.events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.full_name, "Jane Doe");
    assert_eq!(event.email, "jane@x.com");
    assert_eq!(event.phone.as_deref(), Some("+1 (555) 010-2030"));
    assert_eq!(event.company.as_deref(), Some("Acme"));
    assert_eq!(event.service_interest.as_deref(), Some("innovation-labs"));
    assert!(event.service_interest_known);
}

#[tokio::test]
async fn contact_accepts_unknown_service_interests() {
    let app = spawn_app().await;
    let body = json!({
        "fullName": "Jane Doe",
        "email": "jane@x.com",
        "serviceInterest": "something-else-entirely",
        "message": "Hello, I need a website built."
    });

    let response = app.post_contact_json(&body).await;

    assert_eq!(200, response.status().as_u16());
    assert!(!app.sink.events()[0].service_interest_known);
}

#[tokio::test]
async fn contact_returns_a_400_with_field_errors_for_invalid_data() {
    // Arrange
    let app = spawn_app().await;
    let body = json!({ "fullName": "", "email": "bad-email", "message": "hi" });

    // Act
    let response = app.post_contact_json(&body).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Validation failed",
            "errors": {
                "fullName": "Full name is required",
                "email": "Please enter a valid email address",
                "message": "Message must be at least 10 characters"
            }
        })
    );
    assert!(app.sink.events().is_empty());
}

#[tokio::test]
async fn contact_returns_a_400_when_required_fields_are_missing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            json!({ "email": "jane@x.com", "message": "Hello, I need a website built." }),
            "fullName",
            "missing the name",
        ),
        (
            json!({ "fullName": "Jane Doe", "message": "Hello, I need a website built." }),
            "email",
            "missing the email",
        ),
        (
            json!({ "fullName": "Jane Doe", "email": "jane@x.com" }),
            "message",
            "missing the message",
        ),
        (
            json!({ "fullName": "Jane Doe", "email": "jane@x.com", "phone": "call me", "message": "Hello, I need a website built." }),
            "phone",
            "an invalid phone number",
        ),
    ];

    for (invalid_body, field, description) in test_cases {
        // Act
        let response = app.post_contact_json(&invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(
            body["errors"].get(field).is_some(),
            "The API did not report `{}` when the payload was {}.",
            field,
            description
        );
    }
}

#[tokio::test]
async fn contact_returns_a_405_for_other_methods() {
    let app = spawn_app().await;

    for method in [
        reqwest::Method::GET,
        reqwest::Method::PUT,
        reqwest::Method::DELETE,
        reqwest::Method::PATCH,
    ] {
        let response = app
            .api_client
            .request(method.clone(), &format!("{}/api/contact", &app.address))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(405, response.status().as_u16(), "{} was allowed", method);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }
}

#[tokio::test]
async fn contact_returns_a_500_for_malformed_json() {
    let app = spawn_app().await;

    for body in ["{\"fullName\": \"Jane", "fullName=Jane", "[1, 2, 3]", "\"hello\""] {
        let response = app.post_contact_raw(body).await;

        assert_eq!(500, response.status().as_u16(), "payload: {}", body);
        let text = response.text().await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json, json!({ "success": false, "error": UNEXPECTED_ERROR }));
        assert!(!text.contains("EOF"));
        assert!(!text.contains("JSON object"));
    }
    assert!(app.sink.events().is_empty());
}

#[tokio::test]
async fn contact_returns_a_500_for_an_oversized_body() {
    // Arrange
    let app = spawn_app().await;
    let body = json!({
        "fullName": "Jane",
        "email": "jane@x.com",
        "message": "a".repeat(300_000)
    });

    // Act
    let response = app.post_contact_json(&body).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "error": UNEXPECTED_ERROR }));
    assert!(app.sink.events().is_empty());
}

#[tokio::test]
async fn contact_accepts_a_body_just_under_the_size_limit() {
    let app = spawn_app().await;
    let body = json!({
        "fullName": "Jane",
        "email": "jane@x.com",
        "message": "a".repeat(200_000)
    });

    let response = app.post_contact_json(&body).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn contact_sends_an_email_when_a_provider_is_configured() {
    // Arrange
    let app = spawn_app_with_email_notifier().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .and(header("X-Postmark-Server-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app
        .post_contact_json(&json!({
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "message": "Hello, I need a website built."
        }))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!(body["To"], "hello@nextswitch.io");
    assert_eq!(body["Subject"], "New contact form submission from Jane Doe");
}

#[tokio::test]
async fn contact_returns_a_500_if_the_email_provider_fails() {
    // Arrange
    let app = spawn_app_with_email_notifier().await;
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app
        .post_contact_json(&json!({
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "message": "Hello, I need a website built."
        }))
        .await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "error": UNEXPECTED_ERROR }));
}
