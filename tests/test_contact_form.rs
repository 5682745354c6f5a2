//! Workflow tests for ContactForm against an in-memory relay.
//!
//! Timer behavior runs on a paused tokio clock, so the 5 second reset is
//! observed without actually waiting.

mod mocks;

use mocks::MockRelay;
use portfolio_contact::config::{PUBLIC_KEY_VAR, SERVICE_ID_VAR, TEMPLATE_ID_VAR};
use portfolio_contact::{
    ConfigError, ContactField, ContactForm, FormSettings, RelayError, RelaySettings, SubmitError,
    SubmissionStatus, ValidationError,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_test::{assert_err, assert_ok};

fn settings() -> FormSettings {
    FormSettings::new(
        RelaySettings::new("service_abc", "template_xyz", "pk_123"),
        "owner@example.com",
    )
}

fn form_with(relay: &MockRelay, settings: FormSettings) -> ContactForm {
    ContactForm::new(Arc::new(relay.clone()), settings)
}

fn fill(form: &ContactForm) {
    form.update_field(ContactField::Name, "John Doe");
    form.update_field(ContactField::Email, "john@example.com");
    form.update_field(ContactField::Phone, "+1 (555) 123-4567");
    form.update_field(ContactField::Message, "I'd like to talk about a project.");
}

#[tokio::test(start_paused = true)]
async fn test_success_clears_fields_then_resets_to_idle() {
    let relay = MockRelay::new();
    let form = form_with(&relay, settings());
    fill(&form);

    assert_ok!(form.submit().await);

    assert_eq!(relay.call_count(), 1);
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(form.submission().is_empty());
    assert_eq!(
        form.status().banner(),
        Some("Message sent successfully! I will get back to you soon.")
    );

    sleep(Duration::from_millis(4999)).await;
    assert_eq!(form.status(), SubmissionStatus::Success);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(!form.reset_pending());
}

#[tokio::test(start_paused = true)]
async fn test_relay_failure_keeps_fields_then_resets_to_idle() {
    let relay = MockRelay::failing();
    let form = form_with(&relay, settings());
    fill(&form);

    let err = assert_err!(form.submit().await);

    assert!(matches!(err, SubmitError::Transport(RelayError::HttpError(_))));
    assert_eq!(relay.call_count(), 1);
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.submission().name, "John Doe");
    assert_eq!(form.submission().email, "john@example.com");

    sleep(Duration::from_millis(5001)).await;
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.submission().name, "John Doe");
}

#[tokio::test]
async fn test_payload_sent_to_relay() {
    let relay = MockRelay::new();
    let form = form_with(&relay, settings());
    fill(&form);
    form.update_field(ContactField::Phone, "");

    assert_ok!(form.submit().await);

    let params = relay.last_params().unwrap();
    assert_eq!(params.from_name, "John Doe");
    assert_eq!(params.from_email, "john@example.com");
    assert_eq!(params.phone, "Not provided");
    assert_eq!(params.message, "I'd like to talk about a project.");
    assert_eq!(params.to_email, "owner@example.com");

    let creds = relay.last_credentials().unwrap();
    assert_eq!(creds.service_id, "service_abc");
    assert_eq!(creds.template_id, "template_xyz");
    assert_eq!(creds.public_key, "pk_123");
}

#[tokio::test]
async fn test_invalid_input_never_reaches_relay() {
    let cases = [
        ("john", "", ContactField::Email),
        ("john@example", "", ContactField::Email),
        ("john@example.com", "555-123", ContactField::Phone),
        ("john@example.com", "call me maybe", ContactField::Phone),
    ];

    for (email, phone, field) in cases {
        let relay = MockRelay::new();
        let form = form_with(&relay, settings());
        fill(&form);
        form.update_field(ContactField::Email, email);
        form.update_field(ContactField::Phone, phone);

        let err = assert_err!(form.submit().await);

        assert!(matches!(err, SubmitError::Validation(ref e) if e.field() == field));
        assert_eq!(relay.call_count(), 0, "relay called for {:?}/{:?}", email, phone);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.error(field).is_some());
        assert!(!form.reset_pending());
    }
}

#[tokio::test]
async fn test_blank_required_fields_block_submit() {
    let relay = MockRelay::new();
    let form = form_with(&relay, settings());
    fill(&form);
    form.update_field(ContactField::Message, "   ");

    let err = assert_err!(form.submit().await);

    assert!(matches!(
        err,
        SubmitError::Validation(ValidationError::MissingField(ContactField::Message))
    ));
    assert_eq!(relay.call_count(), 0);
}

#[tokio::test]
async fn test_email_error_shown_before_phone_error() {
    let relay = MockRelay::new();
    let form = form_with(&relay, settings());
    fill(&form);
    form.update_field(ContactField::Email, "not-an-email");
    form.update_field(ContactField::Phone, "123");

    assert_err!(form.submit().await);
    assert_eq!(
        form.errors().message(ContactField::Email),
        "Please enter a valid email address"
    );
    assert!(form.error(ContactField::Phone).is_none());

    // Editing clears the email error; the next attempt reports the phone
    form.update_field(ContactField::Email, "john@example.com");
    assert!(form.errors().is_empty());

    assert_err!(form.submit().await);
    assert!(form.error(ContactField::Email).is_none());
    assert_eq!(
        form.errors().message(ContactField::Phone),
        "Please enter a valid phone number (at least 10 digits)"
    );
    assert_eq!(relay.call_count(), 0);
}

#[tokio::test]
async fn test_earlier_error_survives_new_rejection() {
    let relay = MockRelay::new();
    let form = form_with(&relay, settings());
    fill(&form);
    form.update_field(ContactField::Phone, "123");
    assert_err!(form.submit().await);

    // Phone untouched, email broken: both errors are on screen
    form.update_field(ContactField::Email, "broken");
    assert_err!(form.submit().await);

    assert!(form.error(ContactField::Email).is_some());
    assert!(form.error(ContactField::Phone).is_some());
}

#[tokio::test]
async fn test_valid_submit_clears_all_errors() {
    let relay = MockRelay::new();
    let form = form_with(&relay, settings());
    fill(&form);
    form.update_field(ContactField::Email, "broken");
    assert_err!(form.submit().await);

    form.update_field(ContactField::Email, "john@example.com");
    assert_ok!(form.submit().await);

    assert!(form.errors().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_missing_secret_fails_without_network_call() {
    for missing in [SERVICE_ID_VAR, TEMPLATE_ID_VAR, PUBLIC_KEY_VAR] {
        let mut relay_settings = RelaySettings::new("service_abc", "template_xyz", "pk_123");
        match missing {
            SERVICE_ID_VAR => relay_settings.service_id = None,
            TEMPLATE_ID_VAR => relay_settings.template_id = None,
            _ => relay_settings.public_key = None,
        }

        let relay = MockRelay::new();
        let form = form_with(
            &relay,
            FormSettings::new(relay_settings, "owner@example.com"),
        );
        fill(&form);

        let err = assert_err!(form.submit().await);

        match err {
            SubmitError::Configuration(ConfigError::MissingVar(var)) => assert_eq!(var, missing),
            other => panic!("Expected configuration error, got: {:?}", other),
        }
        assert_eq!(relay.call_count(), 0);
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(
            form.status().banner(),
            Some("Something went wrong. Please try again or email me directly.")
        );
        assert_eq!(form.submission().name, "John Doe");

        sleep(Duration::from_millis(5001)).await;
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_rejected() {
    let relay = MockRelay::gated();
    let form = Arc::new(form_with(&relay, settings()));
    fill(&form);

    let first = {
        let form = form.clone();
        tokio::spawn(async move { form.submit().await })
    };

    while relay.call_count() == 0 {
        tokio::task::yield_now().await;
    }
    assert!(form.is_submitting());

    let second = form.submit().await;
    assert!(matches!(second, Err(SubmitError::Busy)));
    assert_eq!(form.status(), SubmissionStatus::Submitting);

    relay.release();
    assert_ok!(first.await.unwrap());

    assert_eq!(relay.call_count(), 1);
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(form.metrics().busy_rejections_total(), 1);
    assert_eq!(form.metrics().submissions_attempted_total(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_new_submission_cancels_pending_reset() {
    let relay = MockRelay::new();
    let form = form_with(&relay, settings());

    fill(&form);
    assert_ok!(form.submit().await);

    sleep(Duration::from_millis(3000)).await;
    fill(&form);
    assert_ok!(form.submit().await);

    // The first timer would have fired at 5000 ms
    sleep(Duration::from_millis(2500)).await;
    assert_eq!(form.status(), SubmissionStatus::Success);

    sleep(Duration::from_millis(2501)).await;
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(relay.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_custom_reset_delay() {
    let relay = MockRelay::new();
    let form = form_with(
        &relay,
        settings().with_status_reset(Duration::from_millis(100)),
    );
    fill(&form);

    assert_ok!(form.submit().await);
    sleep(Duration::from_millis(101)).await;

    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_form_usable_after_failure() {
    let relay = MockRelay::failing();
    let form = form_with(&relay, settings());
    fill(&form);

    assert_err!(form.submit().await);
    relay.set_failing(false);
    assert_ok!(form.submit().await);

    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(relay.call_count(), 2);
    assert_eq!(form.metrics().submissions_failed_total(), 1);
    assert_eq!(form.metrics().submissions_succeeded_total(), 1);
}
