// Host-side tests for form validation and the submission relay.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod relay {
    include!("../src/core/relay.rs");
}

use relay::*;
use std::cell::RefCell;

/// Records every POST and answers with a canned result.
struct RecordingTransport {
    fail: bool,
    calls: RefCell<Vec<(String, String)>>,
}

impl RecordingTransport {
    fn ok() -> Self {
        Self {
            fail: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for RecordingTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<(), TransportError> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), body.to_string()));
        if self.fail {
            Err(TransportError::Network("TypeError: Failed to fetch".into()))
        } else {
            Ok(())
        }
    }
}

#[test]
fn newsletter_rejects_missing_or_malformed_email() {
    assert_eq!(newsletter_submission(""), Err(FormError::InvalidEmail));
    assert_eq!(newsletter_submission("not-an-email"), Err(FormError::InvalidEmail));
    assert_eq!(FormError::InvalidEmail.notice(), INVALID_EMAIL);
}

#[test]
fn newsletter_submission_uses_fixed_name_and_message() {
    let s = newsletter_submission("a@b.com").expect("valid");
    assert_eq!(s.name, NEWSLETTER_NAME);
    assert_eq!(s.email, "a@b.com");
    assert_eq!(s.message, NEWSLETTER_MESSAGE);
}

#[test]
fn contact_requires_every_field() {
    assert_eq!(
        contact_submission("", "a@b.com", "hi"),
        Err(FormError::MissingField("name"))
    );
    assert_eq!(
        contact_submission("Ada", "  ", "hi"),
        Err(FormError::MissingField("email"))
    );
    assert_eq!(
        contact_submission("Ada", "a@b.com", "\n"),
        Err(FormError::MissingField("message"))
    );
    assert_eq!(FormError::MissingField("name").notice(), MISSING_FIELDS);
    let s = contact_submission("Ada", "a@b.com", "Bonjour").expect("valid");
    assert_eq!(s.name, "Ada");
}

#[test]
fn body_is_the_three_field_json_object() {
    let s = contact_submission("Ada", "ada@example.com", "Ligne 1\n\"quoted\"").expect("valid");
    let json = s.to_json().expect("encodes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parses");
    let obj = value.as_object().expect("object");
    assert_eq!(obj.len(), 3);
    assert_eq!(obj["name"], "Ada");
    assert_eq!(obj["email"], "ada@example.com");
    assert_eq!(obj["message"], "Ligne 1\n\"quoted\"");
}

#[test]
fn newsletter_success_posts_exactly_once() {
    let transport = RecordingTransport::ok();
    let s = newsletter_submission("a@b.com").expect("valid");
    let outcome = pollster::block_on(relay(&transport, FormKind::Newsletter, &s));
    assert_eq!(outcome, Outcome::Sent(NEWSLETTER_SENT));
    assert!(outcome.is_sent());

    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, FORM_ENDPOINT);
    let body: serde_json::Value = serde_json::from_str(&calls[0].1).expect("json");
    assert_eq!(body["name"], "Newsletter Signup");
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["message"], "Inscription à la newsletter");
}

#[test]
fn contact_success_reports_sent_notice() {
    let transport = RecordingTransport::ok();
    let s = contact_submission("Ada", "ada@example.com", "Bonjour").expect("valid");
    let outcome = pollster::block_on(relay(&transport, FormKind::Contact, &s));
    assert_eq!(
        outcome.message(),
        "Message envoyé avec succès ! Nous vous recontacterons bientôt."
    );
    assert_eq!(transport.calls.borrow().len(), 1);
}

#[test]
fn network_failure_is_reported_without_retry() {
    let transport = RecordingTransport::failing();
    let s = contact_submission("Ada", "ada@example.com", "Bonjour").expect("valid");
    let outcome = pollster::block_on(relay(&transport, FormKind::Contact, &s));
    assert_eq!(outcome, Outcome::Failed(CONTACT_FAILED));
    assert!(!outcome.is_sent());
    assert_eq!(transport.calls.borrow().len(), 1);

    let transport = RecordingTransport::failing();
    let s = newsletter_submission("a@b.com").expect("valid");
    let outcome = pollster::block_on(relay(&transport, FormKind::Newsletter, &s));
    assert_eq!(outcome, Outcome::Failed(NEWSLETTER_FAILED));
    assert_eq!(transport.calls.borrow().len(), 1);
}

#[test]
fn transport_errors_render_readably() {
    let e = TransportError::Network("offline".into());
    assert_eq!(e.to_string(), "network error: offline");
    assert_eq!(FormError::MissingField("email").to_string(), "missing field `email`");
}

#[test]
fn rejected_newsletter_never_reaches_the_transport() {
    let transport = RecordingTransport::ok();
    let sending = std::cell::Cell::new(false);
    for raw in ["", "not-an-email"] {
        let result = pollster::block_on(submit_newsletter(&transport, raw, || sending.set(true)));
        assert_eq!(result, Err(FormError::InvalidEmail));
    }
    assert!(transport.calls.borrow().is_empty());
    assert!(!sending.get(), "button stays enabled for rejected input");

    let result = pollster::block_on(submit_newsletter(&transport, "a@b.com", || sending.set(true)));
    assert_eq!(result, Ok(Outcome::Sent(NEWSLETTER_SENT)));
    assert!(sending.get());
    assert_eq!(transport.calls.borrow().len(), 1);
}

#[test]
fn rejected_contact_never_reaches_the_transport() {
    let transport = RecordingTransport::ok();
    let sending = std::cell::Cell::new(0);
    let attempts = [("", "a@b.com", "hi"), ("Ada", " ", "hi"), ("Ada", "a@b.com", "")];
    for (name, email, message) in attempts {
        let result = pollster::block_on(submit_contact(&transport, name, email, message, || {
            sending.set(sending.get() + 1)
        }));
        assert!(matches!(result, Err(FormError::MissingField(_))));
    }
    assert!(transport.calls.borrow().is_empty());
    assert_eq!(sending.get(), 0);

    let transport = RecordingTransport::failing();
    let result = pollster::block_on(submit_contact(&transport, "Ada", "a@b.com", "Bonjour", || {
        sending.set(sending.get() + 1)
    }));
    assert_eq!(result, Ok(Outcome::Failed(CONTACT_FAILED)));
    assert_eq!(sending.get(), 1);
    assert_eq!(transport.calls.borrow().len(), 1);
}
