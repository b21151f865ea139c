// Host-side tests for the scripted chat assistant.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod dialogue {
    include!("../src/core/dialogue.rs");
}

use dialogue::*;

#[test]
fn greeting_is_sent_once_on_first_open() {
    let mut s = ChatSession::new();
    assert!(!s.is_open());
    let greeting = s.toggle().expect("first open greets");
    assert!(s.is_open());
    assert_eq!(greeting.intent, Intent::Greeting);
    assert!(greeting.text.starts_with("👋 Salut ! Je suis Astro"));
    assert_eq!(
        greeting.quick_replies.as_slice(),
        &["Saisie manuelle", "Emails répétitifs", "Reporting", "Coordination équipe"]
    );
    assert_eq!(s.log().len(), 1);
    assert_eq!(s.log()[0].role, Role::Bot);

    assert!(s.toggle().is_none(), "closing never greets");
    assert!(!s.is_open());
    assert!(s.toggle().is_none(), "reopening never greets again");
    assert_eq!(s.log().len(), 1);
}

#[test]
fn opening_after_conversation_started_does_not_greet() {
    let mut s = ChatSession::new();
    s.submit("bonjour");
    assert!(s.toggle().is_none());
}

#[test]
fn hours_rule_takes_precedence() {
    assert_eq!(classify("J'ai 15h de saisie"), Intent::Hours);
    assert_eq!(classify("15h"), Intent::Hours);
    assert_eq!(classify("20h+"), Intent::Hours);
    // slot picks quote an hour too
    assert_eq!(classify("Demain 14h"), Intent::Hours);
    assert_eq!(classify("Vendredi 10H"), Intent::Hours);
}

#[test]
fn keyword_rules_in_order() {
    assert_eq!(classify("Saisie manuelle"), Intent::ManualEntry);
    assert_eq!(classify("tout est MANUEL"), Intent::ManualEntry);
    assert_eq!(classify("Emails répétitifs"), Intent::Email);
    assert_eq!(classify("Reporting"), Intent::Reporting);
    assert_eq!(classify("un rapport hebdo"), Intent::Reporting);
    assert_eq!(classify("Coordination équipe"), Intent::Coordination);
    assert_eq!(classify("mon équipe"), Intent::Coordination);
    assert_eq!(classify("Autre créneau demain"), Intent::Booking);
    assert_eq!(classify("jean@exemple.fr"), Intent::EmailCaptured);
    assert_eq!(classify("Combien ça coûte ?"), Intent::Pricing);
    assert_eq!(classify("quel prix"), Intent::Pricing);
    // "email" outranks "@"
    assert_eq!(classify("mon email: a@b.fr"), Intent::Email);
}

#[test]
fn unmatched_messages_fall_back() {
    for msg in ["Gmail", "Oui, je book", "hello", "h5", ""] {
        assert_eq!(classify(msg), Intent::Fallback, "{msg:?}");
    }
    let reply = compose(Intent::Fallback, "hello");
    assert!(reply.text.starts_with("🤔 Je comprends."));
    assert_eq!(reply.quick_replies.len(), 4);
}

#[test]
fn digit_then_h_detection() {
    assert!(has_digit_then_h("1h"));
    assert!(has_digit_then_h("environ 10h par semaine"));
    assert!(!has_digit_then_h("h1"));
    assert!(!has_digit_then_h("1 h"));
    assert!(!has_digit_then_h("1H"));
    assert!(!has_digit_then_h(""));
}

#[test]
fn hours_reply_echoes_lowercased_message() {
    let mut s = ChatSession::new();
    let text = s.submit("  J'ai 15H de Saisie ").expect("non-blank");
    assert_eq!(text, "J'ai 15H de Saisie");
    let reply = s.respond(&text);
    assert_eq!(reply.intent, Intent::Hours);
    assert!(reply.text.contains("environ j'ai 15h de saisie par semaine"));
    assert_eq!(
        reply.quick_replies.as_slice(),
        &["Demain 14h", "Vendredi 10h", "Autre créneau"]
    );
}

#[test]
fn blank_input_is_ignored() {
    let mut s = ChatSession::new();
    assert_eq!(s.submit(""), None);
    assert_eq!(s.submit("   \t"), None);
    assert!(s.log().is_empty());
}

#[test]
fn email_is_captured_only_from_the_capture_branch() {
    let mut s = ChatSession::new();
    s.respond("Gmail");
    assert_eq!(s.email(), None);
    let reply = s.respond("Jean.Dupont@Exemple.fr");
    assert_eq!(reply.intent, Intent::EmailCaptured);
    assert!(reply.quick_replies.is_empty());
    assert_eq!(s.email(), Some("Jean.Dupont@Exemple.fr"));
}

#[test]
fn booking_asks_for_email_without_quick_replies() {
    let reply = compose(Intent::Booking, "demain");
    assert!(reply.text.contains("📧 Ton email ?"));
    assert!(reply.quick_replies.is_empty());
}

#[test]
fn log_is_append_only_and_ordered() {
    let mut s = ChatSession::new();
    s.toggle();
    let script = ["Saisie manuelle", "10-20h", "Demain 14h", "Vendredi", "a@b.fr"];
    for msg in script {
        let text = s.submit(msg).expect("non-blank");
        s.respond(&text);
    }
    let log = s.log();
    assert_eq!(log.len(), 1 + 2 * script.len());
    for (i, msg) in script.iter().enumerate() {
        let user = &log[1 + 2 * i];
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, *msg);
        assert_eq!(log[2 + 2 * i].role, Role::Bot);
    }
    assert_eq!(s.email(), Some("a@b.fr"));
}

#[test]
fn rule_table_is_exhaustive_except_greeting_and_fallback() {
    for intent in [
        Intent::Hours,
        Intent::ManualEntry,
        Intent::Email,
        Intent::Reporting,
        Intent::Coordination,
        Intent::Booking,
        Intent::EmailCaptured,
        Intent::Pricing,
    ] {
        assert_eq!(RULES.iter().filter(|r| r.intent == intent).count(), 1);
    }
    assert!(RULES.iter().all(|r| r.intent != Intent::Greeting && r.intent != Intent::Fallback));
    assert_eq!(RULES[0].intent, Intent::Hours);
}

#[test]
fn hours_outranks_later_keywords_in_the_same_message() {
    assert_eq!(classify("reporting 10h"), Intent::Hours);
    assert_eq!(classify("emails, 3h par jour"), Intent::Hours);
    assert_eq!(classify("coordination équipe 5h"), Intent::Hours);
    // without a duration the keyword wins
    assert_eq!(classify("reporting mensuel"), Intent::Reporting);
}

#[test]
fn only_the_capturing_reply_carries_the_capture_intent() {
    let mut s = ChatSession::new();
    let capture = s.respond("a@b.fr");
    assert_eq!(capture.intent, Intent::EmailCaptured);

    // the address stays stored, but later replies are not new captures
    for msg in ["quel prix", "Reporting", "merci"] {
        let reply = s.respond(msg);
        assert_ne!(reply.intent, Intent::EmailCaptured, "{msg:?}");
        assert_eq!(s.email(), Some("a@b.fr"));
    }
}
