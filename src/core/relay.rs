use serde::Serialize;

// Contact / newsletter submission. The endpoint is opaque (no-cors), so a
// send that does not throw counts as delivered.

pub const FORM_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbyv-d7F0Pp6vVTJygM2WZKDSUCYXX1W2BWp3VSVpQ984J8B3vj3Kpyy8yj2ALzgGDq8/exec";

pub const NEWSLETTER_NAME: &str = "Newsletter Signup";
pub const NEWSLETTER_MESSAGE: &str = "Inscription à la newsletter";

pub const CONTACT_SENT: &str = "Message envoyé avec succès ! Nous vous recontacterons bientôt.";
pub const CONTACT_FAILED: &str = "Une erreur est survenue lors de l'envoi. Veuillez réessayer.";
pub const NEWSLETTER_SENT: &str = "Inscription réussie !";
pub const NEWSLETTER_FAILED: &str = "Inscription impossible pour le moment. Veuillez réessayer.";
pub const INVALID_EMAIL: &str = "Veuillez entrer un email valide.";
pub const MISSING_FIELDS: &str = "Veuillez remplir tous les champs.";

/// JSON body accepted by the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    pub fn to_json(&self) -> Result<String, TransportError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
}

impl FormError {
    /// Text shown to the visitor.
    pub fn notice(&self) -> &'static str {
        match self {
            FormError::MissingField(_) => MISSING_FIELDS,
            FormError::InvalidEmail => INVALID_EMAIL,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Contact form: every field must be non-blank.
pub fn contact_submission(
    name: &str,
    email: &str,
    message: &str,
) -> Result<Submission, FormError> {
    for (field, value) in [("name", name), ("email", email), ("message", message)] {
        if value.trim().is_empty() {
            return Err(FormError::MissingField(field));
        }
    }
    Ok(Submission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// Newsletter: present and containing an `@`.
pub fn newsletter_submission(email: &str) -> Result<Submission, FormError> {
    if email.is_empty() || !email.contains('@') {
        return Err(FormError::InvalidEmail);
    }
    Ok(Submission {
        name: NEWSLETTER_NAME.to_string(),
        email: email.to_string(),
        message: NEWSLETTER_MESSAGE.to_string(),
    })
}

/// Fire-and-forget JSON POST.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &str) -> Result<(), TransportError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Newsletter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Sent(&'static str),
    Failed(&'static str),
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Sent(m) | Outcome::Failed(m) => m,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Outcome::Sent(_))
    }
}

/// Send one submission. Exactly one `post_json` call is made; there is no
/// retry.
pub async fn relay<T: Transport>(
    transport: &T,
    kind: FormKind,
    submission: &Submission,
) -> Outcome {
    let (sent, failed) = match kind {
        FormKind::Contact => (CONTACT_SENT, CONTACT_FAILED),
        FormKind::Newsletter => (NEWSLETTER_SENT, NEWSLETTER_FAILED),
    };
    let result = match submission.to_json() {
        Ok(body) => transport.post_json(FORM_ENDPOINT, &body).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => Outcome::Sent(sent),
        Err(e) => {
            log::error!("[forms] {:?} submission error: {}", kind, e);
            Outcome::Failed(failed)
        }
    }
}

/// Validate the contact fields, then relay. A rejected form never reaches
/// the transport; `sending` runs once the form is accepted, before the POST.
pub async fn submit_contact<T: Transport>(
    transport: &T,
    name: &str,
    email: &str,
    message: &str,
    sending: impl FnOnce(),
) -> Result<Outcome, FormError> {
    let submission = contact_submission(name, email, message)?;
    sending();
    Ok(relay(transport, FormKind::Contact, &submission).await)
}

/// Newsletter counterpart of [`submit_contact`].
pub async fn submit_newsletter<T: Transport>(
    transport: &T,
    email: &str,
    sending: impl FnOnce(),
) -> Result<Outcome, FormError> {
    let submission = newsletter_submission(email)?;
    sending();
    Ok(relay(transport, FormKind::Newsletter, &submission).await)
}
