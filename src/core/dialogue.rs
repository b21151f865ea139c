use smallvec::SmallVec;

// Scripted assistant ("Astro"). Replies come from an ordered rule table;
// the first matching rule wins and the fallback always answers.

pub type QuickReplies = SmallVec<[&'static str; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotReply {
    pub intent: Intent,
    pub text: String,
    pub quick_replies: QuickReplies,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    /// Any `<digit>h` substring. Also fires on slot picks such as
    /// "Demain 14h"; kept as-is.
    Hours,
    ManualEntry,
    Email,
    Reporting,
    Coordination,
    Booking,
    EmailCaptured,
    Pricing,
    Fallback,
}

#[derive(Clone, Copy, Debug)]
pub enum Matcher {
    /// Any of the needles is a substring of the lower-cased message.
    Contains(&'static [&'static str]),
    /// A decimal digit immediately followed by `h`.
    DigitThenH,
}

impl Matcher {
    pub fn matches(&self, lower: &str) -> bool {
        match self {
            Matcher::Contains(needles) => needles.iter().any(|n| lower.contains(n)),
            Matcher::DigitThenH => has_digit_then_h(lower),
        }
    }
}

#[inline]
pub fn has_digit_then_h(s: &str) -> bool {
    s.as_bytes()
        .windows(2)
        .any(|w| w[0].is_ascii_digit() && w[1] == b'h')
}

pub struct Rule {
    pub intent: Intent,
    pub matcher: Matcher,
}

/// Evaluation order. The hours check runs first so that a message quoting a
/// duration ("J'ai 15h de saisie") is answered with the audit offer. It
/// also outranks the email, reporting and coordination keywords.
pub const RULES: &[Rule] = &[
    Rule {
        intent: Intent::Hours,
        matcher: Matcher::DigitThenH,
    },
    Rule {
        intent: Intent::ManualEntry,
        matcher: Matcher::Contains(&["saisie", "manuel"]),
    },
    Rule {
        intent: Intent::Email,
        matcher: Matcher::Contains(&["email"]),
    },
    Rule {
        intent: Intent::Reporting,
        matcher: Matcher::Contains(&["reporting", "rapport"]),
    },
    Rule {
        intent: Intent::Coordination,
        matcher: Matcher::Contains(&["coordination", "équipe"]),
    },
    Rule {
        intent: Intent::Booking,
        matcher: Matcher::Contains(&["demain", "vendredi"]),
    },
    Rule {
        intent: Intent::EmailCaptured,
        matcher: Matcher::Contains(&["@"]),
    },
    Rule {
        intent: Intent::Pricing,
        matcher: Matcher::Contains(&["prix", "coût", "combien"]),
    },
];

/// First matching intent for a raw user message.
pub fn classify(message: &str) -> Intent {
    classify_lower(&message.to_lowercase())
}

fn classify_lower(lower: &str) -> Intent {
    RULES
        .iter()
        .find(|r| r.matcher.matches(lower))
        .map(|r| r.intent)
        .unwrap_or(Intent::Fallback)
}

fn quick(items: &[&'static str]) -> QuickReplies {
    items.iter().copied().collect()
}

/// Reply copy for an intent. `lower` is the lower-cased user message; only
/// the hours branch echoes it.
pub fn compose(intent: Intent, lower: &str) -> BotReply {
    let (text, replies): (String, &[&'static str]) = match intent {
        Intent::Greeting => (
            "👋 Salut ! Je suis Astro, l'assistant HAIR.\n\nJe vais t'aider à identifier les automatisations qui libéreront ton équipe.\n\nQuelle est ta plus grosse perte de temps actuellement ?".into(),
            &["Saisie manuelle", "Emails répétitifs", "Reporting", "Coordination équipe"],
        ),
        Intent::Hours => (
            format!(
                "💡 Ok, donc environ {lower} par semaine.\n\nSi on automatise 80% de ça, tu gagnes un temps considérable.\n\nJe te propose un audit gratuit de 30 min pour cartographier tes workflows et identifier les quick wins.\n\nJ'ai un créneau demain à 14h ou vendredi à 10h. Ça te va ?"
            ),
            &["Demain 14h", "Vendredi 10h", "Autre créneau"],
        ),
        Intent::ManualEntry => (
            "🎯 Je vois. La saisie manuelle, c'est un classique.\n\nCombien d'heures par semaine ton équipe passe-t-elle sur de la saisie de données ?".into(),
            &["1-5h", "5-10h", "10-20h", "20h+"],
        ),
        Intent::Email => (
            "📧 Les emails répétitifs... Je comprends.\n\nOn peut automatiser les réponses types, les follow-ups, et même la qualification.\n\nTu utilises quel outil email principal ?".into(),
            &["Gmail", "Outlook", "Autre"],
        ),
        Intent::Reporting => (
            "📊 Le reporting manuel, ça prend du temps !\n\nOn peut créer des dashboards automatiques qui se mettent à jour en temps réel.\n\nD'où viennent tes données actuellement ?".into(),
            &["CRM", "Excel/Sheets", "Analytics", "Plusieurs sources"],
        ),
        Intent::Coordination => (
            "👥 La coordination d'équipe peut être optimisée.\n\nOn peut automatiser les notifications, les assignations, et les suivis.\n\nQuel outil utilises-tu pour gérer ton équipe ?".into(),
            &["Slack", "Teams", "Asana/Trello", "Autre"],
        ),
        Intent::Booking => (
            "🚀 Parfait ! Pour confirmer ton audit, j'ai besoin de ton email.\n\nTu recevras :\n✓ Confirmation avec lien visio\n✓ Checklist pré-audit (5 min)\n✓ Mes coordonnées directes\n\n📧 Ton email ?".into(),
            &[],
        ),
        Intent::EmailCaptured => (
            "🎉 Mission acceptée !\n\nTu vas recevoir un email dans 2 minutes avec toutes les infos.\n\nEn attendant, si tu as des questions, je reste là. Sinon à très bientôt ! 🌟".into(),
            &[],
        ),
        Intent::Pricing => (
            "💰 Bonne question ! Ça dépend de la complexité.\n\nPour te donner une idée :\n\n• Simple automation (1-2 workflows) : 2000-4000€\n• Pack workflows (3-5 automations) : 5000-8000€\n• Solution complète : 10 000-20 000€\n\nMais chaque projet est différent. On fait toujours un audit gratuit d'abord pour estimer précisément le gain et le coût.\n\nTu veux qu'on regarde ton cas en 30 min ?".into(),
            &["Oui, je book", "Pas maintenant"],
        ),
        Intent::Fallback => (
            "🤔 Je comprends.\n\nPour mieux t'aider, dis-moi :\n\nQuel est ton principal défi d'automatisation ?".into(),
            &["Gagner du temps", "Réduire les erreurs", "Améliorer le suivi", "Autre"],
        ),
    };
    BotReply {
        intent,
        text,
        quick_replies: quick(replies),
    }
}

/// Page-lifetime conversation state. The log is append-only.
#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    open: bool,
    log: Vec<ChatMessage>,
    email: Option<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn log(&self) -> &[ChatMessage] {
        &self.log
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Flip open/closed. Opening with an empty log yields the greeting,
    /// already appended to the log.
    pub fn toggle(&mut self) -> Option<BotReply> {
        self.open = !self.open;
        if self.open && self.log.is_empty() {
            let greeting = compose(Intent::Greeting, "");
            self.push(Role::Bot, greeting.text.clone());
            return Some(greeting);
        }
        None
    }

    /// Record a user message. Returns the trimmed text, or `None` for blank
    /// input which is ignored.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.push(Role::User, text.to_string());
        Some(text.to_string())
    }

    /// Produce and record the bot answer to `message`.
    pub fn respond(&mut self, message: &str) -> BotReply {
        let lower = message.to_lowercase();
        let intent = classify_lower(&lower);
        if intent == Intent::EmailCaptured {
            self.email = Some(message.to_string());
        }
        let reply = compose(intent, &lower);
        self.push(Role::Bot, reply.text.clone());
        reply
    }

    fn push(&mut self, role: Role, content: String) {
        self.log.push(ChatMessage { role, content });
    }
}
