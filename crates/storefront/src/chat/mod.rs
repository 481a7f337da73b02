//! Flaggy, the scripted support chat.
//!
//! Flaggy answers common questions from a static intent table and hands the
//! conversation to a person when asked. There is no model or session state:
//! every message is matched on its own.
//!
//! # Example
//!
//! ```rust
//! use flagpole_storefront::chat::{self, ChatReply};
//!
//! let reply = chat::reply("my pole is stuck and won't twist", &mut rand::rng());
//! assert!(matches!(reply, ChatReply::Answer { intent: "troubleshooting_stuck_joint", .. }));
//!
//! let reply = chat::reply("let me talk to a human", &mut rand::rng());
//! assert!(matches!(reply, ChatReply::Escalate { .. }));
//! ```

pub mod intents;
pub mod matcher;
pub mod response;

pub use intents::INTENTS;
pub use matcher::{
    DEFAULT_MATCH_LIMIT, IntentMatch, match_intent, match_multiple_intents, needs_human,
    normalize,
};
pub use response::{get_random_response, random_response};

use flagpole_core::IntentLink;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use intents::{CONTACT_LINKS, DEFAULT_TOPICS, FALLBACK_MESSAGE, HANDOFF_MESSAGE};

/// What the chat widget should render for a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChatReply {
    /// A scripted answer from the intent table.
    #[serde(rename_all = "camelCase")]
    Answer {
        intent: &'static str,
        response: &'static str,
        score: f64,
        follow_up: &'static [&'static str],
        links: &'static [IntentLink],
        /// Topics of runner-up intents, best first.
        related: Vec<&'static str>,
    },
    /// The customer asked for a person.
    Escalate {
        message: &'static str,
        links: &'static [IntentLink],
    },
    /// Nothing matched; offer starting points.
    Fallback {
        message: &'static str,
        suggestions: &'static [&'static str],
    },
}

/// Build the reply for one chat message.
pub fn reply<R: Rng + ?Sized>(message: &str, rng: &mut R) -> ChatReply {
    if needs_human(message) {
        info!("Customer asked for a human, escalating");
        return ChatReply::Escalate {
            message: HANDOFF_MESSAGE,
            links: CONTACT_LINKS,
        };
    }

    let Some(best) = match_intent(message) else {
        info!("No intent matched, sending fallback");
        return ChatReply::Fallback {
            message: FALLBACK_MESSAGE,
            suggestions: DEFAULT_TOPICS,
        };
    };

    let related = match_multiple_intents(message, DEFAULT_MATCH_LIMIT + 1)
        .into_iter()
        .filter(|candidate| candidate.intent.name != best.intent.name)
        .take(DEFAULT_MATCH_LIMIT)
        .map(|candidate| candidate.intent.topic)
        .collect();

    info!(intent = best.intent.name, score = best.score, "Answering from intent");
    ChatReply::Answer {
        intent: best.intent.name,
        response: get_random_response(best.intent, rng),
        score: best.score,
        follow_up: best.intent.follow_up,
        links: best.intent.links,
        related,
    }
}
