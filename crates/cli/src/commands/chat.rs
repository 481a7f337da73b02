//! Chat commands: run messages through the intent matcher offline.

use flagpole_storefront::chat::{self, INTENTS};
use flagpole_storefront::routes::chat::SuggestionView;
use serde::Serialize;

use super::print_json;

/// One row of `chat intents` output.
#[derive(Debug, Serialize)]
struct IntentSummary {
    name: &'static str,
    topic: &'static str,
    priority: Option<u32>,
    keywords: usize,
    aliases: usize,
    responses: usize,
}

/// Print the reply the widget would receive.
///
/// # Errors
///
/// Returns an error if the reply cannot be serialized.
pub fn ask(message: &str) -> Result<(), serde_json::Error> {
    let reply = chat::reply(message, &mut rand::rng());
    print_json(&reply)
}

/// Print up to `limit` candidate intents, best first.
///
/// # Errors
///
/// Returns an error if the ranking cannot be serialized.
pub fn top(message: &str, limit: usize) -> Result<(), serde_json::Error> {
    if chat::needs_human(message) {
        tracing::info!("Message would be handed to a person by the widget");
    }

    let ranked: Vec<SuggestionView> = chat::match_multiple_intents(message, limit)
        .into_iter()
        .map(SuggestionView::from)
        .collect();

    tracing::info!(matches = ranked.len(), "Ranked intents");
    print_json(&ranked)
}

/// Print a summary of every intent in table order.
///
/// # Errors
///
/// Returns an error if the table cannot be serialized.
pub fn intents() -> Result<(), serde_json::Error> {
    let table: Vec<IntentSummary> = INTENTS
        .iter()
        .map(|intent| IntentSummary {
            name: intent.name,
            topic: intent.topic,
            priority: intent.priority,
            keywords: intent.keywords.len(),
            aliases: intent.aliases.len(),
            responses: intent.response.options().len(),
        })
        .collect();

    print_json(&table)
}
