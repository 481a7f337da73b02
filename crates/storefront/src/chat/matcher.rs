//! Keyword-scored intent matching.
//!
//! Scoring per intent, on the lower-cased and trimmed message:
//!
//! 1. +10 for every keyword the message contains
//! 2. +5 for every alias the message contains
//! 3. multiply by `priority / 10` when the intent declares a priority
//! 4. +20 when the message is exactly one of the intent's keywords
//!
//! Intents scoring zero are dropped. Ties keep table order.

use flagpole_core::Intent;
use serde::Serialize;
use tracing::debug;

use super::intents::{HUMAN_HANDOFF_TRIGGERS, INTENTS};

/// Points for each keyword found in the message.
pub const KEYWORD_POINTS: f64 = 10.0;
/// Points for each alias found in the message.
pub const ALIAS_POINTS: f64 = 5.0;
/// Flat bonus when the whole message equals a keyword.
pub const EXACT_MATCH_BONUS: f64 = 20.0;
/// Default number of candidates returned by [`match_multiple_intents`].
pub const DEFAULT_MATCH_LIMIT: usize = 3;

/// The outcome of scoring one intent against one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentMatch {
    pub intent: &'static Intent,
    pub score: f64,
    /// Matched keywords followed by matched aliases, in table order.
    pub matched_keywords: Vec<&'static str>,
}

/// Lower-case and trim a chat message.
#[must_use]
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Whether the message asks for a person rather than a scripted answer.
#[must_use]
pub fn needs_human(message: &str) -> bool {
    contains_handoff_trigger(&normalize(message))
}

fn contains_handoff_trigger(normalized: &str) -> bool {
    HUMAN_HANDOFF_TRIGGERS
        .iter()
        .any(|trigger| normalized.contains(trigger))
}

/// Best intent for a message from the built-in table.
///
/// Returns `None` when the message asks for a human or nothing matches; use
/// [`needs_human`] to tell the two apart.
#[must_use]
pub fn match_intent(message: &str) -> Option<IntentMatch> {
    match_intent_in(INTENTS, message)
}

/// Best intent for a message from `table`.
#[must_use]
pub fn match_intent_in(table: &'static [Intent], message: &str) -> Option<IntentMatch> {
    let normalized = normalize(message);

    if contains_handoff_trigger(&normalized) {
        debug!("Hand-off trigger found, skipping intent scoring");
        return None;
    }

    let mut best: Option<IntentMatch> = None;
    for intent in table {
        let Some(candidate) = score_intent(intent, &normalized) else {
            continue;
        };
        // Strictly greater so the earliest intent keeps a tie.
        if best.as_ref().is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    if let Some(found) = &best {
        debug!(intent = found.intent.name, score = found.score, "Matched intent");
    }
    best
}

/// Top `limit` intents for a message from the built-in table.
///
/// Unlike [`match_intent`] this never short-circuits on hand-off phrases.
#[must_use]
pub fn match_multiple_intents(message: &str, limit: usize) -> Vec<IntentMatch> {
    match_multiple_intents_in(INTENTS, message, limit)
}

/// Top `limit` intents for a message from `table`, highest score first.
#[must_use]
pub fn match_multiple_intents_in(
    table: &'static [Intent],
    message: &str,
    limit: usize,
) -> Vec<IntentMatch> {
    let normalized = normalize(message);

    let mut matches: Vec<IntentMatch> = table
        .iter()
        .filter_map(|intent| score_intent(intent, &normalized))
        .collect();

    // sort_by is stable, so equal scores stay in table order
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(limit);
    matches
}

/// Score one intent against an already-normalized message.
fn score_intent(intent: &'static Intent, normalized: &str) -> Option<IntentMatch> {
    let mut score = 0.0;
    let mut matched_keywords = Vec::new();

    for &keyword in intent.keywords {
        if normalized.contains(keyword) {
            score += KEYWORD_POINTS;
            matched_keywords.push(keyword);
        }
    }

    for &alias in intent.aliases {
        if normalized.contains(alias) {
            score += ALIAS_POINTS;
            matched_keywords.push(alias);
        }
    }

    if let Some(multiplier) = intent.priority_multiplier() {
        score *= multiplier;
    }

    if intent.keywords.iter().any(|&keyword| keyword == normalized) {
        score += EXACT_MATCH_BONUS;
    }

    (score > 0.0).then_some(IntentMatch {
        intent,
        score,
        matched_keywords,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use flagpole_core::IntentResponse;

    use super::*;

    const fn intent(
        name: &'static str,
        keywords: &'static [&'static str],
        aliases: &'static [&'static str],
        priority: Option<u32>,
    ) -> Intent {
        Intent {
            name,
            topic: name,
            keywords,
            aliases,
            priority,
            response: IntentResponse::Single("ok"),
            follow_up: &[],
            links: &[],
        }
    }

    static TABLE: &[Intent] = &[
        intent("alpha", &["apple", "apricot"], &["fruit"], None),
        intent("beta", &["banana"], &["fruit"], None),
        intent("gamma", &["apple"], &[], Some(20)),
        intent("delta", &["cherry"], &[], Some(5)),
        intent("epsilon", &["cherry"], &[], Some(5)),
    ];

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello THERE \n"), "hello there");
    }

    #[test]
    fn test_keyword_and_alias_points() {
        let found = match_multiple_intents_in(TABLE, "apricot fruit", 5);
        let alpha = found.iter().find(|m| m.intent.name == "alpha").expect("alpha");
        assert_eq!(alpha.score, 15.0);
        assert_eq!(alpha.matched_keywords, vec!["apricot", "fruit"]);

        let beta = found.iter().find(|m| m.intent.name == "beta").expect("beta");
        assert_eq!(beta.score, 5.0);
    }

    #[test]
    fn test_priority_scales_score() {
        // gamma: 10 * (20 / 10) = 20 beats alpha's unscaled 10
        let best = match_intent_in(TABLE, "an apple a day").expect("match");
        assert_eq!(best.intent.name, "gamma");
        assert_eq!(best.score, 20.0);
    }

    #[test]
    fn test_exact_match_bonus_added_after_priority() {
        // delta: 10 * 0.5 + 20
        let found = match_multiple_intents_in(TABLE, "Cherry", 5);
        assert_eq!(found[0].intent.name, "delta");
        assert_eq!(found[0].score, 25.0);
    }

    #[test]
    fn test_ties_keep_table_order() {
        let best = match_intent_in(TABLE, "cherry pie").expect("match");
        assert_eq!(best.intent.name, "delta");

        let all = match_multiple_intents_in(TABLE, "cherry pie", 5);
        let names: Vec<_> = all.iter().map(|m| m.intent.name).collect();
        assert_eq!(names, vec!["delta", "epsilon"]);
    }

    #[test]
    fn test_more_keywords_scores_higher() {
        let all = match_multiple_intents_in(TABLE, "apple apricot banana", 5);
        let alpha = all.iter().find(|m| m.intent.name == "alpha").expect("alpha");
        let beta = all.iter().find(|m| m.intent.name == "beta").expect("beta");
        assert!(alpha.score > beta.score);
    }

    #[test]
    fn test_no_overlap_returns_none() {
        assert!(match_intent_in(TABLE, "zucchini").is_none());
        assert!(match_multiple_intents_in(TABLE, "zucchini", 3).is_empty());
    }

    #[test]
    fn test_blank_input_matches_nothing() {
        assert!(match_intent_in(TABLE, "").is_none());
        assert!(match_intent_in(TABLE, "   ").is_none());
    }

    #[test]
    fn test_handoff_short_circuits_single_match_only() {
        assert!(match_intent_in(TABLE, "apple, but let me talk to a human").is_none());
        assert!(needs_human("Can a REPRESENTATIVE call me?"));

        let all = match_multiple_intents_in(TABLE, "apple, but let me talk to a human", 5);
        assert!(!all.is_empty());
    }

    #[test]
    fn test_limit_and_ordering() {
        let all = match_multiple_intents_in(TABLE, "apple apricot banana cherry fruit", 3);
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].score >= w[1].score));

        assert!(match_multiple_intents_in(TABLE, "apple", 0).is_empty());
    }
}
