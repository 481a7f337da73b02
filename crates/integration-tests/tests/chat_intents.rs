//! Intent matching against the shipped table.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use flagpole_core::IntentResponse;
use flagpole_storefront::chat::{
    self, ChatReply, INTENTS, get_random_response, match_intent, match_multiple_intents,
    needs_human,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================================
// Example conversations
// ============================================================================

#[test]
fn test_greeting_without_exact_bonus() {
    let found = match_intent("hello there").unwrap();
    assert_eq!(found.intent.name, "greeting");
    assert!((found.score - 10.0).abs() < f64::EPSILON);
    assert_eq!(found.matched_keywords, vec!["hello"]);
}

#[test]
fn test_stuck_joint() {
    let found = match_intent("my pole is stuck and won't twist").unwrap();
    assert_eq!(found.intent.name, "troubleshooting_stuck_joint");
    assert!((found.score - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_human_request_beats_order_keyword() {
    let message = "I need to talk to a human about my order";
    assert!(needs_human(message));
    assert!(match_intent(message).is_none());

    // Ranking ignores the hand-off check
    let ranked = match_multiple_intents(message, 3);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].intent.name, "order_status");
}

#[test]
fn test_gibberish_has_no_match() {
    assert!(match_intent("asdfqwerty").is_none());
    assert!(match_multiple_intents("asdfqwerty", 3).is_empty());
}

#[test]
fn test_exact_keyword_bonus() {
    let found = match_intent("  SHIPPING ").unwrap();
    assert_eq!(found.intent.name, "shipping");
    assert!((found.score - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_low_priority_is_scaled_down() {
    // thanks carries priority 5: (10 * 0.5) + 20
    let found = match_intent("thanks").unwrap();
    assert_eq!(found.intent.name, "thanks");
    assert!((found.score - 25.0).abs() < f64::EPSILON);
}

// ============================================================================
// Properties over the whole table
// ============================================================================

#[test]
fn test_every_trigger_escalates() {
    for phrase in [
        "can I talk to someone please",
        "get me a REAL PERSON",
        "I want customer service about my order tracking",
        "just call me",
    ] {
        assert!(match_intent(phrase).is_none(), "{phrase} should escalate");
    }
}

#[test]
fn test_exact_keyword_selects_its_intent() {
    let mut mismatches = Vec::new();
    for intent in INTENTS {
        // Padded keywords such as " vs " cannot equal a trimmed message
        for &keyword in intent.keywords.iter().filter(|k| k.trim() == **k) {
            let found = match_intent(keyword).unwrap();
            if found.intent.name != intent.name {
                mismatches.push((keyword, intent.name, found.intent.name));
            }
        }
    }
    assert!(mismatches.is_empty(), "keyword, owner, winner: {mismatches:?}");
}

#[test]
fn test_exact_keyword_earns_bonus() {
    // "tracking" also contains "track": (10 + 10) + 20
    let found = match_intent("tracking").unwrap();
    assert_eq!(found.intent.name, "order_status");
    assert!((found.score - 40.0).abs() < f64::EPSILON);
}

#[test]
fn test_more_keywords_score_higher() {
    let single = match_intent("my flag wraps").unwrap();
    let double = match_intent("my flag wraps, wrapping every day").unwrap();
    assert_eq!(single.intent.name, double.intent.name);
    assert!(double.score > single.score);
}

#[test]
fn test_ranking_respects_limit_and_order() {
    let message = "my flag keeps wrapping in the wind, what size flag and how tall a pole";
    for limit in 0..=5 {
        let ranked = match_multiple_intents(message, limit);
        assert!(ranked.len() <= limit);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(ranked.iter().all(|m| m.score > 0.0));
    }
}

#[test]
fn test_random_response_comes_from_table() {
    let mut rng = StdRng::seed_from_u64(42);
    for intent in INTENTS {
        for _ in 0..8 {
            let text = get_random_response(intent, &mut rng);
            assert!(intent.response.options().contains(&text));
        }
        if let IntentResponse::Single(text) = intent.response {
            assert_eq!(get_random_response(intent, &mut rng), text);
        }
    }
}

// ============================================================================
// Widget replies
// ============================================================================

#[test]
fn test_reply_kinds() {
    let mut rng = StdRng::seed_from_u64(7);

    assert!(matches!(
        chat::reply("tracking", &mut rng),
        ChatReply::Answer {
            intent: "order_status",
            ..
        }
    ));
    assert!(matches!(
        chat::reply("let me speak to someone", &mut rng),
        ChatReply::Escalate { .. }
    ));
    assert!(matches!(
        chat::reply("asdfqwerty", &mut rng),
        ChatReply::Fallback { .. }
    ));
}
