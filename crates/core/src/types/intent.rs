//! Support chat intent records.
//!
//! An [`Intent`] is a named category of customer request: the substrings that
//! trigger it and the canned reply the chat widget shows. Intent tables are
//! compiled in as `'static` data, so every field borrows for `'static` and the
//! whole record is `Copy`.

use serde::Serialize;

/// Priority that leaves an intent's score unscaled.
///
/// A declared priority multiplies the raw score by `priority / NEUTRAL_PRIORITY`.
pub const NEUTRAL_PRIORITY: u32 = 10;

/// A scripted chat intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Unique identifier (e.g. `order_status`).
    pub name: &'static str,
    /// Short human-readable label used for quick-reply topic chips.
    pub topic: &'static str,
    /// Primary triggers. Lower-case; matched by substring containment.
    pub keywords: &'static [&'static str],
    /// Secondary triggers, weighted lower than keywords.
    pub aliases: &'static [&'static str],
    /// Score multiplier on a 0-10+ scale; `None` means neutral.
    pub priority: Option<u32>,
    /// Canned reply text.
    pub response: IntentResponse,
    /// Suggested next messages surfaced as quick replies.
    pub follow_up: &'static [&'static str],
    /// Calls-to-action.
    pub links: &'static [IntentLink],
}

impl Intent {
    /// Multiplier applied to the raw keyword/alias score, if any.
    #[must_use]
    pub fn priority_multiplier(&self) -> Option<f64> {
        self.priority
            .map(|priority| f64::from(priority) / f64::from(NEUTRAL_PRIORITY))
    }
}

/// The reply text of an intent: fixed, or one of several variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IntentResponse {
    /// Always reply with this text.
    Single(&'static str),
    /// Reply with one of these, chosen at random.
    Variants(&'static [&'static str]),
}

impl IntentResponse {
    /// Every string this response can produce.
    #[must_use]
    pub const fn options(&self) -> &[&'static str] {
        match self {
            Self::Single(text) => std::slice::from_ref(text),
            Self::Variants(variants) => variants,
        }
    }
}

/// A call-to-action link shown under a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntentLink {
    pub label: &'static str,
    pub url: &'static str,
}
