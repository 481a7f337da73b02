//! Reply text selection.

use flagpole_core::{Intent, IntentResponse};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick the reply text for an intent using `rng`.
///
/// Variant lists are sampled uniformly; a single response is returned as is.
pub fn get_random_response<R: Rng + ?Sized>(intent: &Intent, rng: &mut R) -> &'static str {
    match intent.response {
        IntentResponse::Single(text) => text,
        IntentResponse::Variants(variants) => variants.choose(rng).copied().unwrap_or_default(),
    }
}

/// Pick the reply text for an intent using the thread-local RNG.
#[must_use]
pub fn random_response(intent: &Intent) -> &'static str {
    get_random_response(intent, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const VARIANTS: Intent = Intent {
        name: "variants",
        topic: "Variants",
        keywords: &["x"],
        aliases: &[],
        priority: None,
        response: IntentResponse::Variants(&["one", "two", "three"]),
        follow_up: &[],
        links: &[],
    };

    const SINGLE: Intent = Intent {
        response: IntentResponse::Single("only"),
        ..VARIANTS
    };

    #[test]
    fn test_single_response_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(get_random_response(&SINGLE, &mut rng), "only");
        assert_eq!(random_response(&SINGLE), "only");
    }

    #[test]
    fn test_variant_is_always_declared() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let text = get_random_response(&VARIANTS, &mut rng);
            assert!(["one", "two", "three"].contains(&text));
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);
        let a: Vec<_> = (0..10)
            .map(|_| get_random_response(&VARIANTS, &mut first))
            .collect();
        let b: Vec<_> = (0..10)
            .map(|_| get_random_response(&VARIANTS, &mut second))
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_variant_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(get_random_response(&VARIANTS, &mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_empty_variants_yield_empty_text() {
        let empty = Intent {
            response: IntentResponse::Variants(&[]),
            ..VARIANTS
        };
        assert_eq!(random_response(&empty), "");
    }
}
