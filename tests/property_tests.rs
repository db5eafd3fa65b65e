// property tests for detection and composition

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use supportbot::{CRISIS_OPENING, Concern, FOLLOW_UPS, SUPPORTIVE, compose};

fn concern() -> impl Strategy<Value = Concern> {
    prop_oneof![
        Just(Concern::Crisis),
        Just(Concern::Anxiety),
        Just(Concern::Depression),
        Just(Concern::Anger),
        Just(Concern::Loneliness),
        Just(Concern::Grief),
        Just(Concern::Trauma),
        Just(Concern::General),
    ]
}

proptest! {
    #[test]
    fn detect_is_never_empty(text in ".*") {
        let found = Concern::detect(&text);
        prop_assert!(!found.is_empty());
    }

    #[test]
    fn detect_has_no_duplicates(text in ".*") {
        let found = Concern::detect(&text);
        for (i, c) in found.iter().enumerate() {
            prop_assert!(!found[i + 1..].contains(c));
        }
    }

    #[test]
    fn general_only_alone(text in ".*") {
        let found = Concern::detect(&text);
        if found.contains(&Concern::General) {
            prop_assert_eq!(found, vec![Concern::General]);
        }
    }

    #[test]
    fn crisis_phrase_always_first(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
        let text = format!("{prefix} kill myself {suffix}");
        let found = Concern::detect(&text);
        prop_assert_eq!(found[0], Concern::Crisis);
    }

    #[test]
    fn detect_ignores_ascii_case(text in "[a-zA-Z ]{0,40}") {
        prop_assert_eq!(Concern::detect(&text), Concern::detect(&text.to_uppercase()));
    }

    #[test]
    fn compose_shape(concerns in prop::collection::vec(concern(), 1..5), seed in any::<u64>()) {
        let reply = compose(&concerns, &mut StdRng::seed_from_u64(seed));
        let parts: Vec<&str> = reply.split("\n\n").collect();

        let crisis = concerns.contains(&Concern::Crisis);
        let offset = if crisis { 3 } else { 0 };

        prop_assert_eq!(reply.matches(CRISIS_OPENING).count(), usize::from(crisis));
        prop_assert!(SUPPORTIVE.contains(&parts[offset]));
        prop_assert!(FOLLOW_UPS.contains(parts.last().unwrap()));

        // supportive + follow up + one to two resources
        let resources = parts.len() - offset - 2;
        prop_assert!((1..=2).contains(&resources));
    }
}
