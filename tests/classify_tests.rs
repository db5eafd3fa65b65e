// tests for concern detection

use supportbot::{CRISIS_KEYWORDS, Concern, KEYWORDS, Session};

#[test]
fn test_no_keywords_is_general() {
    assert_eq!(Concern::detect("The weather is nice today"), vec![Concern::General]);
}

#[test]
fn test_empty_input_is_general() {
    assert_eq!(Concern::detect(""), vec![Concern::General]);
}

#[test]
fn test_single_category() {
    assert_eq!(Concern::detect("I feel hopeless"), vec![Concern::Depression]);
    assert_eq!(Concern::detect("I feel so lonely"), vec![Concern::Loneliness]);
    assert_eq!(
        Concern::detect("I keep having a nightmare"),
        vec![Concern::Trauma]
    );
}

#[test]
fn test_case_insensitive() {
    assert_eq!(Concern::detect("I AM STRESSED"), vec![Concern::Anxiety]);
}

#[test]
fn test_anxiety_and_anger_in_table_order() {
    let expected = vec![Concern::Anxiety, Concern::Anger];
    assert_eq!(Concern::detect("I'm so anxious and angry"), expected);
    // order comes from the table, not the text
    assert_eq!(Concern::detect("I'm angry and anxious"), expected);
}

#[test]
fn test_category_reported_once() {
    // three anxiety keywords, one tag
    let found = Concern::detect("nervous, worried, panic everywhere");
    assert_eq!(found, vec![Concern::Anxiety]);
}

#[test]
fn test_crisis_comes_first() {
    let found = Concern::detect("I'm so sad I want to kill myself");
    assert_eq!(found, vec![Concern::Crisis, Concern::Depression]);
}

#[test]
fn test_crisis_reported_once() {
    let found = Concern::detect("suicidal thoughts, I want to end it all, suicide");
    assert_eq!(found.iter().filter(|c| **c == Concern::Crisis).count(), 1);
}

#[test]
fn test_substring_matching_is_literal() {
    // "died" contains "die", so grief also trips the crisis check
    assert_eq!(
        Concern::detect("my dog died last week"),
        vec![Concern::Crisis, Concern::Grief]
    );
}

#[test]
fn test_session_classify_sets_crisis_flag() {
    let mut session = Session::seeded("SupportBot", 1);
    assert!(!session.crisis_detected());

    let found = session.classify("I want to kill myself");
    assert_eq!(found.first(), Some(&Concern::Crisis));
    assert!(session.crisis_detected());

    // never cleared
    session.classify("actually I feel fine");
    assert!(session.crisis_detected());
}

#[test]
fn test_session_classify_without_crisis_leaves_flag() {
    let mut session = Session::seeded("SupportBot", 1);
    session.classify("I am furious");
    assert!(!session.crisis_detected());
}

#[test]
fn test_classify_is_repeatable() {
    let mut session = Session::seeded("SupportBot", 1);
    let text = "stressed, lonely and mourning";
    let first = session.classify(text);
    let second = session.classify(text);
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![Concern::Anxiety, Concern::Loneliness, Concern::Grief]
    );
}

#[test]
fn test_keyword_tables() {
    assert!(CRISIS_KEYWORDS.contains(&"kill myself"));
    assert_eq!(Concern::Crisis.keywords(), CRISIS_KEYWORDS);
    assert!(Concern::General.keywords().is_empty());
    assert!(Concern::Anger.keywords().contains(&"furious"));

    let order: Vec<Concern> = KEYWORDS.iter().map(|(c, _)| *c).collect();
    assert_eq!(
        order,
        vec![
            Concern::Anxiety,
            Concern::Depression,
            Concern::Anger,
            Concern::Loneliness,
            Concern::Grief,
            Concern::Trauma,
        ]
    );
}

#[test]
fn test_every_keyword_detects_its_category() {
    for (concern, keywords) in KEYWORDS {
        for kw in *keywords {
            assert!(
                Concern::detect(kw).contains(concern),
                "{kw} should detect {concern}"
            );
        }
    }
}

#[test]
fn test_resource_pools() {
    assert!(Concern::Crisis.resources().is_none());
    for concern in [
        Concern::General,
        Concern::Anxiety,
        Concern::Depression,
        Concern::Anger,
        Concern::Loneliness,
        Concern::Grief,
        Concern::Trauma,
    ] {
        assert!(!concern.resources().unwrap().is_empty());
    }
}
