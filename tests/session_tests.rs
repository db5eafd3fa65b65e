// tests for whole conversation turns

use supportbot::{
    CRISIS_OPENING, CRISIS_REMINDER, Concern, FAREWELLS, ReplyKind, SUPPORTIVE, Session, Speaker,
    wants_exit,
};

fn session() -> Session {
    Session::seeded("SupportBot", 1234)
}

#[test]
fn test_greeting_uses_bot_name() {
    let mut s = Session::seeded("Juniper", 3);
    let greeting = s.greeting();
    assert!(greeting.contains("Juniper"));
    assert!(!greeting.contains("{name}"));
    // greetings aren't part of the conversation record
    assert!(s.transcript().is_empty());
}

#[test]
fn test_name_capture() {
    let mut s = session();
    let reply = s.respond("Hi, my name is Alex");

    assert_eq!(reply.kind, ReplyKind::NameAck);
    assert_eq!(
        reply.text,
        "Nice to meet you, Alex. How are you feeling today?"
    );
    assert!(reply.concerns.is_empty());
    assert_eq!(s.user_name(), Some("Alex"));
}

#[test]
fn test_name_capture_capitalizes() {
    let mut s = session();
    s.respond("MY NAME IS jordan");
    assert_eq!(s.user_name(), Some("Jordan"));
}

#[test]
fn test_name_capture_only_once() {
    let mut s = session();
    s.respond("my name is Alex");

    let reply = s.respond("my name is Sam and I feel sad");
    assert_eq!(reply.kind, ReplyKind::Support);
    assert_eq!(reply.concerns, vec![Concern::Depression]);
    assert_eq!(s.user_name(), Some("Alex"));
}

#[test]
fn test_name_capture_on_a_later_turn() {
    let mut s = session();
    s.respond("I feel anxious");
    let reply = s.respond("by the way my name is Robin");
    assert_eq!(reply.kind, ReplyKind::NameAck);
    assert_eq!(s.user_name(), Some("Robin"));
}

#[test]
fn test_exit_returns_farewell() {
    let mut s = session();
    let reply = s.respond("goodbye");

    assert!(reply.is_farewell());
    assert!(FAREWELLS.contains(&reply.text.as_str()));

    let last = s.transcript().entries().last().unwrap();
    assert_eq!(last.speaker, Speaker::Bot);
    assert_eq!(last.message, reply.text);
}

#[test]
fn test_exit_skips_classification() {
    let mut s = session();
    let reply = s.respond("bye, I want to kill myself");

    assert!(reply.is_farewell());
    assert!(reply.concerns.is_empty());
    assert!(!s.crisis_detected());
}

#[test]
fn test_exit_beats_name_capture() {
    let mut s = session();
    let reply = s.respond("my name is Alex, I have to stop now");
    assert!(reply.is_farewell());
    assert_eq!(s.user_name(), None);
}

#[test]
fn test_exit_keywords_match_substrings() {
    assert!(wants_exit("QUIT"));
    assert!(wants_exit("see you at the weekend"));
    assert!(!wants_exit("I feel anxious"));
}

#[test]
fn test_crisis_turn() {
    let mut s = session();
    let reply = s.respond("I want to kill myself");

    assert_eq!(reply.kind, ReplyKind::Support);
    assert_eq!(reply.concerns.first(), Some(&Concern::Crisis));
    assert!(reply.text.starts_with(CRISIS_OPENING));
    assert!(s.crisis_detected());
    assert_eq!(s.crisis_reminder(), Some(CRISIS_REMINDER));
}

#[test]
fn test_crisis_flag_sticks_but_block_does_not() {
    let mut s = session();
    s.respond("I want to kill myself");

    let reply = s.respond("I feel a bit better today");
    assert_eq!(reply.concerns, vec![Concern::General]);
    assert!(!reply.text.contains(CRISIS_OPENING));
    assert!(s.crisis_detected());
    assert!(s.crisis_reminder().is_some());
}

#[test]
fn test_no_reminder_without_crisis() {
    let mut s = session();
    s.respond("I feel anxious");
    assert!(s.crisis_reminder().is_none());
}

#[test]
fn test_no_personalization_without_name() {
    let mut s = session();
    for _ in 0..50 {
        let reply = s.respond("I feel anxious");
        assert!(SUPPORTIVE.iter().any(|line| reply.text.starts_with(line)));
    }
}

#[test]
fn test_personalization_sometimes_uses_name() {
    let mut s = session();
    s.respond("my name is Alex");

    let mut named = 0;
    let turns = 200;
    for _ in 0..turns {
        let reply = s.respond("I feel anxious");
        if reply.text.starts_with("Alex, ") {
            named += 1;
            let rest = &reply.text["Alex, ".len()..];
            assert!(SUPPORTIVE.iter().any(|line| rest.starts_with(line)));
        }
    }

    assert!(named > 0);
    assert!(named < turns);
}

#[test]
fn test_transcript_records_both_sides() {
    let mut s = session();
    s.respond("my name is Alex");
    s.respond("I feel lonely");
    s.respond("goodbye");

    let entries = s.transcript().entries();
    assert_eq!(entries.len(), 6);

    let speakers: Vec<Speaker> = entries.iter().map(|e| e.speaker).collect();
    assert_eq!(
        speakers,
        vec![
            Speaker::User,
            Speaker::Bot,
            Speaker::User,
            Speaker::Bot,
            Speaker::User,
            Speaker::Bot,
        ]
    );
    assert_eq!(entries[0].message, "my name is Alex");
    assert_eq!(entries[2].message, "I feel lonely");
}

#[test]
fn test_same_seed_same_conversation() {
    let inputs = [
        "my name is Alex",
        "I'm stressed and angry",
        "I want to kill myself",
        "nothing else",
    ];

    let mut a = Session::seeded("SupportBot", 99);
    let mut b = Session::seeded("SupportBot", 99);

    for input in inputs {
        assert_eq!(a.respond(input).text, b.respond(input).text);
    }
}

#[test]
fn test_sessions_are_independent() {
    let mut a = session();
    let mut b = session();

    a.respond("I want to kill myself");
    a.respond("my name is Alex");
    b.respond("hello");

    assert!(a.crisis_detected());
    assert!(!b.crisis_detected());
    assert_eq!(b.user_name(), None);
    assert_eq!(b.transcript().len(), 2);
}
