use std::collections::HashSet;
use std::path::Path;

use pitchme::error::Error;
use pitchme::parser::{parse_markdown_deck, parse_text_deck, parse_yaml_deck};
use pitchme::questions::{load_deck, Deck, QuestionList, BUILTIN_QUESTIONS, DEFAULT_TITLE};

#[test]
fn test_markdown_deck() {
    let deck = load_deck(Path::new("fixtures/deck.md")).unwrap();
    assert_eq!(deck.title.as_deref(), Some("Demo Day Drill"));
    assert_eq!(
        deck.questions,
        vec![
            "What is your product?",
            "Who are your competitors?",
            "Nested items count too",
            "How do you get to $100 million in ARR?",
            "Why will you succeed?",
            "What is your burn rate?",
        ]
    );
}

#[test]
fn test_yaml_deck_with_title() {
    let deck = load_deck(Path::new("fixtures/deck.yaml")).unwrap();
    assert_eq!(deck.title.as_deref(), Some("Investor Q&A"));
    assert_eq!(
        deck.questions,
        vec![
            "What is your business model?",
            "How did your team meet?",
            "What keeps you up at night?",
        ]
    );
}

#[test]
fn test_yaml_deck_plain_list() {
    let deck = parse_yaml_deck("- One?\n- Two?\n").unwrap();
    assert_eq!(deck.title, None);
    assert_eq!(deck.questions, vec!["One?", "Two?"]);
}

#[test]
fn test_yaml_deck_rejects_garbage() {
    assert!(parse_yaml_deck("questions: 12").is_err());
}

#[test]
fn test_text_deck() {
    let deck = load_deck(Path::new("fixtures/deck.txt")).unwrap();
    assert_eq!(deck.title, None);
    assert_eq!(
        deck.questions,
        vec![
            "What is your unfair advantage?",
            "How will you get users?",
            "Describe your ideal customer.",
        ]
    );
    assert_eq!(parse_text_deck("").questions.len(), 0);
}

#[test]
fn test_empty_deck_is_an_error() {
    match load_deck(Path::new("fixtures/empty.md")) {
        Err(Error::EmptyDeck(path)) => assert!(path.ends_with("empty.md")),
        other => panic!("Expected EmptyDeck, got {:?}", other),
    }
    assert!(parse_markdown_deck("").questions.is_empty());
}

#[test]
fn test_missing_deck_file() {
    match load_deck(Path::new("fixtures/does-not-exist.md")) {
        Err(Error::Read { .. }) => {}
        other => panic!("Expected Read error, got {:?}", other),
    }
}

#[test]
fn test_shuffle_is_seeded_permutation() {
    let deck = Deck::builtin();
    let a = QuestionList::shuffled(deck.clone(), 1234);
    let b = QuestionList::shuffled(deck.clone(), 1234);
    let c = QuestionList::shuffled(deck.clone(), 4321);

    let order_a: Vec<&str> = a.iter().collect();
    let order_b: Vec<&str> = b.iter().collect();
    let order_c: Vec<&str> = c.iter().collect();
    assert_eq!(order_a, order_b);
    assert_ne!(order_a, order_c);

    assert_eq!(a.len(), BUILTIN_QUESTIONS.len());
    let mut sorted_a = order_a.clone();
    let mut sorted_src: Vec<&str> = BUILTIN_QUESTIONS.to_vec();
    sorted_a.sort();
    sorted_src.sort();
    assert_eq!(sorted_a, sorted_src);
    assert_eq!(a.seed(), 1234);
}

#[test]
fn test_builtin_deck() {
    let list = QuestionList::shuffled(Deck::builtin(), 0);
    assert_eq!(list.title(), DEFAULT_TITLE);
    assert!(list.len() >= 48);
    assert!(list.iter().all(|q| !q.trim().is_empty()));
    let unique: HashSet<&str> = list.iter().collect();
    assert!(unique.len() > 40);
}
