use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::parser;

pub const DEFAULT_TITLE: &str = "Pitch me.";

pub const BUILTIN_QUESTIONS: &[&str] = &[
    "Who are your competitors?",
    "What is your product?",
    "What is your business model?",
    "What do customers say about your product?",
    "Who uses your product?",
    "What do customers use your product for?",
    "How do you get to $100 million in ARR?",
    "How do you differentiate from the incumbents? (OpenAI, Microsoft, HuggingFace, Co-pilot)",
    "How do you know people want this?",
    "How did your team get together?",
    "What is your unfair advantage?",
    "What do you understand about your business that others don't?",
    "What do you understand about your users?",
    "Why will you succeed?",
    "Why did you pick this idea to work on?",
    "What is the next step with the product evolution?",
    "Who needs what you're making?",
    "How do we know your team will stick together?",
    "What has surprised you about user behaviour?",
    "What is your distribution strategy?",
    "How will you get users?",
    "What problems/hurdles are you anticipating?",
    "Who would you hire or how would you add to your team?",
    "What domain expertise do you have?",
    "How will customers and/or users find out about you?",
    "Who are your competitors?",
    "What are the top things users want?",
    "Where else can the company grow into into?",
    "What's new about what you make?",
    "How did your team meet?",
    "What will you do if we don't fund you?",
    "Who might become competitors?",
    "Why did you choose this idea?",
    "What is your burn rate?",
    "Why will you succeed?",
    "How many users are paying?",
    "How does your product work in more detail?",
    "How are you meeting customers?",
    "What, exactly, makes you different from existing options?",
    "How long can you go before funding?",
    "How big an opportunity is there?",
    "What metrics do you track daily, weekly, and monthly?",
    "Have there been any substantial pivots in your business strategy? If so, why?",
    "How do you handle internal conflicts within the team?",
    "Describe your ideal customer.",
    "How do you handle the potential misuse of your AI technology?",
    "What keeps you up at night regarding your business?",
    "What's the equity split among the founders? How did you decide on that split?",
    "If there were one area where you could use external help or expertise, what would it be?",
];

/// Questions as loaded from a deck, before shuffling.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub title: Option<String>,
    pub questions: Vec<String>,
}

impl Deck {
    pub fn builtin() -> Self {
        Self {
            title: None,
            questions: BUILTIN_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// The session's question order. Fixed once built.
#[derive(Debug, Clone)]
pub struct QuestionList {
    title: String,
    questions: Vec<String>,
    seed: u64,
}

impl QuestionList {
    /// Fisher–Yates over the deck with a PRNG seeded exactly once.
    pub fn shuffled(deck: Deck, seed: u64) -> Self {
        let mut questions = deck.questions;
        let mut rng = StdRng::seed_from_u64(seed);
        questions.shuffle(&mut rng);
        Self {
            title: deck.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            questions,
            seed,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.questions.get(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(String::as_str)
    }
}

/// Reads a deck file, picking the format from the extension.
pub fn load_deck(path: &Path) -> Result<Deck> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let deck = match ext.as_str() {
        "md" | "markdown" => parser::parse_markdown_deck(&content),
        "yaml" | "yml" => parser::parse_yaml_deck(&content).map_err(|source| Error::Deck {
            path: path.to_path_buf(),
            source,
        })?,
        _ => parser::parse_text_deck(&content),
    };

    if deck.questions.is_empty() {
        return Err(Error::EmptyDeck(path.to_path_buf()));
    }
    Ok(deck)
}
