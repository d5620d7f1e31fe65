use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Deserialize;

use crate::questions::Deck;

/// Every list item is a question; the first H1 names the deck.
pub fn parse_markdown_deck(content: &str) -> Deck {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut title: Option<String> = None;
    let mut questions: Vec<String> = Vec::new();

    let mut in_h1 = false;
    let mut h1_text = String::new();
    // Nested lists: each open item collects its own text
    let mut item_stack: Vec<String> = Vec::new();

    for event in Parser::new_ext(content, opts) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => {
                in_h1 = true;
                h1_text.clear();
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                in_h1 = false;
                if title.is_none() && !h1_text.trim().is_empty() {
                    title = Some(h1_text.trim().to_string());
                }
            }
            Event::Start(Tag::Item) => {
                item_stack.push(String::new());
            }
            Event::End(TagEnd::Item) => {
                if let Some(text) = item_stack.pop() {
                    push_question(&mut questions, &text);
                }
            }
            Event::Start(Tag::List(_)) => {
                // A nested list ends the parent's own text
                if let Some(parent) = item_stack.last_mut() {
                    let text = std::mem::take(parent);
                    push_question(&mut questions, &text);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if in_h1 {
                    h1_text.push_str(&text);
                } else if let Some(item) = item_stack.last_mut() {
                    item.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(item) = item_stack.last_mut() {
                    item.push(' ');
                }
            }
            _ => {}
        }
    }

    Deck { title, questions }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YamlDeck {
    List(Vec<String>),
    Titled {
        title: Option<String>,
        questions: Vec<String>,
    },
}

pub fn parse_yaml_deck(content: &str) -> Result<Deck, serde_yaml::Error> {
    let raw: YamlDeck = serde_yaml::from_str(content)?;
    let (title, raw_questions) = match raw {
        YamlDeck::List(questions) => (None, questions),
        YamlDeck::Titled { title, questions } => (title, questions),
    };

    let mut questions = Vec::new();
    for q in &raw_questions {
        push_question(&mut questions, q);
    }
    Ok(Deck {
        title: title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
        questions,
    })
}

/// One question per line; `#` starts a comment line.
pub fn parse_text_deck(content: &str) -> Deck {
    let mut questions = Vec::new();
    for line in content.lines() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        push_question(&mut questions, line);
    }
    Deck {
        title: None,
        questions,
    }
}

fn push_question(questions: &mut Vec<String>, text: &str) {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        questions.push(collapsed);
    }
}
