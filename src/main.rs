use std::time::Instant;

use clap::Parser;

use pitchme::cli::Cli;
use pitchme::config;
use pitchme::error::Result;
use pitchme::questions::{self, Deck, QuestionList};
use pitchme::state::AppState;
use pitchme::timer::{format_duration, ThreadTicks};
use pitchme::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = config::load_settings(&cli)?;

    // Resolve deck
    let mut deck = match &settings.questions {
        Some(path) => questions::load_deck(path)?,
        None => Deck::builtin(),
    };
    if deck.title.is_none() {
        deck.title = Some(settings.title.clone());
    }

    // Shuffle once for the whole session
    let seed = settings.seed.unwrap_or_else(rand::random);
    let list = QuestionList::shuffled(deck, seed);

    // Handle --list
    if cli.list {
        println!("{} (seed {})", list.title(), list.seed());
        for (i, q) in list.iter().enumerate() {
            println!("{:>3}. {}", i + 1, q);
        }
        return Ok(());
    }

    let (ticks, timer_rx) = ThreadTicks::channel();
    let state = AppState::new(list, &settings, Box::new(ticks), Instant::now());

    // Run TUI
    let state = tui::run_tui(state, timer_rx)?;

    let elapsed = chrono::Local::now().signed_duration_since(state.started_at);
    eprintln!(
        "Practiced {} of {} questions in {}. Replay this order with --seed {}",
        state.visited_count(),
        state.questions.len(),
        format_duration(elapsed.num_seconds()),
        state.questions.seed(),
    );

    Ok(())
}
