#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use pitchme::config::Settings;
use pitchme::questions::{Deck, QuestionList};
use pitchme::state::AppState;
use pitchme::timer::{TickSource, Timer};

/// Tick source that never fires on its own; records every cancel flag it was given.
#[derive(Clone, Default)]
pub struct ManualTicks {
    pub started: Rc<RefCell<Vec<(u64, Arc<AtomicBool>)>>>,
}

impl ManualTicks {
    pub fn live_count(&self) -> usize {
        self.started
            .borrow()
            .iter()
            .filter(|(_, flag)| !flag.load(Ordering::SeqCst))
            .count()
    }

    pub fn start_count(&self) -> usize {
        self.started.borrow().len()
    }
}

impl TickSource for ManualTicks {
    fn start(&mut self, _interval: Duration, generation: u64, cancel: Arc<AtomicBool>) {
        self.started.borrow_mut().push((generation, cancel));
    }
}

pub fn manual_timer(max_time: f64, now: Instant) -> (Timer, ManualTicks) {
    let ticks = ManualTicks::default();
    let timer = Timer::new(
        max_time,
        Duration::from_millis(100),
        Box::new(ticks.clone()),
        now,
    );
    (timer, ticks)
}

pub fn numbered_deck(n: usize) -> Deck {
    Deck {
        title: Some("Test deck".to_string()),
        questions: (1..=n).map(|i| format!("Question {}?", i)).collect(),
    }
}

pub fn app_with(n: usize, now: Instant) -> (AppState, ManualTicks) {
    let ticks = ManualTicks::default();
    let list = QuestionList::shuffled(numbered_deck(n), 7);
    let state = AppState::new(list, &Settings::default(), Box::new(ticks.clone()), now);
    (state, ticks)
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
