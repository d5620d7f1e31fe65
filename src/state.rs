use std::time::Instant;

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::cursor::Cursor;
use crate::input::Action;
use crate::questions::QuestionList;
use crate::timer::{TickSource, Timer, TimerPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Help,
}

pub struct AppState {
    pub questions: QuestionList,
    pub cursor: Cursor,
    pub timer: Timer,
    pub visited: Vec<bool>,
    pub dialog_stack: Vec<Dialog>,
    pub expired_message: String,
    pub started_at: DateTime<Local>,
    pub should_quit: bool,
}

impl AppState {
    /// Builds the session and starts the countdown on the first question.
    pub fn new(
        questions: QuestionList,
        settings: &Settings,
        source: Box<dyn TickSource>,
        now: Instant,
    ) -> Self {
        let len = questions.len();
        let interval = std::time::Duration::from_millis(settings.tick_ms);
        let mut state = Self {
            questions,
            cursor: Cursor::new(len),
            timer: Timer::new(settings.max_time, interval, source, now),
            visited: vec![false; len],
            dialog_stack: Vec::new(),
            expired_message: settings.expired_message.clone(),
            started_at: Local::now(),
            should_quit: false,
        };
        state.mark_visited();
        state.timer.start(now);
        state
    }

    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.cursor.index())
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|v| **v).count()
    }

    pub fn is_visited(&self, idx: usize) -> bool {
        self.visited.get(idx).copied().unwrap_or(false)
    }

    pub fn next(&mut self, now: Instant) {
        if self.cursor.next() {
            self.question_changed(now);
        }
    }

    pub fn previous(&mut self, now: Instant) {
        if self.cursor.previous() {
            self.question_changed(now);
        }
    }

    pub fn jump_to(&mut self, idx: usize, now: Instant) {
        if self.cursor.jump_to(idx) {
            self.question_changed(now);
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.timer.reset(now);
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        self.timer.toggle(now);
    }

    pub fn is_paused(&self) -> bool {
        self.timer.phase() == TimerPhase::Paused
    }

    pub fn is_expired(&self) -> bool {
        self.timer.phase() == TimerPhase::Expired
    }

    pub fn on_tick(&mut self, generation: u64, now: Instant) -> bool {
        self.timer.on_tick(generation, now)
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) {
        match action {
            Action::Next => self.next(now),
            Action::Previous => self.previous(now),
            Action::Reset => self.reset(now),
            Action::TogglePause => self.toggle_pause(now),
            Action::JumpTo(idx) => self.jump_to(idx, now),
            Action::ToggleHelp => {
                if self.top_dialog() == Some(&Dialog::Help) {
                    self.pop_dialog();
                } else {
                    self.push_dialog(Dialog::Help);
                }
            }
            Action::Dismiss => {
                self.pop_dialog();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn question_changed(&mut self, now: Instant) {
        self.mark_visited();
        self.timer.reset(now);
    }

    fn mark_visited(&mut self) {
        if let Some(v) = self.visited.get_mut(self.cursor.index()) {
            *v = true;
        }
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
