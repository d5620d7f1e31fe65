use std::io;
use std::sync::mpsc;
use std::time::Instant;

use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::error::Result;
use crate::input;
use crate::state::AppState;
use crate::timer::TimerEvent;

/// Raw mode, alternate screen and mouse capture, held for as long as this lives.
///
/// Dropping it restores the terminal, including on error paths.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            disable_raw_mode().ok();
            return Err(e.into());
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                restore_terminal(&mut io::stdout());
                return Err(e.into());
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal(self.terminal.backend_mut());
        self.terminal.show_cursor().ok();
    }
}

fn restore_terminal<W: io::Write>(out: &mut W) {
    disable_raw_mode().ok();
    execute!(out, LeaveAlternateScreen, DisableMouseCapture).ok();
}

/// Runs the UI until the user quits and hands the state back.
///
/// `timer_rx` is dropped on return, so the tick thread stops at its next send.
pub fn run_tui(mut state: AppState, timer_rx: mpsc::Receiver<TimerEvent>) -> Result<AppState> {
    let mut session = TerminalSession::enter()?;
    main_loop(&mut session.terminal, &mut state, &timer_rx)?;
    Ok(state)
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    timer_rx: &mpsc::Receiver<TimerEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| crate::ui::draw(f, state))?;

        if state.should_quit {
            break;
        }

        // Wake at least once per tick so the dial keeps moving
        if event::poll(state.timer.interval())? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = input::action_for_key(key, state) {
                        state.dispatch(action, Instant::now());
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    if let Some(action) = input::action_for_mouse(mouse, state, area) {
                        state.dispatch(action, Instant::now());
                    }
                }
                _ => {}
            }
        }

        // Handle timer events
        while let Ok(ev) = timer_rx.try_recv() {
            match ev {
                TimerEvent::Tick { generation } => {
                    state.on_tick(generation, Instant::now());
                }
            }
        }
    }

    Ok(())
}
