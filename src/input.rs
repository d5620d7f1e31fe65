//! Maps keyboard and mouse events onto [`Action`]s.

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::state::AppState;
use crate::ui::{controls, layout, sidebar};

pub const PAGE_JUMP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    Reset,
    TogglePause,
    JumpTo(usize),
    ToggleHelp,
    Dismiss,
    Quit,
}

pub fn action_for_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    // Any key closes an open dialog
    if state.has_dialog() {
        return Some(Action::Dismiss);
    }

    let current = state.cursor.index();
    let last = state.questions.len().saturating_sub(1);

    match key.code {
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Next),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Previous),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char(' ') => Some(Action::Reset),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::TogglePause),
        KeyCode::Home => Some(Action::JumpTo(0)),
        KeyCode::End => Some(Action::JumpTo(last)),
        KeyCode::PageUp => Some(Action::JumpTo(current.saturating_sub(PAGE_JUMP))),
        KeyCode::PageDown => Some(Action::JumpTo((current + PAGE_JUMP).min(last))),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// `area` is the full terminal area the last frame was drawn into.
pub fn action_for_mouse(mouse: MouseEvent, state: &AppState, area: Rect) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if state.has_dialog() {
        return Some(Action::Dismiss);
    }

    let layout = layout::compute_layout(area);
    if let Some(button) = controls::button_at(layout.controls, mouse.column, mouse.row) {
        return Some(button.action());
    }
    if mouse.column >= layout.sidebar.x && mouse.column < layout.sidebar.x + layout.sidebar.width {
        return sidebar::question_at_row(layout.sidebar, state, mouse.row).map(Action::JumpTo);
    }
    None
}
