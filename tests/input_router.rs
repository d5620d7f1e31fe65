mod common;

use std::time::Instant;

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use common::app_with;
use pitchme::input::{action_for_key, action_for_mouse, Action, PAGE_JUMP};
use pitchme::ui::controls::{button_rects, Button};
use pitchme::ui::layout::compute_layout;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_arrow_keys_and_space() {
    let (state, _ticks) = app_with(10, Instant::now());
    assert_eq!(action_for_key(key(KeyCode::Right), &state), Some(Action::Next));
    assert_eq!(action_for_key(key(KeyCode::Left), &state), Some(Action::Previous));
    assert_eq!(action_for_key(key(KeyCode::Up), &state), Some(Action::Reset));
    assert_eq!(action_for_key(key(KeyCode::Down), &state), Some(Action::TogglePause));
    assert_eq!(action_for_key(key(KeyCode::Char(' ')), &state), Some(Action::Reset));
}

#[test]
fn test_vim_keys_and_jumps() {
    let (mut state, _ticks) = app_with(10, Instant::now());
    assert_eq!(action_for_key(key(KeyCode::Char('l')), &state), Some(Action::Next));
    assert_eq!(action_for_key(key(KeyCode::Char('h')), &state), Some(Action::Previous));
    assert_eq!(action_for_key(key(KeyCode::Char('k')), &state), Some(Action::Reset));
    assert_eq!(action_for_key(key(KeyCode::Char('j')), &state), Some(Action::TogglePause));
    assert_eq!(action_for_key(key(KeyCode::Home), &state), Some(Action::JumpTo(0)));
    assert_eq!(action_for_key(key(KeyCode::End), &state), Some(Action::JumpTo(9)));
    assert_eq!(action_for_key(key(KeyCode::PageUp), &state), Some(Action::JumpTo(0)));
    assert_eq!(
        action_for_key(key(KeyCode::PageDown), &state),
        Some(Action::JumpTo(PAGE_JUMP))
    );

    state.jump_to(8, Instant::now());
    assert_eq!(action_for_key(key(KeyCode::PageDown), &state), Some(Action::JumpTo(9)));
    assert_eq!(action_for_key(key(KeyCode::PageUp), &state), Some(Action::JumpTo(3)));
}

#[test]
fn test_quit_and_help_keys() {
    let (state, _ticks) = app_with(3, Instant::now());
    assert_eq!(action_for_key(key(KeyCode::Char('q')), &state), Some(Action::Quit));
    assert_eq!(
        action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &state),
        Some(Action::Quit)
    );
    assert_eq!(action_for_key(key(KeyCode::Char('?')), &state), Some(Action::ToggleHelp));
    assert_eq!(action_for_key(key(KeyCode::Char('x')), &state), None);
    assert_eq!(action_for_key(key(KeyCode::Esc), &state), None);
}

#[test]
fn test_release_events_are_ignored() {
    let (state, _ticks) = app_with(3, Instant::now());
    let release = KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(action_for_key(release, &state), None);
}

#[test]
fn test_any_key_dismisses_help() {
    let now = Instant::now();
    let (mut state, _ticks) = app_with(3, now);
    state.dispatch(Action::ToggleHelp, now);
    assert_eq!(action_for_key(key(KeyCode::Right), &state), Some(Action::Dismiss));
    assert_eq!(action_for_key(key(KeyCode::Esc), &state), Some(Action::Dismiss));
    assert_eq!(
        action_for_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL), &state),
        Some(Action::Quit)
    );
}

#[test]
fn test_clicking_buttons() {
    let (state, _ticks) = app_with(10, Instant::now());
    let area = Rect::new(0, 0, 120, 40);
    let layout = compute_layout(area);

    for (button, rect) in button_rects(layout.controls) {
        let action = action_for_mouse(
            click(rect.x + rect.width / 2, rect.y + rect.height / 2),
            &state,
            area,
        );
        assert_eq!(action, Some(button.action()));
    }
    assert_eq!(Button::PlayPause.action(), Action::TogglePause);
    assert_eq!(Button::Reset.action(), Action::Reset);
}

#[test]
fn test_clicking_sidebar_rows() {
    let (state, _ticks) = app_with(10, Instant::now());
    let area = Rect::new(0, 0, 120, 40);
    let layout = compute_layout(area);
    assert!(layout.sidebar.width > 0);

    let action = action_for_mouse(click(layout.sidebar.x + 4, layout.sidebar.y + 3), &state, area);
    assert_eq!(action, Some(Action::JumpTo(3)));

    // Past the end of a short list
    let action = action_for_mouse(click(layout.sidebar.x + 4, layout.sidebar.y + 20), &state, area);
    assert_eq!(action, None);
}

#[test]
fn test_narrow_terminal_hides_sidebar() {
    let (state, _ticks) = app_with(10, Instant::now());
    let area = Rect::new(0, 0, 60, 30);
    let layout = compute_layout(area);
    assert_eq!(layout.sidebar.width, 0);
    assert_eq!(action_for_mouse(click(1, 5), &state, area), None);
}

#[test]
fn test_only_left_clicks_count() {
    let (state, _ticks) = app_with(10, Instant::now());
    let area = Rect::new(0, 0, 120, 40);
    let layout = compute_layout(area);
    let (_, rect) = button_rects(layout.controls)[0];
    let mut ev = click(rect.x + 1, rect.y + 1);
    ev.kind = MouseEventKind::Moved;
    assert_eq!(action_for_mouse(ev, &state, area), None);
}
