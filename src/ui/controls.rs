use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::input::Action;
use crate::state::AppState;

const BUTTON_WIDTH: u16 = 7;
const BUTTON_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Reset,
    Previous,
    PlayPause,
    Next,
}

impl Button {
    pub const ALL: [Button; 4] = [
        Button::Reset,
        Button::Previous,
        Button::PlayPause,
        Button::Next,
    ];

    pub fn action(self) -> Action {
        match self {
            Button::Reset => Action::Reset,
            Button::Previous => Action::Previous,
            Button::PlayPause => Action::TogglePause,
            Button::Next => Action::Next,
        }
    }

    fn label(self, state: &AppState) -> &'static str {
        match self {
            Button::Reset => "↺",
            Button::Previous => "◀",
            Button::PlayPause if state.is_paused() => "▶",
            Button::PlayPause => "❚❚",
            Button::Next => "▶▶",
        }
    }

    fn enabled(self, state: &AppState) -> bool {
        match self {
            Button::Reset => true,
            Button::Previous => !state.cursor.is_first(),
            Button::PlayPause => !state.is_expired(),
            Button::Next => !state.cursor.is_last(),
        }
    }
}

/// Button row centred in `area`. Shared by drawing and mouse hit-testing.
pub fn button_rects(area: Rect) -> Vec<(Button, Rect)> {
    let count = Button::ALL.len() as u16;
    let total = count * BUTTON_WIDTH + (count - 1) * BUTTON_GAP;
    let start_x = area.x + area.width.saturating_sub(total) / 2;

    Button::ALL
        .iter()
        .enumerate()
        .map(|(i, button)| {
            let x = start_x + i as u16 * (BUTTON_WIDTH + BUTTON_GAP);
            let rect = Rect::new(x, area.y, BUTTON_WIDTH, area.height).intersection(area);
            (*button, rect)
        })
        .collect()
}

pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Button> {
    button_rects(area)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(button, _)| button)
}

pub fn draw_controls(f: &mut Frame, area: Rect, state: &AppState) {
    for (button, rect) in button_rects(area) {
        let color = if button.enabled(state) {
            Color::White
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(90, 90, 90)));
        let widget = Paragraph::new(button.label(state))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
        f.render_widget(widget, rect);
    }
}
