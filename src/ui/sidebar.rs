use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use crate::state::AppState;

/// First visible row, keeping the current question roughly centred.
///
/// Stateless so mouse hit-testing sees exactly what was drawn.
pub fn scroll_offset(current: usize, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    current
        .saturating_sub(visible / 2)
        .min(total - visible)
}

/// Question index under a click at `row`, if any.
pub fn question_at_row(area: Rect, state: &AppState, row: u16) -> Option<usize> {
    if area.width == 0 || row < area.y || row >= area.y + area.height {
        return None;
    }
    let visible = area.height as usize;
    let offset = scroll_offset(state.cursor.index(), state.questions.len(), visible);
    let idx = offset + (row - area.y) as usize;
    (idx < state.questions.len()).then_some(idx)
}

pub fn draw_sidebar(f: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 {
        return;
    }

    let visible = area.height as usize;
    let total = state.questions.len();
    let current = state.cursor.index();
    let offset = scroll_offset(current, total, visible);

    // cursor(3) + icon(2) + number(4) + right border/scrollbar(2)
    let title_max_len = (area.width as usize).saturating_sub(11);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, text) in state.questions.iter().enumerate().skip(offset).take(visible) {
        let is_current = idx == current;
        let (icon, icon_color) = if state.is_visited(idx) {
            ("●", Color::Green)
        } else {
            ("○", Color::DarkGray)
        };

        let style = if is_current {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let title: String = if text.chars().count() > title_max_len {
            let mut t: String = text.chars().take(title_max_len.saturating_sub(1)).collect();
            t.push('…');
            t
        } else {
            text.to_string()
        };

        lines.push(Line::from(vec![
            Span::styled(if is_current { " ▸ " } else { "   " }, style),
            Span::styled(format!("{} ", icon), style.fg(icon_color)),
            Span::styled(format!("{:>2}. ", idx + 1), style),
            Span::styled(title, style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);

    if total > visible {
        let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible)).position(offset);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None);
        f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}
