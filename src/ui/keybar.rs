use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let pause_label = if state.is_paused() { "resume" } else { "pause" };
    let bindings: Vec<(&str, &str)> = if state.has_dialog() {
        vec![("Esc", "close")]
    } else {
        vec![
            ("←/→", "prev/next"),
            ("↑/Space", "restart timer"),
            ("↓", pause_label),
            ("PgUp/PgDn", "jump 5"),
            ("?", "help"),
            ("q", "quit"),
        ]
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
