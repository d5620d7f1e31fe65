use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let title_text = format!("[ {} ]", state.questions.title());
    let info_text = format!(
        " {}/{}   seed {}   since {} ",
        state.cursor.index() + 1,
        state.questions.len(),
        state.questions.seed(),
        state.started_at.format("%H:%M"),
    );

    // Center the title: pad left so title sits in the middle of the full width
    let available = area.width as usize;
    let title_len = title_text.chars().count();
    let info_len = info_text.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    // Right padding fills the gap between centered title and right-aligned info
    let right_pad = available.saturating_sub(center_pad + title_len + info_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        Span::styled(
            title_text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(right_pad)),
        Span::styled(info_text, Style::default().fg(Color::Rgb(200, 200, 120))),
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
