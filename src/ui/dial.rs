use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::progress::{progress_fraction, ProgressRing};
use crate::state::AppState;
use crate::timer::format_remaining;
use crate::ui::layout::centered_rect;

/// Braille cells are 2x4 dots, so twice as many columns as rows keeps the ring round.
const DIAL_COLS: u16 = 18;
const DIAL_ROWS: u16 = 9;
const WARN_FRACTION: f64 = 0.8;

pub fn draw_dial(f: &mut Frame, area: Rect, state: &AppState) {
    if state.is_expired() {
        draw_expired(f, area, state);
        return;
    }

    let rect = centered_rect(DIAL_COLS, DIAL_ROWS, area);
    let fraction = progress_fraction(state.timer.elapsed(), state.timer.max_time());
    let color = if fraction >= WARN_FRACTION {
        Color::Red
    } else {
        Color::Cyan
    };

    let ring = ProgressRing {
        radius: 1.0,
        fraction,
        color,
    };
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 1.0,
                color: Color::Rgb(60, 60, 60),
            });
            ctx.layer();
            ctx.draw(&ring);
        });
    f.render_widget(canvas, rect);

    let label = if state.is_paused() {
        Span::styled("❚❚", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        Span::styled(
            format_remaining(state.timer.remaining()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };
    let label_rect = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1);
    f.render_widget(
        Paragraph::new(Line::from(label)).alignment(Alignment::Center),
        label_rect,
    );
}

fn draw_expired(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("✗  {}", state.expired_message),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[↑/Space] Try again    [→] Next question",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let width = u16::try_from(state.expired_message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(10)
        .max(44);
    let rect = centered_rect(width, lines.len() as u16 + 2, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, rect);
}
