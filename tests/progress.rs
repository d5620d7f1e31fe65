use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::Widget;

use pitchme::progress::{progress_fraction, ProgressRing};

fn painted_cells(fraction: f64) -> Vec<(u16, u16)> {
    let area = Rect::new(0, 0, 18, 9);
    let mut buf = Buffer::empty(area);
    let ring = ProgressRing {
        radius: 1.0,
        fraction,
        color: Color::Cyan,
    };
    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| ctx.draw(&ring))
        .render(area, &mut buf);

    let mut cells = Vec::new();
    for y in 0..area.height {
        for x in 0..area.width {
            if buf[(x, y)].symbol() != " " {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[test]
fn test_fraction_is_proportional_and_clamped() {
    assert_eq!(progress_fraction(0.0, 10.0), 0.0);
    assert_eq!(progress_fraction(2.5, 10.0), 0.25);
    assert_eq!(progress_fraction(10.0, 10.0), 1.0);
    assert_eq!(progress_fraction(12.0, 10.0), 1.0);
    assert_eq!(progress_fraction(-1.0, 10.0), 0.0);
}

#[test]
fn test_fraction_degenerate_totals() {
    assert_eq!(progress_fraction(1.0, 0.0), 1.0);
    assert_eq!(progress_fraction(1.0, -5.0), 1.0);
    assert_eq!(progress_fraction(1.0, f64::NAN), 1.0);
    assert_eq!(progress_fraction(f64::INFINITY, 10.0), 1.0);
}

#[test]
fn test_empty_ring_paints_nothing() {
    assert!(painted_cells(0.0).is_empty());
}

#[test]
fn test_quarter_ring_stays_in_upper_right() {
    let cells = painted_cells(0.25);
    assert!(!cells.is_empty());
    for (x, y) in cells {
        assert!(x >= 8, "cell at column {} left of centre", x);
        assert!(y <= 5, "cell at row {} below centre", y);
    }
}

#[test]
fn test_full_ring_reaches_every_side() {
    let cells = painted_cells(1.0);
    assert!(cells.iter().any(|&(x, _)| x <= 1));
    assert!(cells.iter().any(|&(x, _)| x >= 16));
    assert!(cells.iter().any(|&(_, y)| y == 0));
    assert!(cells.iter().any(|&(_, y)| y == 8));
    assert!(cells.len() > painted_cells(0.5).len());
}
