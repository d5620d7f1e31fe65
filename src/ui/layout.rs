use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 36;
/// Below this terminal width the sidebar is hidden.
pub const SIDEBAR_MIN_TOTAL: u16 = 80;
pub const DIAL_HEIGHT: u16 = 9;
pub const CONTROLS_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub titlebar: Rect,
    pub sidebar: Rect,
    pub question: Rect,
    pub dial: Rect,
    pub controls: Rect,
    pub keybar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // titlebar
            Constraint::Min(5),    // middle (sidebar + main)
            Constraint::Length(1), // keybar
        ])
        .split(area);

    let sidebar_width = if area.width >= SIDEBAR_MIN_TOTAL {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(20)])
        .split(vertical[1]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                  // question text
            Constraint::Length(DIAL_HEIGHT),     // countdown dial
            Constraint::Length(CONTROLS_HEIGHT), // buttons
        ])
        .split(middle[1]);

    AppLayout {
        titlebar: vertical[0],
        sidebar: middle[0],
        question: main[0],
        dial: main[1],
        controls: main[2],
        keybar: vertical[2],
    }
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
