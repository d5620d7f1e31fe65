pub mod controls;
pub mod dial;
pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod question;
pub mod sidebar;
pub mod titlebar;

use ratatui::Frame;

use crate::state::AppState;

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    sidebar::draw_sidebar(f, layout.sidebar, state);
    question::draw_question(f, layout.question, state);
    dial::draw_dial(f, layout.dial, state);
    controls::draw_controls(f, layout.controls, state);
    keybar::draw_keybar(f, layout.keybar, state);

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}
