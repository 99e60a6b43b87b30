mod footer;
mod header;
mod keys_panel;
mod layout;
mod overlay;
pub mod theme;
mod util;
mod value_panel;

use crate::app::{App, ViewMode};
use ratatui::Frame;

pub fn render(frame: &mut Frame, app: &mut App) {
    let areas = layout::compute_layout(frame.area());

    header::render(frame, app, areas.header);
    keys_panel::render(frame, app, areas.keys);
    value_panel::render(frame, app, areas.value);
    footer::render(frame, app, areas.footer);

    match app.view_mode {
        ViewMode::Help => overlay::render_help(frame, frame.area()),
        ViewMode::SubstringWarning => overlay::render_substring_warning(frame, frame.area()),
        ViewMode::Normal | ViewMode::Search => {}
    }
}
