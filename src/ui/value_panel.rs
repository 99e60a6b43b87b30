use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::theme::Theme;
use crate::app::{App, Selection};
use crate::viewer::{self, DisplayMode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match &app.selection {
        Selection::None => render_placeholder(frame, area),
        Selection::Loading { key } => render_loading(frame, key, area),
        Selection::Loaded { record } => {
            let title = format!(" {} ({} bytes) ", record.key, record.size);
            let block = Block::default()
                .title(title)
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border_style(Theme::border_active()));
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(1)])
                .split(inner);

            render_mode_tabs(frame, app.display_mode, rows[0]);

            let body = Paragraph::new(viewer::render(record, app.display_mode))
                .style(Style::default().fg(Theme::fg()))
                .wrap(Wrap { trim: false })
                .scroll((app.value_scroll, 0));
            frame.render_widget(body, rows[1]);
        }
    }
}

fn render_mode_tabs(frame: &mut Frame, active: DisplayMode, area: Rect) {
    let mut spans = Vec::new();
    for (i, mode) in DisplayMode::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Theme::border_dim())));
        }
        let style = if mode == active {
            Style::default()
                .fg(Theme::border_active())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::fg_dim())
        };
        spans.push(Span::styled(mode.label(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_loading(frame: &mut Frame, key: &str, area: Rect) {
    let block = empty_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let line = Line::from(Span::styled(
        format!("Loading {key}..."),
        Style::default().fg(Theme::fg_dim()),
    ));
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let block = empty_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let line = Line::from(Span::styled(
        "Select a key and press Enter",
        Style::default().fg(Theme::fg_dim()),
    ));
    frame.render_widget(Paragraph::new(line), inner);
}

fn empty_block() -> Block<'static> {
    Block::default()
        .title(" Value ")
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_style(Theme::border_dim()))
}
