use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use super::theme::Theme;
use crate::app::{App, ViewMode};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.view_mode == ViewMode::Search {
        Theme::border_active()
    } else {
        Theme::border_dim()
    };

    let block = Block::default()
        .title(format!(" Keys ({}) ", app.query.total()))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_style(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_search_line(frame, app, rows[0]);
    render_key_list(frame, app, rows[1]);
    render_page_line(frame, app, rows[2]);
}

fn render_search_line(frame: &mut Frame, app: &App, area: Rect) {
    let cursor = if app.view_mode == ViewMode::Search {
        "█"
    } else {
        ""
    };
    let line = Line::from(vec![
        Span::styled(
            "/",
            Style::default()
                .fg(Theme::border_active())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{}{cursor}", app.query.text()),
            Style::default().fg(Theme::fg()),
        ),
        Span::styled(
            format!(" [{}]", app.query.mode().label()),
            Style::default().fg(Theme::fg_dim()),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_key_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.keys.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "no keys",
            Style::default().fg(Theme::fg_dim()),
        )));
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .keys
        .iter()
        .map(|k| ListItem::new(k.as_str()))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(Theme::fg()))
        .highlight_style(
            Style::default()
                .bg(Theme::highlight_bg())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_page_line(frame: &mut Frame, app: &App, area: Rect) {
    let active = Style::default().fg(Theme::fg());
    let dimmed = Style::default().fg(Theme::fg_dim());

    let prev_style = if app.query.can_prev() { active } else { dimmed };
    let next_style = if app.query.can_next() { active } else { dimmed };

    let line = Line::from(vec![
        Span::styled("← prev", prev_style),
        Span::styled(
            format!("  {}  ", app.query.page_label()),
            Style::default().fg(Theme::fg_dim()),
        ),
        Span::styled("next →", next_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
