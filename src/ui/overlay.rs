use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::theme::Theme;

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(v[1])[1]
}

fn overlay_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(Theme::overlay_bg())
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Theme::overlay_bg()))
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let block = overlay_block("Keybindings  [any key] close", Theme::border_active());

    let key_style = Style::default()
        .fg(Theme::border_active())
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Theme::fg());

    let entry = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("    {key:<12}"), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let lines = vec![
        Line::from(""),
        entry("q / Esc", "Quit"),
        entry("/", "Search keys (type, then Enter or Esc)"),
        entry("m", "Toggle prefix / substring matching"),
        entry("↑ / k", "Previous key"),
        entry("↓ / j", "Next key"),
        entry("g / G", "First / last key on the page"),
        entry("← / p", "Previous page"),
        entry("→ / n", "Next page"),
        entry("Enter", "Fetch the selected value"),
        entry("Tab / v", "Cycle Raw / Hex / JSON"),
        entry("1 / 2 / 3", "Raw / Hex / JSON directly"),
        entry("PgDn/PgUp", "Scroll the value pane"),
        entry("Ctrl+d/u", "Scroll the value pane"),
        entry("y", "Copy the rendered value"),
        entry("r", "Re-fetch stats and keys"),
        entry("?", "This help screen"),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}

pub fn render_substring_warning(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup);

    let block = overlay_block("Substring search", Theme::border_warn());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Substring matching scans every key in the store.",
            Style::default().fg(Theme::fg()),
        )),
        Line::from(Span::styled(
            "  On large stores searches may be slow.",
            Style::default().fg(Theme::fg()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to continue.",
            Style::default().fg(Theme::fg_dim()),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup);
}
