use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme::Theme;
use super::util::{format_bytes, truncate};
use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let now = chrono::Local::now().format("%H:%M:%S").to_string();

    let mut spans = vec![
        Span::styled(
            " kvscope ",
            Style::default()
                .fg(Theme::border_active())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(Theme::border_dim())),
        Span::styled(app.base_url.clone(), Style::default().fg(Theme::fg())),
    ];

    if let Some(ref stats) = app.stats {
        spans.push(Span::styled(" │ ", Style::default().fg(Theme::border_dim())));
        spans.push(Span::styled(
            stats.db_path.clone(),
            Style::default().fg(Theme::fg()),
        ));
        spans.push(Span::styled(" │ ", Style::default().fg(Theme::border_dim())));
        spans.push(Span::styled(
            format!("keys: {}", stats.total_keys),
            Style::default().fg(Theme::fg()),
        ));
        spans.push(Span::styled(" │ ", Style::default().fg(Theme::border_dim())));
        spans.push(Span::styled(
            format_bytes(stats.db_size_bytes),
            Style::default().fg(Theme::fg()),
        ));
    }

    if let Some(ref msg) = app.feedback.status_message {
        spans.push(Span::styled(
            format!(" │ {msg}"),
            Style::default().fg(Theme::border_active()),
        ));
    }

    if let Some(ref err) = app.feedback.last_error {
        spans.push(Span::styled(
            format!(" │ ERR: {}", truncate(err, 60)),
            Style::default()
                .fg(Theme::border_danger())
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(
        format!(" │ {now}"),
        Style::default().fg(Theme::border_dim()),
    ));

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Theme::header_bg()));

    frame.render_widget(paragraph, area);
}
