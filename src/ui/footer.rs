use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme::Theme;
use crate::app::{App, ViewMode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default()
        .fg(Theme::border_active())
        .add_modifier(Modifier::BOLD);
    let sep_style = Style::default().fg(Theme::border_dim());
    let desc_style = Style::default().fg(Theme::fg());

    let spans = if app.view_mode == ViewMode::Search {
        vec![
            Span::styled(" enter", key_style),
            Span::styled(" done", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("esc", key_style),
            Span::styled(" done", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("backspace", key_style),
            Span::styled(" erase", desc_style),
        ]
    } else {
        vec![
            Span::styled(" q", key_style),
            Span::styled(" quit", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("/", key_style),
            Span::styled(" search", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("m", key_style),
            Span::styled(" mode", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("↑↓", key_style),
            Span::styled(" select", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("enter", key_style),
            Span::styled(" view", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("←→", key_style),
            Span::styled(" page", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("tab", key_style),
            Span::styled(" raw/hex/json", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("y", key_style),
            Span::styled(" copy", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("r", key_style),
            Span::styled(" refresh", desc_style),
            Span::styled(" │ ", sep_style),
            Span::styled("?", key_style),
            Span::styled(" help", desc_style),
        ]
    };

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Theme::header_bg()));

    frame.render_widget(paragraph, area);
}
