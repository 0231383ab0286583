use crate::ui::fetch::{FetchState, Phase};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use crate::ui::views::spinner_frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &FetchState, tick: u8) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = match state.phase {
            Phase::Idle => ("● Idle".to_string(), HEADER_SEPARATOR),
            Phase::Loading => (format!("{} Loading", spinner_frame(tick)), STATUS_WARN),
            Phase::Success => ("● Ready".to_string(), STATUS_OK),
            Phase::Failure => ("● Failed".to_string(), STATUS_ERROR),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "License Plate Finder",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
        ];
        if let Some(request) = state.current_request {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("request {request}"), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
