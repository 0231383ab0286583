use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_WARN};
use crate::ui::views::{card, spinner_frame};

/// Annotated vehicle image card.
///
/// Takes the precomputed image summary rather than the raw reference, so
/// redraws never decode embedded images.
///
/// `loading` only adds an overlay line and dims the content; the record
/// shown is whatever the caller passes in.
pub struct VehicleView<'a> {
    annotated_summary: &'a str,
    image_filename: &'a str,
    loading: bool,
    tick: u8,
}

impl<'a> VehicleView<'a> {
    pub fn new(annotated_summary: &'a str, image_filename: &'a str) -> Self {
        Self {
            annotated_summary,
            image_filename,
            loading: false,
            tick: 0,
        }
    }

    pub fn loading(mut self, loading: bool, tick: u8) -> Self {
        self.loading = loading;
        self.tick = tick;
        self
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut label_style = Style::default().fg(MUTED_TEXT);
        let mut value_style = Style::default().fg(HEADER_TEXT);
        if self.loading {
            label_style = label_style.add_modifier(Modifier::DIM);
            value_style = value_style.add_modifier(Modifier::DIM);
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Annotated: ", label_style),
                Span::styled(self.annotated_summary.to_string(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Image: ", label_style.add_modifier(Modifier::BOLD)),
                Span::styled(self.image_filename.to_string(), value_style),
            ]),
        ];

        if self.loading {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("{} Loading new result...", spinner_frame(self.tick)),
                Style::default().fg(STATUS_WARN),
            )));
        }
        lines
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(card(" Vehicle Image ".to_string()))
    }
}
