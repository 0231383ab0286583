use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::PlateEntry;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_OK};
use crate::ui::views::card;

pub const NO_PLATES_MESSAGE: &str = "No license plates detected";

/// Shown in place of a confidence the service did not send.
pub const MISSING_CONFIDENCE: &str = "-";

/// Cropped plate images with their confidences.
pub struct PlateListView<'a> {
    plates: &'a [PlateEntry],
    detected: bool,
}

impl<'a> PlateListView<'a> {
    pub fn new(plates: &'a [PlateEntry], detected: bool) -> Self {
        Self { plates, detected }
    }

    /// Number of plate entries rendered; zero when nothing was detected.
    pub fn entry_count(&self) -> usize {
        if self.detected {
            self.plates.len()
        } else {
            0
        }
    }

    pub fn title(&self) -> String {
        format!(" Plates: {} ", self.plates.len())
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        if !self.detected {
            return vec![Line::from(Span::styled(
                NO_PLATES_MESSAGE,
                Style::default().fg(MUTED_TEXT),
            ))];
        }

        let mut lines = Vec::with_capacity(self.plates.len() * 3);
        for (index, plate) in self.plates.iter().enumerate() {
            if index > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Plate {}: ", index + 1),
                    Style::default()
                        .fg(HEADER_TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(plate.image_summary.clone(), Style::default().fg(HEADER_TEXT)),
            ]));
            let confidence = match plate.confidence.as_deref() {
                Some(value) => Span::styled(value.to_string(), Style::default().fg(STATUS_OK)),
                None => Span::styled(MISSING_CONFIDENCE, Style::default().fg(MUTED_TEXT)),
            };
            lines.push(Line::from(vec![
                Span::styled("  Confidence: ", Style::default().fg(MUTED_TEXT)),
                confidence,
            ]));
        }
        lines
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(card(self.title()))
    }
}
