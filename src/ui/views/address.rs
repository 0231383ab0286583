use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::model::AddressRecord;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT};
use crate::ui::views::card;
use crate::ui::views::map::MapInstance;

/// Associated address with its map.
pub struct AddressView<'a> {
    address: &'a AddressRecord,
    map: Option<&'a MapInstance>,
}

impl<'a> AddressView<'a> {
    pub fn new(address: &'a AddressRecord, map: Option<&'a MapInstance>) -> Self {
        Self { address, map }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                self.address.street_address.clone(),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.address.locality_line(),
                Style::default().fg(HEADER_TEXT),
            )),
        ]
    }
}

impl Widget for AddressView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [info, map_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        Paragraph::new(self.lines())
            .block(card(" Associated Address ".to_string()))
            .render(info, buf);

        match self.map {
            Some(map) => map.render(map_area, buf),
            None => Paragraph::new(Line::from(Span::styled(
                "Map unavailable",
                Style::default().fg(MUTED_TEXT),
            )))
            .block(card(" Map ".to_string()))
            .render(map_area, buf),
        }
    }
}
