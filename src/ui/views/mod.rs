//! Presentation views.
//!
//! Each view is a pure function of the fields it is given; none of them
//! read controller state or touch the network. The map instance passed to
//! `AddressView` is owned by `App` so that its identity survives redraws.

mod address;
pub mod map;
mod plates;
mod vehicle;

pub use address::AddressView;
pub use map::{MapInstance, MapKey, MapSlot};
pub use plates::{PlateListView, MISSING_CONFIDENCE, NO_PLATES_MESSAGE};
pub use vehicle::VehicleView;

use crate::ui::theme::{CARD_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u8) -> &'static str {
    SPINNER_FRAMES[usize::from(tick) % SPINNER_FRAMES.len()]
}

pub(crate) fn card(title: String) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER))
}

/// Flattens rendered lines to plain text, for assertions.
#[cfg(test)]
pub(crate) fn plain_text(lines: &[ratatui::text::Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect()
}
