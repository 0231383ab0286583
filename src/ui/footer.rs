use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// `can_trigger` greys out the "Generate New" hint while loading.
    pub fn widget(&self, area: Rect, can_trigger: bool) -> Paragraph<'static> {
        let generate = if can_trigger {
            " g: Generate New"
        } else {
            " g: Loading..."
        };
        let hints = " │ ←↑↓→: Pan map │ q: Quit";
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let used = generate.chars().count() + hints.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let generate_style = if can_trigger {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
        } else {
            text_style
        };

        let line = Line::from(vec![
            Span::styled(generate, generate_style),
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
