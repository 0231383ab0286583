use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, result_regions, split_banner};
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR, STATUS_WARN};
use crate::ui::views::{spinner_frame, AddressView, PlateListView, VehicleView};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const ERROR_PREFIX: &str = "Error: ";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, mut body, footer) = layout_regions(area);
    let state = app.fetch_state();
    let tick = app.animation_tick();

    frame.render_widget(Header::new().widget(state, tick), header);
    frame.render_widget(Footer::new().widget(footer, app.can_trigger()), footer);
    frame.render_widget(Clear, body);

    if let Some(message) = state.error_banner() {
        let (banner, rest) = split_banner(body, &format!("{ERROR_PREFIX}{message}"));
        let widget = Paragraph::new(Line::from(vec![
            Span::styled(
                ERROR_PREFIX,
                Style::default()
                    .fg(STATUS_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR)),
        ]))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
        frame.render_widget(widget, banner);
        body = rest;
    }

    if state.shows_full_screen_loading() {
        let text = format!("{} Loading...", spinner_frame(tick));
        let width = text.chars().count() as u16;
        let widget = Paragraph::new(Span::styled(text, Style::default().fg(STATUS_WARN)))
            .alignment(Alignment::Center);
        frame.render_widget(widget, centered_rect_by_size(body, width, 1));
        return;
    }

    let Some(record) = state.visible_result() else {
        let hint = "Press g to generate a new plate";
        let widget = Paragraph::new(Span::styled(hint, Style::default().fg(MUTED_TEXT)))
            .alignment(Alignment::Center);
        frame.render_widget(widget, centered_rect_by_size(body, hint.len() as u16, 1));
        return;
    };

    let (vehicle, plates, address) = result_regions(body);
    frame.render_widget(
        VehicleView::new(&record.annotated_summary, &record.image_filename)
            .loading(state.is_loading(), tick)
            .widget(),
        vehicle,
    );
    frame.render_widget(
        PlateListView::new(&record.plates, record.plate_detected).widget(),
        plates,
    );
    frame.render_widget(AddressView::new(&record.address, app.map()), address);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FetchErrorKind, FetchFailure};
    use crate::config::UiConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    fn screen(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn long_error_message_is_not_truncated() {
        let (tx, _rx) = mpsc::channel(1);
        let mut app = App::new(&UiConfig::default());
        app.set_command_sender(tx);
        let request = app.trigger_fetch();
        app.on_fetch_settled(
            request,
            Err(FetchFailure::new(
                FetchErrorKind::Transport,
                "Network error: error sending request for url \
                 (http://detector.internal.example:8000/api/new-plate): Connection refused",
            )),
        );

        let rows = screen(&app, 80, 24);
        assert!(rows.iter().any(|row| row.contains("/api/new-plate")));
        assert!(rows.iter().any(|row| row.contains("Connection refused")));
        assert!(rows.iter().any(|row| row.contains("Press g to generate a new plate")));
    }
}
