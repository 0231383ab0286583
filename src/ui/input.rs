use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Routes a key press to the controller.
///
/// "Generate New" is refused here while a request is in flight; this is
/// the guard against overlapping fetches.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('g') | KeyCode::Char('n') | KeyCode::Enter => {
            if app.can_trigger() {
                app.trigger_fetch();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.pan_map(1, 0),
        KeyCode::Down | KeyCode::Char('j') => app.pan_map(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.pan_map(0, 1),
        KeyCode::Left | KeyCode::Char('h') => app.pan_map(0, -1),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
