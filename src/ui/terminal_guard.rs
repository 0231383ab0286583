//! Terminal mode switching with guaranteed restore.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

type Restore = Box<dyn FnOnce() + Send + 'static>;

/// Runs the restore action exactly once: on drop, or from the panic hook.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Restore>>>,
}

impl TerminalGuard {
    /// A guard that already owns `restore`; dropping it restores.
    fn armed<F: FnOnce() + Send + 'static>(restore: F) -> Self {
        Self {
            restore: Arc::new(Mutex::new(Some(Box::new(restore)))),
        }
    }

    fn install_panic_hook(&self) {
        let restore = Arc::clone(&self.restore);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&restore);
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.restore);
    }
}

fn run_once(slot: &Mutex<Option<Restore>>) {
    if let Ok(mut slot) = slot.lock() {
        if let Some(restore) = slot.take() {
            restore();
        }
    }
}

/// Runs `setup` with `restore` already armed.
///
/// If `setup` fails the guard is dropped on the way out, so the terminal is
/// restored before the error reaches the caller.
fn guarded<T, F, S>(restore: F, setup: S) -> io::Result<(T, TerminalGuard)>
where
    F: FnOnce() + Send + 'static,
    S: FnOnce() -> io::Result<T>,
{
    let guard = TerminalGuard::armed(restore);
    let value = setup()?;
    Ok((value, guard))
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Switches to raw mode on the alternate screen.
///
/// Everything after `enable_raw_mode` runs under the guard, so a failure
/// part-way through still leaves the shell usable for the error message.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let (terminal, guard) = guarded(restore_terminal, || {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(TermClear(ClearType::All))?;
        stdout.execute(Hide)?;
        Terminal::new(CrosstermBackend::new(stdout))
    })?;
    guard.install_panic_hook();
    Ok((terminal, guard))
}
