mod error;
mod filter;
mod lang;
mod notify;
mod prefs;
mod store;
mod task;
mod ui;

use crate::error::Result;
use crate::lang::LanguageManager;
use crate::notify::{ReminderQueue, ReminderScheduler};
use crate::prefs::Prefs;
use crate::store::TaskStore;
use crate::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _log_guard = init_logging();

    let prefs = Rc::new(RefCell::new(Prefs::open(Prefs::default_path())));
    let reminders = Rc::new(RefCell::new(ReminderQueue::new()));
    reminders.borrow_mut().request_permission();
    let scheduler: Rc<RefCell<dyn ReminderScheduler>> = reminders.clone();

    let store = TaskStore::new(prefs.clone(), scheduler);
    let lang = LanguageManager::new(prefs);
    let mut app = App::new(store, lang, reminders);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

/// Logs go to a daily-rotated file so the terminal stays clean for the
/// TUI. `RUST_LOG` filters levels; default is `info`.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = Prefs::default_path().parent()?.to_path_buf();
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(dir, "taskpad.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
