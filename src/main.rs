use chrono::Local;
use clockwise::app::App;
use clockwise::config::Config;
use clockwise::error::Result;
use clockwise::terminal;
use clockwise::views::{add_task::render_add_task, home::render_home, AppState};
use log::{debug, info};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::stdout;

fn main() -> Result<()> {
    env_logger::init();
    debug!("Loading configuration...");
    let config = Config::load()?;
    debug!("Loaded {config:?}");
    terminal::with_terminal(terminal::enter, || run(&config), terminal::leave)
}

fn run(config: &Config) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut app = App::new();
    if config.remind_on_start {
        let reminders = app.reminders(Local::now().date_naive());
        app.notify(reminders);
    }

    let mut next = AppState::Home;
    loop {
        match next {
            AppState::Home => next = render_home(&mut terminal, &mut app)?,
            AppState::AddTask => next = render_add_task(&mut terminal, &mut app, config)?,
            AppState::Exit => break,
        }
    }
    info!("Exiting, discarding {} tasks", app.store().len());
    Ok(())
}
