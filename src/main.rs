mod app;
mod calendar;
mod command;
mod config;
mod console;
mod error;
mod theme;

use std::io::{self, IsTerminal};

use app::{App, Flow};
use calendar::Store;
use chrono::Local;
use color_eyre::Result;
use log::{info, warn, LevelFilter};

fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = config::Settings::load();
    let level = settings
        .as_ref()
        .map(|s| s.level())
        .unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
    let settings = settings.unwrap_or_else(|err| {
        warn!("{:#}; using default settings", err);
        config::Settings::default()
    });

    let theme = settings.theme(io::stdout().is_terminal());
    info!("Output theme: {} (styled: {})", theme.name, theme.enabled);
    let path = Store::default_path()?;
    info!("Reminder store: {}", path.display());

    let mut terminal = console::init();
    let mut app = App::open(
        Store::new(path),
        Local::now().date_naive(),
        theme,
        terminal.writer(),
    )?;

    run(&mut terminal, &mut app)
}

fn run(terminal: &mut console::Terminal, app: &mut App) -> Result<()> {
    loop {
        terminal.prompt(&app.prompt())?;
        let line = terminal.read_line()?;

        // The session may span midnight.
        app.set_today(Local::now().date_naive());

        if app.handle_line(&line, terminal.writer())? == Flow::Quit {
            return Ok(());
        }
    }
}
