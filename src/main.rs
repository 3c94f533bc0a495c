mod app;
mod config;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::{AppConfig, AppearanceSetting};
use settings_rows::IconSet;

#[derive(Parser, Debug)]
#[command(name = "settings-rows")]
#[command(version)]
#[command(about = "Preview of the settings rows in the terminal")]
struct Args {
    /// Force light or dark rows instead of following the terminal theme
    #[arg(short, long, value_enum)]
    appearance: Option<AppearanceSetting>,

    /// Draw icons from a Nerd Font
    #[arg(short, long)]
    nerd_font: bool,

    /// Print the accessibility stops of the screen as JSON and exit
    #[arg(short, long)]
    describe: bool,

    /// Read this config file instead of the default one
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // The TUI owns the tty, so logs are written to a file instead
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(appearance) = args.appearance {
        config.appearance = appearance;
    }
    if args.nerd_font {
        config.icon_set = IconSet::NerdFont;
    }

    let mut app = App::new(config);

    if args.describe {
        println!("{}", serde_json::to_string_pretty(&app.accessibility_stops())?);
        return Ok(());
    }

    run_tui(&mut app)
}

/// `<cache_dir>/settings-rows/settings-rows.log`
fn log_path() -> Option<PathBuf> {
    Some(dirs::cache_dir()?.join("settings-rows").join("settings-rows.log"))
}

/// Append to the log file, or discard logs when it cannot be opened
fn log_writer() -> BoxMakeWriter {
    let file = log_path().and_then(|path| {
        std::fs::create_dir_all(path.parent()?).ok()?;
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::sink),
    }
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key)
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                return Ok(())
            }
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_is_outside_the_terminal() {
        if let Some(path) = log_path() {
            assert!(path.ends_with("settings-rows/settings-rows.log"));
        }
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["settings-rows", "--appearance", "light", "--describe"]);
        assert_eq!(args.appearance, Some(AppearanceSetting::Light));
        assert!(args.describe);
        assert!(!args.nerd_font);
    }
}
