//! Form Builder TUI - a sign-up form rendered with the form builder
//!
//! Tab/Shift-Tab move between fields, Ctrl+S validates, Ctrl+R resets and
//! Esc quits. `--write-config` saves the current configuration and exits.

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use form_builder::app::App;
use form_builder::config::FormConfig;
use form_builder::ui::{self, theme::Theme};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = FormConfig::load().unwrap_or_else(|err| {
        eprintln!("Ignoring unreadable config: {err}");
        FormConfig::default()
    });

    // Write the effective config so it can be edited, then exit
    if std::env::args().any(|arg| arg == "--write-config") {
        config.save()?;
        println!("Config written");
        return Ok(());
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Theme::from_config(&config));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Writes queued since the last frame land before drawing
        app.apply_pending();
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key).await?,
                Event::Resize(_width, _height) => {}
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
