use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use saas_onboarding::config::AppConfig;
use saas_onboarding::tui::app::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (file only, stdout belongs to the terminal UI)
    let _log_guard = saas_onboarding::core::logging::init_tui();
    log::info!("{} v{} starting", saas_onboarding::NAME, saas_onboarding::VERSION);

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms.max(1));

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut app = AppState::new(&config, event_rx, event_tx);
    if let Some(e) = config_error {
        app.report_config_error(&e);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("Terminal error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("Shutdown complete");
    Ok(())
}
