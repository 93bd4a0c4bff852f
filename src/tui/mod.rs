pub mod action;
pub mod keys;
pub mod reducer;
pub mod state;
pub mod view;

pub use action::Action;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::Config;
use crate::data_provider::LeagueDataProvider;

/// Main entry point for the interactive standings view
pub async fn run(provider: Arc<dyn LeagueDataProvider>, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load standings in the background; the result arrives as an action
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    tokio::spawn(async move {
        let result = provider.standings().await.map_err(|e| {
            warn!("Failed to load standings: {}", e);
            e.to_string()
        });
        let _ = action_tx.send(Action::StandingsLoaded(result));
    });

    let mut state = AppState::new();

    loop {
        while let Ok(action) = action_rx.try_recv() {
            state = reduce(state, action);
        }

        terminal.draw(|f| {
            let area = f.area();
            view::render(f, area, &state, &config.theme);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key_to_action(key) {
                    Some(Action::Quit) => {
                        debug!("ACTION: Quitting application");
                        break;
                    }
                    Some(action) => state = reduce(state, action),
                    None => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
