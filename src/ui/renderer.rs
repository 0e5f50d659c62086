//! Main UI rendering and coordination

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::time::Duration;

use super::app::App;
use super::components::{
    dialogs::{CloudInfoDialog, DebugDialog, ReportFormDialog},
    Header, HelpPanel, ItemList, SearchBar, StatusBar, ToastPopup,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::backend::create_backends;
use crate::config::Config;
use crate::storage::LocalStorage;
use crate::sync::{SyncEvent, SyncService};

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Open storage before touching the terminal so errors print normally
    let database_path = config.database_path()?;
    let storage = LocalStorage::open(&database_path)
        .await
        .with_context(|| format!("Failed to open local storage at {}", database_path.display()))?;
    let backends = create_backends(&config, &storage)?;
    let sync_service = SyncService::new(backends);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config.display);

    // Initial load in the background so the first frame draws immediately
    app.start_refresh(&sync_service);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let refresher = sync_service.spawn_auto_refresh(
        Duration::from_secs(config.sync.auto_refresh_interval_secs),
        event_tx,
    );

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &sync_service, &mut event_rx).await;

    refresher.abort();

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    storage.close().await?;
    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    sync_service: &SyncService,
    events: &mut mpsc::UnboundedReceiver<SyncEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Handle events with a timeout to allow for async operations
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let _handled = handle_events(Event::Key(key), app, sync_service).await?;
            }
        }

        while let Ok(event) = events.try_recv() {
            app.apply_sync_event(event);
        }

        app.poll_background(sync_service).await;
        app.expire_toast();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    let chunks = LayoutManager::main_layout(f.area());

    Header::render(f, chunks[0], app);
    SearchBar::render(f, chunks[1], app);
    ItemList::render(f, chunks[2], app);
    StatusBar::render(f, chunks[3], app);

    if app.form.is_some() {
        ReportFormDialog::render(f, app);
    }

    if app.cloud_info.is_some() {
        CloudInfoDialog::render(f, app);
    }

    if app.show_logs {
        DebugDialog::render(f, app);
    }

    // Help panel stays above the dialogs
    if app.show_help {
        HelpPanel::render(f);
    }

    // Notifications float over everything
    ToastPopup::render(f, app);
}
