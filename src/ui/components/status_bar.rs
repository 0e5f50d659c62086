//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::sync::SyncState;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = match &app.sync_state {
            SyncState::Syncing => "🔄 Loading items from cloud...".to_string(),
            SyncState::Saving => "🔄 Saving item...".to_string(),
            SyncState::SyncFailed { message } | SyncState::SaveFailed { message } => format!("⚠️  {message}"),
            _ if app.search_active => "Type to search • Enter: keep • Esc: clear".to_string(),
            _ => "l: lost • f: found • /: search • Tab: filter • r: refresh • ?: help • q: quit".to_string(),
        };

        let status_color = match &app.sync_state {
            state if state.is_busy() => Color::Yellow,
            SyncState::SyncFailed { .. } | SyncState::SaveFailed { .. } => Color::Red,
            _ => Color::Gray,
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
