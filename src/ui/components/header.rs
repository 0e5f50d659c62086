//! Header with the board title, item counts and sync indicator

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::LAST_SYNC_FORMAT;
use crate::item::ItemType;
use crate::sync::SyncState;
use crate::utils::{color, datetime};

/// Header component
pub struct Header;

impl Header {
    /// Render the header
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" 🎒 Campus Lost & Found ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let stats = Line::from(vec![
            Span::styled(
                format!("{} Lost", app.stats.lost),
                Style::default()
                    .fg(color::item_type_color(ItemType::Lost))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} Found", app.stats.found),
                Style::default()
                    .fg(color::item_type_color(ItemType::Found))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("{} Total", app.stats.total), Style::default().fg(Color::White)),
        ]);
        f.render_widget(Paragraph::new(stats), halves[0]);

        let mut sync = vec![Span::styled(
            format!("{} {}", Self::status_icon(&app.sync_state), app.sync_state.label()),
            Style::default().fg(Self::status_color(&app.sync_state)),
        )];
        if let Some(last_sync) = app.last_sync {
            sync.push(Span::styled(
                format!(" • Last sync {}", datetime::format_local_time(last_sync, LAST_SYNC_FORMAT)),
                Style::default().fg(Color::Gray),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(sync)).alignment(Alignment::Right), halves[1]);
    }

    fn status_icon(state: &SyncState) -> &'static str {
        match state {
            SyncState::Idle => "○",
            SyncState::Syncing | SyncState::Saving => "🔄",
            SyncState::Synced { .. } | SyncState::Saved => "●",
            SyncState::SavedLocally => "◐",
            SyncState::SyncFailed { .. } | SyncState::SaveFailed { .. } => "✖",
        }
    }

    fn status_color(state: &SyncState) -> Color {
        match state {
            SyncState::Idle => Color::Gray,
            SyncState::Syncing | SyncState::Saving => Color::Yellow,
            SyncState::Synced { .. } | SyncState::Saved => Color::Green,
            SyncState::SavedLocally => Color::Rgb(243, 156, 18),
            SyncState::SyncFailed { .. } | SyncState::SaveFailed { .. } => Color::Red,
        }
    }
}
