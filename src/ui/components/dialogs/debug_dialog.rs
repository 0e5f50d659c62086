//! Debug dialog component for displaying debug logs

use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::ui::app::App;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Debug dialog component for displaying debug logs
pub struct DebugDialog;

impl DebugDialog {
    /// Render the debug dialog
    pub fn render(frame: &mut Frame, app: &App) {
        let area = frame.area();
        // Calculate modal size - take 80% of the screen
        let modal_width = area.width.saturating_mul(8) / 10;
        let modal_height = area.height.saturating_mul(8) / 10;

        let modal_area = Rect {
            x: area.x + (area.width.saturating_sub(modal_width)) / 2,
            y: area.y + (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(DIALOG_TITLE_DEBUG_LOGS)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(block, modal_area);

        let inner_area = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        let logs = app.logger.get_logs();
        if logs.is_empty() {
            let no_logs = Paragraph::new("No debug logs available")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            frame.render_widget(no_logs, inner_area);
            return;
        }

        let visible_height = inner_area.height as usize;
        let start_index = app.logs_scroll.min(logs.len().saturating_sub(1));

        let items: Vec<ListItem> = logs
            .iter()
            .skip(start_index)
            .take(visible_height)
            .map(|log| Self::log_line(log))
            .collect();

        frame.render_widget(List::new(items), inner_area);
    }

    /// Split "[time] LEVEL message" and color by level
    fn log_line(log: &str) -> ListItem<'_> {
        let Some(bracket_end) = log.find("] ") else {
            return ListItem::new(Line::from(Span::styled(log, Style::default().fg(Color::Gray))));
        };
        let timestamp = &log[..=bracket_end];
        let message = &log[bracket_end + 2..];

        let message_style = if message.starts_with("ERROR") {
            Style::default().fg(Color::Red)
        } else if message.starts_with("WARN") {
            Style::default().fg(Color::Yellow)
        } else if message.starts_with("DEBUG") || message.starts_with("TRACE") {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        ListItem::new(Line::from(vec![
            Span::styled(format!("{timestamp} "), Style::default().fg(Color::DarkGray)),
            Span::styled(message, message_style),
        ]))
    }
}
