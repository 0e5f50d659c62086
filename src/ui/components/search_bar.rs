//! Search box and type filter tabs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::item::FilterType;

/// Search bar component
pub struct SearchBar;

impl SearchBar {
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(30)])
            .split(area);

        let border_color = if app.search_active { Color::Yellow } else { Color::DarkGray };
        let text = if app.search_active {
            format!("{}█", app.search_text)
        } else if app.search_text.is_empty() {
            "Press / to search by name, description, location or reporter".to_string()
        } else {
            app.search_text.clone()
        };
        let text_color = if app.search_active || !app.search_text.is_empty() {
            Color::White
        } else {
            Color::DarkGray
        };

        let search = Paragraph::new(text).style(Style::default().fg(text_color)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" 🔍 Search ")
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(search, chunks[0]);

        let mut tabs = Vec::new();
        for filter in [FilterType::All, FilterType::Lost, FilterType::Found] {
            let style = if filter == app.current_filter {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            tabs.push(Span::styled(format!(" {} ", filter.label()), style));
            tabs.push(Span::raw(" "));
        }

        let filters = Paragraph::new(Line::from(tabs)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Tab: Filter ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(filters, chunks[1]);
    }
}
