//! Floating notification in the bottom-right corner

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::utils::color;

pub struct ToastPopup;

impl ToastPopup {
    pub fn render(f: &mut Frame, app: &App) {
        let Some(toast) = app.toast.as_ref() else {
            return;
        };

        let width = u16::try_from(toast.message.chars().count()).unwrap_or(u16::MAX);
        let area = LayoutManager::toast_area(width, f.area());
        let bg = color::toast_color(toast.kind);

        f.render_widget(Clear, area);
        let popup = Paragraph::new(toast.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(bg).bg(bg)),
            );
        f.render_widget(popup, area);
    }
}
