//! Dialog describing the shared cloud file

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{self, shortcuts};
use crate::ui::app::App;
use crate::ui::layout::LayoutManager;

pub struct CloudInfoDialog;

impl CloudInfoDialog {
    pub fn render(f: &mut Frame, app: &App) {
        let Some(info) = app.cloud_info.as_ref() else {
            return;
        };

        let area = LayoutManager::centered_rect_lines(60, 11, f.area());
        f.render_widget(Clear, area);
        f.render_widget(common::create_dialog_block(" ☁️  Cloud File ", Color::Cyan), area);

        let inner = area.inner(Margin {
            vertical: 1,
            horizontal: 2,
        });
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let label = Style::default().fg(Color::Gray);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let last_upload = info.last_upload.as_deref().unwrap_or("never");

        let lines = vec![
            Line::from(vec![Span::styled("File: ", label), Span::styled(info.file_url.as_str(), value)]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Items on the board: ", label),
                Span::styled(info.item_count.to_string(), value),
            ]),
            Line::from(vec![Span::styled("Last upload: ", label), Span::styled(last_upload, value)]),
            Line::from(""),
            Line::from(Span::styled(
                "Reports are shared with everyone who opens the board.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let body = Paragraph::new(lines).alignment(Alignment::Left).wrap(Wrap { trim: true });
        f.render_widget(body, chunks[0]);
        f.render_widget(common::create_instructions_paragraph(&[shortcuts::ESC_CLOSE]), chunks[1]);
    }
}
