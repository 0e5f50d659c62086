//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::layout::LayoutManager;

const HELP_TEXT: &str = r"
CAMPUS LOST & FOUND
===================

BROWSING
--------
j/k, ↑/↓    Move through the list
/           Search name, description, location or reporter
Tab         Cycle filter: All, Lost, Found
Esc         Clear the search

REPORTING
---------
l           Report a lost item
f           Report a found item
Tab/↑/↓     Move between form fields
Enter       Submit the report
Esc         Cancel

SYNC
----
r           Reload the board from the cloud
i           Show cloud file info
            The board also reloads on its own every few seconds

GENERAL
-------
g           Show debug logs
?           Toggle this help
q, Ctrl+C   Quit

Press 'Esc' or '?' to close this help panel
";

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame) {
        let screen = f.area();
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen.width, screen.height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, screen);
        f.render_widget(Clear, help_area);

        let help = Paragraph::new(HELP_TEXT)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        f.render_widget(help, help_area);
    }
}
