//! Dialog for reporting a lost or found item

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin},
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{self, shortcuts};
use crate::ui::app::App;
use crate::ui::form::FormField;
use crate::ui::layout::LayoutManager;
use crate::utils::color;

pub struct ReportFormDialog;

impl ReportFormDialog {
    pub fn render(f: &mut Frame, app: &App) {
        let Some(form) = app.form.as_ref() else {
            return;
        };

        // Six 3-line fields plus instructions and borders
        let area = LayoutManager::centered_rect_lines(60, 23, f.area());
        f.render_widget(Clear, area);

        let title = format!(" {} ", form.title());
        let theme = color::item_type_color(form.input.item_type);
        f.render_widget(common::create_dialog_block(&title, theme), area);

        let inner = area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });
        let mut constraints: Vec<Constraint> = FormField::ALL.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(1));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (i, field) in FormField::ALL.iter().enumerate() {
            let input = common::create_input_paragraph(form.value(*field), field.label(), *field == form.focus);
            f.render_widget(input, chunks[i]);
        }

        let footer = chunks[FormField::ALL.len()];
        if form.submitting {
            let saving = Paragraph::new("🔄 Saving...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            f.render_widget(saving, footer);
        } else {
            let instructions = common::create_instructions_paragraph(&[
                shortcuts::ENTER_SUBMIT,
                shortcuts::SEPARATOR,
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                shortcuts::ESC_CANCEL,
            ]);
            f.render_widget(instructions, footer);
        }
    }
}
