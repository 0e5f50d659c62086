//! Item list component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use crate::constants::{EMPTY_LIST_HINT, EMPTY_LIST_TITLE};
use crate::item::Item;
use crate::utils::{color, datetime};

/// Item list component
pub struct ItemList;

impl ItemList {
    /// Render the item cards, or the empty state when nothing matches
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" 📋 {} ({}) ", app.current_filter.label(), app.items.len()))
            .title_alignment(Alignment::Center);

        if app.items.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("📭", Style::default())),
                Line::from(Span::styled(
                    EMPTY_LIST_TITLE,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(EMPTY_LIST_HINT, Style::default().fg(Color::Gray))),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = app
            .items
            .iter()
            .map(|item| Self::create_item_card(item, &app.date_format, width))
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 44, 52))
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(list, area, &mut app.item_list_state.clone());
    }

    /// One card: header line, three detail lines and a separator
    fn create_item_card<'a>(item: &'a Item, date_format: &str, width: usize) -> ListItem<'a> {
        let accent = color::item_type_color(item.item_type);
        let badge = format!(" {} ", item.item_type.as_str().to_uppercase());

        let header = Line::from(vec![
            Span::styled(
                badge,
                Style::default().fg(Color::Black).bg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                item.name.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  📍 {}", item.location), Style::default().fg(Color::Gray)),
        ]);

        let detail = Style::default().fg(Color::Gray);
        let lines = vec![
            header,
            Line::from(vec![
                Span::styled(
                    format!("  📅 {}", datetime::format_display_date(item.date, date_format)),
                    detail,
                ),
                Span::styled(format!("   👤 Reported by: {}", item.reporter_display()), detail),
            ]),
            Line::from(Span::styled(format!("  📝 {}", item.description), detail)),
            Line::from(Span::styled(format!("  📞 Contact: {}", item.contact), detail)),
            Line::from(Span::styled("─".repeat(width), Style::default().fg(Color::DarkGray))),
        ];

        ListItem::new(lines)
    }
}
