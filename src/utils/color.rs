use ratatui::style::Color;

use crate::item::ItemType;
use crate::ui::toast::ToastKind;

/// Accent color for an item type badge
#[must_use]
pub fn item_type_color(item_type: ItemType) -> Color {
    match item_type {
        ItemType::Lost => Color::Rgb(231, 76, 60),
        ItemType::Found => Color::Rgb(46, 204, 113),
    }
}

/// Background color for a toast notification
#[must_use]
pub fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Rgb(46, 204, 113),
        ToastKind::Error => Color::Rgb(231, 76, 60),
        ToastKind::Warning => Color::Rgb(243, 156, 18),
        ToastKind::Info => Color::Rgb(52, 152, 219),
    }
}
