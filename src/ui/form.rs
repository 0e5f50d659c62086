//! Report form state.

use crate::item::{ItemType, NewItem};

/// Fields of the report form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Location,
    Date,
    Description,
    ReporterName,
    Contact,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Location,
        FormField::Date,
        FormField::Description,
        FormField::ReporterName,
        FormField::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Item name *",
            FormField::Location => "Location *",
            FormField::Date => "Date (YYYY-MM-DD) *",
            FormField::Description => "Description *",
            FormField::ReporterName => "Your name",
            FormField::Contact => "Contact *",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// An open report form: the values typed so far and the focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportForm {
    pub input: NewItem,
    pub focus: FormField,
    /// Set while the save runs so Enter is not sent twice
    pub submitting: bool,
}

impl ReportForm {
    pub fn new(item_type: ItemType) -> Self {
        Self {
            input: NewItem::blank(item_type),
            focus: FormField::Name,
            submitting: false,
        }
    }

    pub fn title(&self) -> String {
        match self.input.item_type {
            ItemType::Lost => "📝 Report Lost Item".to_string(),
            ItemType::Found => "📝 Report Found Item".to_string(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.input.name,
            FormField::Location => &self.input.location,
            FormField::Date => &self.input.date,
            FormField::Description => &self.input.description,
            FormField::ReporterName => &self.input.reporter_name,
            FormField::Contact => &self.input.contact,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.input.name,
            FormField::Location => &mut self.input.location,
            FormField::Date => &mut self.input.date,
            FormField::Description => &mut self.input.description,
            FormField::ReporterName => &mut self.input.reporter_name,
            FormField::Contact => &mut self.input.contact,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }
}
