//! Lost-and-found item model.
//!
//! Field names serialize in camelCase so the persisted format matches the
//! shared board file (`reporterName`, ISO `date`, RFC 3339 `timestamp`).

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    ANONYMOUS_REPORTER, ERROR_INVALID_DATE, ERROR_MISSING_CONTACT, ERROR_MISSING_DESCRIPTION, ERROR_MISSING_LOCATION,
    ERROR_MISSING_NAME,
};
use crate::utils::datetime;

/// Whether an item was lost or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type filter applied by the query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    #[default]
    All,
    Lost,
    Found,
}

impl FilterType {
    /// Whether an item of the given type passes this filter
    pub fn matches(&self, item_type: ItemType) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Lost => item_type == ItemType::Lost,
            FilterType::Found => item_type == ItemType::Found,
        }
    }

    /// Cycle all → lost → found → all
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FilterType::All => FilterType::Lost,
            FilterType::Lost => FilterType::Found,
            FilterType::Found => FilterType::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterType::All => "All items",
            FilterType::Lost => "Lost only",
            FilterType::Found => "Found only",
        }
    }
}

/// A reported lost or found item. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reporter_name: String,
    #[serde(default)]
    pub contact: String,
    pub timestamp: DateTime<Utc>,
}

impl Item {
    /// Reporter name for display, falling back to "Anonymous"
    pub fn reporter_display(&self) -> &str {
        if self.reporter_name.trim().is_empty() {
            ANONYMOUS_REPORTER
        } else {
            &self.reporter_name
        }
    }

    /// Text the search engine matches against
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.description, self.location, self.reporter_name
        )
        .to_lowercase()
    }
}

/// Raw report form input, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub item_type: ItemType,
    pub name: String,
    pub location: String,
    pub date: String,
    pub description: String,
    pub reporter_name: String,
    pub contact: String,
}

impl NewItem {
    /// Empty form of the given type with today's date pre-filled
    pub fn blank(item_type: ItemType) -> Self {
        Self {
            item_type,
            name: String::new(),
            location: String::new(),
            date: datetime::format_today(),
            description: String::new(),
            reporter_name: String::new(),
            contact: String::new(),
        }
    }

    /// Check the required fields and the date format
    pub fn validate(&self) -> Result<NaiveDate, &'static str> {
        if self.name.trim().is_empty() {
            return Err(ERROR_MISSING_NAME);
        }
        if self.location.trim().is_empty() {
            return Err(ERROR_MISSING_LOCATION);
        }
        if self.description.trim().is_empty() {
            return Err(ERROR_MISSING_DESCRIPTION);
        }
        if self.contact.trim().is_empty() {
            return Err(ERROR_MISSING_CONTACT);
        }
        datetime::parse_date(&self.date).map_err(|_| ERROR_INVALID_DATE)
    }

    /// Validate and stamp the form into an [`Item`]
    pub fn into_item(self, id: i64, timestamp: DateTime<Utc>) -> Result<Item, &'static str> {
        let date = self.validate()?;
        Ok(Item {
            id,
            item_type: self.item_type,
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            date,
            description: self.description.trim().to_string(),
            reporter_name: self.reporter_name.trim().to_string(),
            contact: self.contact.trim().to_string(),
            timestamp,
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_item(
    id: i64,
    item_type: ItemType,
    name: &str,
    location: &str,
    date: (i32, u32, u32),
    description: &str,
    reporter: &str,
    contact: &str,
    at: (u32, u32),
) -> Item {
    let (y, m, d) = date;
    let day = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let timestamp = Utc
        .with_ymd_and_hms(y, m, d, at.0, at.1, 0)
        .single()
        .unwrap_or_default();
    Item {
        id,
        item_type,
        name: name.to_string(),
        location: location.to_string(),
        date: day,
        description: description.to_string(),
        reporter_name: reporter.to_string(),
        contact: contact.to_string(),
        timestamp,
    }
}

/// Built-in sample board used when neither the cloud nor a backup is available
pub fn demo_items() -> Vec<Item> {
    vec![
        demo_item(
            1,
            ItemType::Lost,
            "Student ID Card",
            "Library",
            (2023, 11, 15),
            "Blue cover, 2024 batch, Computer Science",
            "Rahul",
            "rahul@campus.edu",
            (10, 30),
        ),
        demo_item(
            2,
            ItemType::Found,
            "Water Bottle",
            "Cafeteria",
            (2023, 11, 16),
            "Metal, 1L, with Save Earth sticker",
            "Priya",
            "priya@campus.edu",
            (14, 20),
        ),
        demo_item(
            3,
            ItemType::Lost,
            "Calculator",
            "Lab Building",
            (2023, 11, 14),
            "Casio fx-991EX, black, in blue case",
            "Amit",
            "amit@campus.edu",
            (9, 15),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewItem {
        NewItem {
            item_type: ItemType::Lost,
            name: "  Keys ".to_string(),
            location: "Gym".to_string(),
            date: "2024-03-02".to_string(),
            description: "Three keys on a red ring".to_string(),
            reporter_name: String::new(),
            contact: "sam@campus.edu".to_string(),
        }
    }

    #[test]
    fn into_item_trims_and_stamps() {
        let at = Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap();
        let item = form().into_item(42, at).unwrap();
        assert_eq!(item.id, 42);
        assert_eq!(item.name, "Keys");
        assert_eq!(item.timestamp, at);
        assert_eq!(item.reporter_display(), "Anonymous");
    }

    #[test]
    fn validate_rejects_missing_contact() {
        let mut f = form();
        f.contact = "   ".to_string();
        assert_eq!(f.validate(), Err(ERROR_MISSING_CONTACT));
    }

    #[test]
    fn validate_rejects_bad_date() {
        let mut f = form();
        f.date = "02/03/2024".to_string();
        assert_eq!(f.validate(), Err(ERROR_INVALID_DATE));
    }

    #[test]
    fn serializes_with_board_field_names() {
        let json = serde_json::to_value(&demo_items()[1]).unwrap();
        assert_eq!(json["type"], "found");
        assert_eq!(json["reporterName"], "Priya");
        assert_eq!(json["date"], "2023-11-16");
    }

    #[test]
    fn filter_cycles_through_all_types() {
        let f = FilterType::All;
        assert_eq!(f.next(), FilterType::Lost);
        assert_eq!(f.next().next(), FilterType::Found);
        assert_eq!(f.next().next().next(), FilterType::All);
        assert!(FilterType::Found.matches(ItemType::Found));
        assert!(!FilterType::Found.matches(ItemType::Lost));
    }
}
