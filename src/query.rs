//! Type filter and free-text search over the item list.

use crate::item::{FilterType, Item};

/// Select the items that pass `filter` and contain `search`.
///
/// Search is a case-insensitive substring match against name, description,
/// location and reporter name joined by spaces. Blank search text matches
/// everything. Order is preserved.
pub fn query<'a>(items: &'a [Item], filter: FilterType, search: &str) -> Vec<&'a Item> {
    let needle = search.trim().to_lowercase();

    items
        .iter()
        .filter(|item| filter.matches(item.item_type))
        .filter(|item| needle.is_empty() || item.search_haystack().contains(&needle))
        .collect()
}

/// Lost, found and total counts over the whole item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemStats {
    pub lost: usize,
    pub found: usize,
    pub total: usize,
}

impl ItemStats {
    pub fn from_items(items: &[Item]) -> Self {
        let lost = items.iter().filter(|i| FilterType::Lost.matches(i.item_type)).count();
        Self {
            lost,
            found: items.len() - lost,
            total: items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::demo_items;

    #[test]
    fn search_spans_reporter_name() {
        let items = demo_items();
        let hits = query(&items, FilterType::All, "priya");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn filter_and_search_combine() {
        let items = demo_items();
        assert!(query(&items, FilterType::Lost, "bottle").is_empty());
        assert_eq!(query(&items, FilterType::Found, "bottle").len(), 1);
    }

    #[test]
    fn whitespace_search_matches_everything() {
        let items = demo_items();
        assert_eq!(query(&items, FilterType::All, "   ").len(), 3);
    }

    #[test]
    fn stats_count_types() {
        let stats = ItemStats::from_items(&demo_items());
        assert_eq!(stats, ItemStats { lost: 2, found: 1, total: 3 });
    }
}
