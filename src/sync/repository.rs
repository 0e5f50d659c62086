//! In-memory item repository for the current session.

use crate::item::{FilterType, Item};
use crate::query::{query, ItemStats};

/// The authoritative item list plus the view derived from the active query.
///
/// `filtered_items` is recomputed whenever the items, the filter or the
/// search text change; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    items: Vec<Item>,
    filtered_items: Vec<Item>,
    current_filter: FilterType,
    search_text: String,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filtered_items(&self) -> &[Item] {
        &self.filtered_items
    }

    pub fn current_filter(&self) -> FilterType {
        self.current_filter
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn stats(&self) -> ItemStats {
        ItemStats::from_items(&self.items)
    }

    pub fn contains_id(&self, id: i64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Replace every item with a freshly loaded list
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.refilter();
    }

    /// Append a newly reported item
    pub fn append(&mut self, item: Item) {
        self.items.push(item);
        self.refilter();
    }

    pub fn set_filter(&mut self, filter: FilterType) {
        self.current_filter = filter;
        self.refilter();
    }

    pub fn set_search(&mut self, search: &str) {
        self.search_text = search.to_string();
        self.refilter();
    }

    /// Smallest id at or above `candidate` that no item uses yet
    pub fn unused_id(&self, candidate: i64) -> i64 {
        let mut id = candidate;
        while self.contains_id(id) {
            id += 1;
        }
        id
    }

    fn refilter(&mut self) {
        self.filtered_items = query(&self.items, self.current_filter, &self.search_text)
            .into_iter()
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::demo_items;

    #[test]
    fn filter_survives_item_replacement() {
        let mut repo = Repository::new();
        repo.set_filter(FilterType::Lost);
        repo.replace_items(demo_items());
        let ids: Vec<i64> = repo.filtered_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn append_refreshes_view() {
        let mut repo = Repository::new();
        repo.set_search("water");
        repo.replace_items(demo_items()[..1].to_vec());
        assert!(repo.filtered_items().is_empty());
        repo.append(demo_items()[1].clone());
        assert_eq!(repo.filtered_items().len(), 1);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn unused_id_skips_taken_ids() {
        let mut repo = Repository::new();
        repo.replace_items(demo_items());
        assert_eq!(repo.unused_id(2), 4);
        assert_eq!(repo.unused_id(10), 10);
    }
}
