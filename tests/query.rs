use lostfound::item::{demo_items, FilterType};
use lostfound::query::{query, ItemStats};

fn ids(filter: FilterType, search: &str) -> Vec<i64> {
    let items = demo_items();
    query(&items, filter, search).iter().map(|i| i.id).collect()
}

#[test]
fn test_all_with_blank_search_returns_everything_in_order() {
    assert_eq!(ids(FilterType::All, ""), vec![1, 2, 3]);
    assert_eq!(ids(FilterType::All, "   "), vec![1, 2, 3]);
}

#[test]
fn test_type_filter() {
    assert_eq!(ids(FilterType::Lost, ""), vec![1, 3]);
    assert_eq!(ids(FilterType::Found, ""), vec![2]);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    assert_eq!(ids(FilterType::All, "LIBRARY"), vec![1]);
    assert_eq!(ids(FilterType::All, "sticker"), vec![2]);
    assert_eq!(ids(FilterType::All, "amit"), vec![3]);
    assert_eq!(ids(FilterType::All, "BOTTLE"), vec![2]);
}

#[test]
fn test_search_does_not_look_at_contact() {
    assert!(ids(FilterType::All, "campus.edu").is_empty());
}

#[test]
fn test_filter_and_search_combine() {
    assert_eq!(ids(FilterType::Found, "blue").len(), 0);
    assert_eq!(ids(FilterType::Lost, "blue"), vec![1, 3]);
}

#[test]
fn test_stats_count_whole_list() {
    let stats = ItemStats::from_items(&demo_items());
    assert_eq!(stats, ItemStats { lost: 2, found: 1, total: 3 });
    assert_eq!(ItemStats::from_items(&[]), ItemStats::default());
}
