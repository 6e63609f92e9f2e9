// src/recent.rs
use crate::core::types::RecentSearch;
use serde::{Deserialize, Serialize};

pub const MAX_RECENT: usize = 10;

/// Bounded recency list of past resolutions, newest first. Entries are
/// identified by their `(card_name, card_type)` pair: re-adding an existing
/// pair drops the old entry before prepending the new one, so the list
/// never holds duplicates and never exceeds [`MAX_RECENT`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentSearches {
    items: Vec<RecentSearch>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<RecentSearch>) -> Self {
        let mut list = Self::new();
        for entry in items.into_iter().rev() {
            list.push(entry);
        }
        list
    }

    pub fn push(&mut self, entry: RecentSearch) {
        self.items
            .retain(|s| !(s.card_name == entry.card_name && s.card_type == entry.card_type));
        self.items.insert(0, entry);
        self.items.truncate(MAX_RECENT);
    }

    pub fn items(&self) -> &[RecentSearch] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CardType;

    fn entry(name: &str, card_type: CardType, ja: &str) -> RecentSearch {
        RecentSearch {
            card_name: name.to_string(),
            card_type,
            japanese_text: ja.to_string(),
            timestamp_ms: 0,
        }
    }

    #[test]
    fn newest_entry_goes_first() {
        let mut list = RecentSearches::new();
        list.push(entry("a", CardType::Ygo, "ア"));
        list.push(entry("b", CardType::Ygo, "ブ"));
        assert_eq!(list.items()[0].card_name, "b");
        assert_eq!(list.items()[1].card_name, "a");
    }

    #[test]
    fn same_name_and_type_replaces_rather_than_duplicates() {
        let mut list = RecentSearches::new();
        list.push(entry("a", CardType::Ygo, "古"));
        list.push(entry("b", CardType::Ygo, "ブ"));
        list.push(entry("a", CardType::Ygo, "新"));

        assert_eq!(list.items().len(), 2);
        assert_eq!(list.items()[0].card_name, "a");
        assert_eq!(list.items()[0].japanese_text, "新");
    }

    #[test]
    fn same_name_different_type_is_a_distinct_entry() {
        let mut list = RecentSearches::new();
        list.push(entry("a", CardType::Ygo, "ア"));
        list.push(entry("a", CardType::Mtg, "ア"));
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn never_exceeds_the_cap() {
        let mut list = RecentSearches::new();
        for i in 0..25 {
            list.push(entry(&format!("card {i}"), CardType::Digi, "カ"));
        }
        assert_eq!(list.items().len(), MAX_RECENT);
        assert_eq!(list.items()[0].card_name, "card 24");
    }

    #[test]
    fn from_items_preserves_order_and_dedups() {
        let items = vec![
            entry("a", CardType::Ygo, "一"),
            entry("b", CardType::Ygo, "二"),
            entry("a", CardType::Ygo, "三"),
        ];
        let list = RecentSearches::from_items(items);
        // First occurrence is the newest; the stale duplicate is dropped.
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.items()[0].card_name, "a");
        assert_eq!(list.items()[0].japanese_text, "一");
    }
}
