//! View parameters
//!
//! The user-controlled search/sort/paging state of the table view.

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::{SortKey, SortOrder};

/// Search, sort and paging state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParams {
    search: String,
    sort_key: SortKey,
    sort_order: SortOrder,
    page_index: usize,
    page_size: usize,
}

impl ViewParams {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            sort_key: SortKey::Name,
            sort_order: SortOrder::Asc,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Select a sort column. Selecting the current column toggles the
    /// direction; a new column starts ascending.
    pub fn set_sort(&mut self, key: SortKey) {
        if key == self.sort_key {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_key = key;
            self.sort_order = SortOrder::Asc;
        }
    }

    pub fn set_page_index(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Set rows per page and return to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 0;
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ViewParams::new();
        assert_eq!(params.search(), "");
        assert_eq!(params.sort_key(), SortKey::Name);
        assert_eq!(params.sort_order(), SortOrder::Asc);
        assert_eq!(params.page_index(), 0);
        assert_eq!(params.page_size(), 10);
    }

    #[test]
    fn test_same_key_toggles_order() {
        let mut params = ViewParams::new();
        params.set_sort(SortKey::Name);
        assert_eq!(params.sort_order(), SortOrder::Desc);
        params.set_sort(SortKey::Name);
        assert_eq!(params.sort_order(), SortOrder::Asc);
        params.set_sort(SortKey::Name);
        assert_eq!(params.sort_order(), SortOrder::Desc);
    }

    #[test]
    fn test_new_key_starts_ascending() {
        let mut params = ViewParams::new();
        params.set_sort(SortKey::Name); // now desc
        params.set_sort(SortKey::City);
        assert_eq!(params.sort_key(), SortKey::City);
        assert_eq!(params.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn test_page_size_resets_page_index() {
        let mut params = ViewParams::new();
        params.set_page_index(3);
        params.set_page_size(20);
        assert_eq!(params.page_size(), 20);
        assert_eq!(params.page_index(), 0);
    }

    #[test]
    fn test_search_keeps_page_index() {
        // Only a page-size change resets the window; a narrowed filter may
        // leave the current page empty, which the engine reports as an empty
        // slice with the correct total.
        let mut params = ViewParams::new();
        params.set_page_index(2);
        params.set_search("ban");
        assert_eq!(params.page_index(), 2);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let mut params = ViewParams::new();
        params.set_page_size(0);
        assert_eq!(params.page_size(), 1);
    }
}
