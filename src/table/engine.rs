//! View engine
//!
//! Pure derivation of the visible table slice from the fetched collection
//! and the current view parameters. Fixed pipeline: filter, then sort, then
//! page - the total count reflects the filter but never the page window.

use crate::domain::{Location, SortOrder};
use crate::state::ViewParams;

/// The filtered/sorted/paged subset actually shown, plus the total
/// number of rows matching the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleSlice {
    pub items: Vec<Location>,
    pub total_count: usize,
}

/// Derive the visible slice. No I/O, no side effects; identical inputs
/// give identical output.
pub fn compute_view(rows: &[Location], params: &ViewParams) -> VisibleSlice {
    let needle = params.search().to_lowercase();

    let mut filtered: Vec<&Location> =
        rows.iter().filter(|row| row.matches(&needle)).collect();

    // Vec::sort_by is stable, so rows with equal keys keep their fetch
    // order in both directions.
    let key = params.sort_key();
    match params.sort_order() {
        SortOrder::Asc => filtered.sort_by(|a, b| a.field(key).cmp(b.field(key))),
        SortOrder::Desc => filtered.sort_by(|a, b| b.field(key).cmp(a.field(key))),
    }

    let total_count = filtered.len();
    let start = params.page_index().saturating_mul(params.page_size());
    let items = if start >= total_count {
        Vec::new()
    } else {
        let end = (start + params.page_size()).min(total_count);
        filtered[start..end].iter().map(|row| (*row).clone()).collect()
    };

    VisibleSlice { items, total_count }
}
