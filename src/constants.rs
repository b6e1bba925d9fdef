//! Crate-wide constants
//!
//! Centralized defaults for the view pipeline and the remote store client.

/// Quiet window for the debounced search input, in milliseconds
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Page sizes offered to the embedding UI
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default remote store endpoint (json-server style)
pub const DEFAULT_BASE_URL: &str = "http://localhost:5002";

/// Resource path on the remote store
pub const LOCATIONS_PATH: &str = "/locations";

/// HTTP request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
