//! Locations Admin Client Library
//!
//! Headless core for a locations CRUD admin: a remote collection fetched in
//! full, a pure filter/sort/page view engine, debounced search, and a
//! mutation coordinator that refreshes the view after successful writes.

pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod helpers;
pub mod services;
pub mod state;
pub mod table;
pub mod utils;

pub use domain::{Location, LocationDraft, SortKey, SortOrder};
pub use error::{Error, Result};
pub use table::{LocationsTable, VisibleSlice};
