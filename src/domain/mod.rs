//! Domain model

pub mod location;

pub use location::{Location, LocationDraft, SortKey, SortOrder};
