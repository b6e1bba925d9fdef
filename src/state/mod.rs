//! Owned state for the table view

pub mod collection;
pub mod view_params;

pub use collection::{CollectionState, LoadState};
pub use view_params::ViewParams;
