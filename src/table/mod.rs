//! Table view pipeline

pub mod controller;
pub mod engine;

pub use controller::LocationsTable;
pub use engine::{VisibleSlice, compute_view};
