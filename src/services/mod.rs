//! Remote store access and mutation dispatch

pub mod config;
pub mod mutations;
pub mod rest;

pub use config::ServerConfig;
pub use mutations::MutationCoordinator;
pub use rest::{LocationsApi, RemoteStore};

#[cfg(test)]
pub(crate) mod testing;
