//! File-backed utilities

pub mod keyed_db;
pub mod migrate;

pub use keyed_db::KeyedDb;
pub use migrate::migrate_file;
