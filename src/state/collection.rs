//! Collection state
//!
//! Holds the full remote collection as of the last completed fetch, plus a
//! load state for the embedding layer. Refreshes are ordered by a generation
//! token so a slow in-flight fetch can never overwrite a newer one.

use std::sync::Arc;

use crate::domain::Location;
use crate::error::Error;

/// Load state of the collection, for status display
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(Arc<str>),
}

/// In-memory copy of the remote collection
#[derive(Debug, Default)]
pub struct CollectionState {
    rows: Vec<Location>,
    load_state: LoadState,
    generation: u64,
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Location] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Start a refresh: bump the generation and mark the state loading.
    /// The returned token must be handed back to [`finish_refresh`].
    ///
    /// [`finish_refresh`]: CollectionState::finish_refresh
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.load_state = LoadState::Loading;
        self.generation
    }

    /// Complete a refresh started with `token`.
    ///
    /// A stale token (a newer refresh has begun since) is discarded and
    /// returns `false` - last refresh wins. On success the rows are replaced
    /// wholesale; on error the rows are cleared so no partial data survives,
    /// and the error message is kept for display.
    pub fn finish_refresh(
        &mut self,
        token: u64,
        result: Result<Vec<Location>, Error>,
    ) -> bool {
        if token != self.generation {
            tracing::debug!(token, current = self.generation, "Discarding stale refresh");
            return false;
        }

        match result {
            Ok(rows) => {
                tracing::debug!(count = rows.len(), "Collection refreshed");
                self.rows = rows;
                self.load_state = LoadState::Ready;
            }
            Err(err) => {
                tracing::warn!("Collection refresh failed: {err}");
                self.rows.clear();
                self.load_state = LoadState::Error(err.to_string().into());
            }
        }
        true
    }
}
