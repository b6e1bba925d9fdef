//! Locations table controller
//!
//! Wires view parameters, collection state, the mutation coordinator and the
//! debounced search input into one table view over a remote store. Every
//! parameter change refetches the full collection (the remote store offers
//! no query pushdown) and the caller re-reads [`visible`] for the new slice.
//!
//! [`visible`]: LocationsTable::visible

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::constants::SEARCH_DEBOUNCE_MS;
use crate::domain::{Location, LocationDraft, SortKey};
use crate::error::{Error, Result};
use crate::eventing::{AppEvent, EventSender};
use crate::helpers::Debouncer;
use crate::services::MutationCoordinator;
use crate::services::rest::RemoteStore;
use crate::state::{CollectionState, LoadState, ViewParams};
use crate::table::engine::{VisibleSlice, compute_view};

struct TableInner<S> {
    store: Arc<S>,
    params: Mutex<ViewParams>,
    collection: Mutex<CollectionState>,
    events: EventSender,
}

impl<S: RemoteStore> TableInner<S> {
    /// Refetch the collection. A refresh begun after this one supersedes it;
    /// in that case the stale result is dropped without emitting events.
    async fn refresh(&self) -> Result<()> {
        let token = self.collection.lock().await.begin_refresh();
        let result = self.store.fetch_all().await;
        let failure = result.as_ref().err().map(|err| err.to_string());

        let mut collection = self.collection.lock().await;
        if collection.finish_refresh(token, result) {
            match collection.load_state() {
                LoadState::Ready => {
                    self.events.send(AppEvent::CollectionRefreshed { count: collection.len() });
                }
                LoadState::Error(_) => {
                    self.events.send(AppEvent::toast_error("Failed to load locations!"));
                }
                _ => {}
            }
        }

        match failure {
            Some(message) => Err(Error::FetchFailed { message }),
            None => Ok(()),
        }
    }

    async fn apply_search(&self, text: String) {
        self.params.lock().await.set_search(text);
        // Debounce fires detached; a failed refetch is already reported
        // through the event channel.
        let _ = self.refresh().await;
    }
}

/// A searchable, sortable, paginated view over the remote locations store
pub struct LocationsTable<S: RemoteStore> {
    inner: Arc<TableInner<S>>,
    mutations: MutationCoordinator<S>,
    search_debounce: Debouncer<String>,
}

impl<S: RemoteStore> LocationsTable<S> {
    /// Create a table over `store` with the default search debounce window
    pub fn new(store: S, events: EventSender) -> Self {
        Self::with_debounce_window(store, events, Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }

    /// Create a table with a custom debounce quiet window
    pub fn with_debounce_window(store: S, events: EventSender, window: Duration) -> Self {
        let store = Arc::new(store);
        let inner = Arc::new(TableInner {
            store: store.clone(),
            params: Mutex::new(ViewParams::new()),
            collection: Mutex::new(CollectionState::new()),
            events: events.clone(),
        });

        let debounce_target = inner.clone();
        let search_debounce = Debouncer::new(window, move |text: String| {
            let inner = debounce_target.clone();
            tokio::spawn(async move {
                inner.apply_search(text).await;
            });
        });

        Self {
            inner,
            mutations: MutationCoordinator::new(store, events),
            search_debounce,
        }
    }

    // ==================== View ====================

    /// Refetch the collection and recompute
    pub async fn refresh(&self) -> Result<()> {
        self.inner.refresh().await
    }

    /// Current visible slice (filtered, sorted, paged)
    pub async fn visible(&self) -> VisibleSlice {
        let collection = self.inner.collection.lock().await;
        let params = self.inner.params.lock().await;
        compute_view(collection.rows(), &params)
    }

    /// Load state of the collection, for status display
    pub async fn load_state(&self) -> LoadState {
        self.inner.collection.lock().await.load_state().clone()
    }

    /// Snapshot of the current view parameters
    pub async fn params(&self) -> ViewParams {
        self.inner.params.lock().await.clone()
    }

    // ==================== Parameter changes ====================

    /// Raw keystroke from the search box; forwarded to the view after the
    /// debounce quiet window, superseded values dropped
    pub fn search_input(&self, text: impl Into<String>) {
        self.search_debounce.submit(text.into());
    }

    /// Set the search text immediately, bypassing the debounce
    pub async fn set_search(&self, text: impl Into<String>) -> Result<()> {
        self.inner.params.lock().await.set_search(text);
        self.inner.refresh().await
    }

    /// Select a sort column (same column toggles direction)
    pub async fn set_sort(&self, key: SortKey) -> Result<()> {
        self.inner.params.lock().await.set_sort(key);
        self.inner.refresh().await
    }

    pub async fn set_page_index(&self, index: usize) -> Result<()> {
        self.inner.params.lock().await.set_page_index(index);
        self.inner.refresh().await
    }

    /// Set rows per page; the view returns to the first page
    pub async fn set_page_size(&self, size: usize) -> Result<()> {
        self.inner.params.lock().await.set_page_size(size);
        self.inner.refresh().await
    }

    // ==================== Mutations ====================

    /// Create a location and refresh on success
    pub async fn create(&self, draft: &LocationDraft) -> Result<Location> {
        let created = self.mutations.create(draft).await?;
        self.inner.refresh().await?;
        Ok(created)
    }

    /// Update a location and refresh on success
    pub async fn update(&self, id: &str, draft: &LocationDraft) -> Result<Location> {
        let updated = self.mutations.update(id, draft).await?;
        self.inner.refresh().await?;
        Ok(updated)
    }

    /// Delete a location and refresh on success.
    ///
    /// Callers should gate this behind a user confirmation while
    /// [`delete_requires_confirmation`] is true.
    ///
    /// [`delete_requires_confirmation`]: LocationsTable::delete_requires_confirmation
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.mutations.delete(id).await?;
        self.inner.refresh().await
    }

    /// Whether deletes must be confirmed by the user first
    pub fn delete_requires_confirmation(&self) -> bool {
        self.mutations.delete_requires_confirmation()
    }
}
