//! Mutation coordinator
//!
//! Validates drafts, dispatches create/update/delete to the remote store,
//! and reports success or failure as toast events. The coordinator never
//! touches the collection state itself; the table controller refreshes after
//! a successful mutation, so a failed one leaves everything untouched.

use std::sync::Arc;

use crate::domain::{Location, LocationDraft};
use crate::error::Result;
use crate::eventing::{AppEvent, EventSender};
use crate::services::rest::RemoteStore;

/// Dispatches mutations against the remote store
pub struct MutationCoordinator<S> {
    store: Arc<S>,
    events: EventSender,
    confirm_delete: bool,
}

impl<S: RemoteStore> MutationCoordinator<S> {
    pub fn new(store: Arc<S>, events: EventSender) -> Self {
        Self { store, events, confirm_delete: true }
    }

    /// Whether callers must obtain an explicit user confirmation before
    /// calling [`delete`](MutationCoordinator::delete)
    pub fn delete_requires_confirmation(&self) -> bool {
        self.confirm_delete
    }

    /// Disable the delete confirmation gate (scripted/batch use)
    pub fn without_delete_confirmation(mut self) -> Self {
        self.confirm_delete = false;
        self
    }

    /// Create a new location from a draft
    pub async fn create(&self, draft: &LocationDraft) -> Result<Location> {
        if let Err(err) = draft.validate() {
            self.events.send(AppEvent::toast_error("All fields are required!"));
            return Err(err);
        }

        match self.store.create(draft).await {
            Ok(created) => {
                tracing::info!(id = %created.id, "Location created");
                self.events.send(AppEvent::toast("Location added successfully!"));
                Ok(created)
            }
            Err(err) => {
                tracing::warn!("Failed to create location: {err}");
                self.events.send(AppEvent::toast_error("Failed to add location!"));
                Err(err)
            }
        }
    }

    /// Replace the fields of an existing location
    pub async fn update(&self, id: &str, draft: &LocationDraft) -> Result<Location> {
        if let Err(err) = draft.validate() {
            self.events.send(AppEvent::toast_error("All fields are required!"));
            return Err(err);
        }

        match self.store.update(id, draft).await {
            Ok(updated) => {
                tracing::info!(id = %updated.id, "Location updated");
                self.events.send(AppEvent::toast("Location updated successfully!"));
                Ok(updated)
            }
            Err(err) => {
                tracing::warn!(id, "Failed to update location: {err}");
                self.events.send(AppEvent::toast_error("Failed to update location!"));
                Err(err)
            }
        }
    }

    /// Delete a location by id.
    ///
    /// When [`delete_requires_confirmation`] is true the caller is expected
    /// to have gated this behind a user confirmation already.
    ///
    /// [`delete_requires_confirmation`]: MutationCoordinator::delete_requires_confirmation
    pub async fn delete(&self, id: &str) -> Result<()> {
        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Location deleted");
                self.events.send(AppEvent::toast("Location deleted successfully!"));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id, "Failed to delete location: {err}");
                self.events.send(AppEvent::toast_error("Failed to delete location!"));
                Err(err)
            }
        }
    }
}
