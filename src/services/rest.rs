//! REST client for the locations resource
//!
//! The remote store is a flat JSON REST server (json-server style). It offers
//! no query parameters we rely on: the full collection is fetched on every
//! refresh and all filtering/sorting/paging happens client-side.
//!
//! [`RemoteStore`] is the seam between the view pipeline and the transport;
//! tests substitute an in-memory implementation.

use std::future::Future;
use std::time::Duration;

use crate::constants::{LOCATIONS_PATH, REQUEST_TIMEOUT_SECS};
use crate::domain::{Location, LocationDraft};
use crate::error::{Error, Result};

/// The five operations of the remote locations store
pub trait RemoteStore: Send + Sync + 'static {
    /// Fetch the full, unpaginated collection
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Location>>> + Send;

    /// Fetch a single record by id
    fn fetch(&self, id: &str) -> impl Future<Output = Result<Location>> + Send;

    /// Create a record; the store assigns the id
    fn create(&self, draft: &LocationDraft) -> impl Future<Output = Result<Location>> + Send;

    /// Replace the fields of an existing record
    fn update(
        &self,
        id: &str,
        draft: &LocationDraft,
    ) -> impl Future<Output = Result<Location>> + Send;

    /// Delete a record by id
    fn delete(&self, id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// reqwest-backed [`RemoteStore`] implementation
#[derive(Clone, Debug)]
pub struct LocationsApi {
    client: reqwest::Client,
    base_url: String,
}

impl LocationsApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::FetchFailed { message: e.to_string() })?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, LOCATIONS_PATH)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, LOCATIONS_PATH, id)
    }
}

fn fetch_err(err: reqwest::Error) -> Error {
    Error::FetchFailed { message: err.to_string() }
}

fn mutation_err(err: reqwest::Error) -> Error {
    Error::MutationFailed { message: err.to_string() }
}

impl RemoteStore for LocationsApi {
    async fn fetch_all(&self) -> Result<Vec<Location>> {
        tracing::debug!(url = %self.collection_url(), "Fetching collection");
        self.client
            .get(self.collection_url())
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(fetch_err)?
            .json()
            .await
            .map_err(fetch_err)
    }

    async fn fetch(&self, id: &str) -> Result<Location> {
        self.client
            .get(self.record_url(id))
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(fetch_err)?
            .json()
            .await
            .map_err(fetch_err)
    }

    async fn create(&self, draft: &LocationDraft) -> Result<Location> {
        self.client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(mutation_err)?
            .json()
            .await
            .map_err(mutation_err)
    }

    async fn update(&self, id: &str, draft: &LocationDraft) -> Result<Location> {
        self.client
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(mutation_err)?
            .json()
            .await
            .map_err(mutation_err)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete(self.record_url(id))
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(mutation_err)?;
        Ok(())
    }
}
