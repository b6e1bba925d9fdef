//! In-memory [`RemoteStore`] for unit tests.
//!
//! Records call counts and can be switched into failure modes so tests can
//! assert that validation short-circuits and that refreshes only follow
//! successful mutations.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::domain::{Location, LocationDraft};
use crate::error::{Error, Result};
use crate::services::rest::RemoteStore;

pub struct MemoryStore {
    rows: Mutex<Vec<Location>>,
    next_id: AtomicU64,
    fetch_calls: AtomicU64,
    create_calls: AtomicU64,
    update_calls: AtomicU64,
    delete_calls: AtomicU64,
    fail_fetch: AtomicBool,
    fail_mutations: AtomicBool,
}

impl MemoryStore {
    pub fn new(rows: Vec<Location>) -> Self {
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicU64::new(1),
            fetch_calls: AtomicU64::new(0),
            create_calls: AtomicU64::new(0),
            update_calls: AtomicU64::new(0),
            delete_calls: AtomicU64::new(0),
            fail_fetch: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
        }
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().expect("rows lock").len()
    }

    pub fn fetch_calls(&self) -> u64 {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> u64 {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> u64 {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> u64 {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

impl RemoteStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Location>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(Error::FetchFailed { message: "store offline".to_string() });
        }
        Ok(self.rows.lock().expect("rows lock").clone())
    }

    async fn fetch(&self, id: &str) -> Result<Location> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(Error::FetchFailed { message: "store offline".to_string() });
        }
        self.rows
            .lock()
            .expect("rows lock")
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| Error::FetchFailed { message: format!("no record {id}") })
    }

    async fn create(&self, draft: &LocationDraft) -> Result<Location> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Error::MutationFailed { message: "store offline".to_string() });
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Location {
            id: id.to_string(),
            name: draft.name.clone(),
            city: draft.city.clone(),
            country: draft.country.clone(),
            province: draft.province.clone(),
        };
        self.rows.lock().expect("rows lock").push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, draft: &LocationDraft) -> Result<Location> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Error::MutationFailed { message: "store offline".to_string() });
        }
        let mut rows = self.rows.lock().expect("rows lock");
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| Error::MutationFailed { message: format!("no record {id}") })?;
        row.name = draft.name.clone();
        row.city = draft.city.clone();
        row.country = draft.country.clone();
        row.province = draft.province.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Error::MutationFailed { message: "store offline".to_string() });
        }
        let mut rows = self.rows.lock().expect("rows lock");
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(Error::MutationFailed { message: format!("no record {id}") });
        }
        Ok(())
    }
}
