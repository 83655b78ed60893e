//! Keyed cache for store reads.
//!
//! Two kinds of keys exist: the full collection ("events") and one entry
//! per fetched id ("event:{id}"). Each key guarantees a single in-flight
//! fetch: concurrent readers of a cold key await the same pending request
//! instead of issuing duplicates. Failed fetches are not cached, so the
//! next read retries. Mutations invalidate the affected keys, forcing the
//! next read to refetch instead of serving stale data:
//!
//! - create        → "events"
//! - update(id)    → "events" and "event:{id}"
//! - delete(id)    → "events", and "event:{id}" is dropped entirely

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use eventdeck_core::Event;
use eventdeck_core::error::StoreResult;
use tokio::sync::OnceCell;

use crate::client::StoreClient;

/// One cache slot: a last-known-good value, or a pending fetch that every
/// reader shares. Invalidation swaps in an empty cell; readers that
/// already hold the old one finish against it undisturbed.
struct CacheCell<T> {
    slot: Mutex<Arc<OnceCell<T>>>,
}

impl<T: Clone> CacheCell<T> {
    fn new() -> Self {
        CacheCell {
            slot: Mutex::new(Arc::new(OnceCell::new())),
        }
    }

    /// Return the cached value, or run `fetch` to fill the cell. Only one
    /// fetch runs at a time; other callers wait and share its result.
    async fn get_or_fetch<F, Fut>(&self, fetch: F) -> StoreResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = StoreResult<T>>,
    {
        let cell = self.slot.lock().unwrap().clone();
        cell.get_or_try_init(fetch).await.cloned()
    }

    fn invalidate(&self) {
        *self.slot.lock().unwrap() = Arc::new(OnceCell::new());
    }
}

/// Cache over every read the store serves.
pub struct QueryCache {
    events: CacheCell<Vec<Event>>,
    singles: Mutex<HashMap<String, Arc<CacheCell<Event>>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        QueryCache {
            events: CacheCell::new(),
            singles: Mutex::new(HashMap::new()),
        }
    }

    /// The full collection, fetched at most once until invalidated.
    pub async fn events(&self, client: &StoreClient) -> StoreResult<Vec<Event>> {
        self.events.get_or_fetch(|| client.list_events()).await
    }

    /// A single event by id, fetched at most once until invalidated.
    pub async fn event(&self, client: &StoreClient, id: &str) -> StoreResult<Event> {
        let cell = self.single_cell(id);
        cell.get_or_fetch(|| client.get_event(id)).await
    }

    /// A create landed: the collection is stale.
    pub fn note_created(&self) {
        tracing::debug!("cache invalidate: events");
        self.events.invalidate();
    }

    /// An update landed: the collection and that event's entry are stale.
    pub fn note_updated(&self, id: &str) {
        tracing::debug!(%id, "cache invalidate: events + event");
        self.events.invalidate();
        if let Some(cell) = self.singles.lock().unwrap().get(id) {
            cell.invalidate();
        }
    }

    /// A delete landed: the collection is stale and the entry is gone.
    pub fn note_deleted(&self, id: &str) {
        tracing::debug!(%id, "cache invalidate: events, drop event");
        self.events.invalidate();
        self.singles.lock().unwrap().remove(id);
    }

    fn single_cell(&self, id: &str) -> Arc<CacheCell<Event>> {
        self.singles
            .lock()
            .unwrap()
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(CacheCell::new()))
            .clone()
    }
}
