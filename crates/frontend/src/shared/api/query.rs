//! Keyed server-state cache over the REST adapter.
//!
//! The pure bookkeeping lives in [`QueryStore`] so it can be tested off
//! the reactive graph; [`QueryClient`] wraps it in a signal and drives
//! fetches for subscribed list views.
//!
//! Correctness notes:
//! - one in-flight request per key, never two;
//! - every fetch carries a generation token, and a completion whose
//!   token is no longer the latest for its key is discarded ("last
//!   request wins" across invalidate/refetch races);
//! - a failed read is retried once, a mutation never.

use contracts::shared::{ListQuery, PageEnvelope};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

use super::client;
use super::error::ApiError;

/// A successful snapshot is served without refetching for this long.
pub const STALE_AFTER_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Cache-entry identity: resource name plus the full list-query tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: String,
    pub query: ListQuery,
}

impl QueryKey {
    pub fn new(resource: impl Into<String>, query: ListQuery) -> Self {
        Self {
            resource: resource.into(),
            query,
        }
    }

    /// Structured prefix match: invalidation targets a resource, never a
    /// string prefix of the serialized key.
    pub fn matches_resource(&self, resource: &str) -> bool {
        self.resource == resource
    }
}

#[derive(Debug, Clone, Default)]
struct CacheEntry {
    data: Option<PageEnvelope<Value>>,
    error: Option<ApiError>,
    fetched_at: Option<f64>,
    stale: bool,
    latest_generation: u64,
    in_flight: Option<u64>,
    retried: bool,
}

/// What the driver should do after asking for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDecision {
    /// Snapshot is fresh; nothing to do.
    Fresh,
    /// Start a request carrying this generation token.
    Begin(u64),
    /// Someone else already has a request out for this key.
    AlreadyInFlight,
}

/// What happened to a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    Applied,
    /// A newer request owns this key now; the response was dropped.
    Discarded,
    /// First read failure for this fetch; try once more with the same token.
    RetryOnce,
}

#[derive(Debug, Default)]
pub struct QueryStore {
    entries: HashMap<QueryKey, CacheEntry>,
    next_generation: u64,
}

impl QueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, key: &QueryKey) -> Option<PageEnvelope<Value>> {
        self.entries.get(key).and_then(|e| e.data.clone())
    }

    pub fn error(&self, key: &QueryKey) -> Option<ApiError> {
        self.entries.get(key).and_then(|e| e.error.clone())
    }

    pub fn is_loading(&self, key: &QueryKey) -> bool {
        self.entries
            .get(key)
            .map(|e| e.in_flight.is_some())
            .unwrap_or(false)
    }

    pub fn is_fresh(&self, key: &QueryKey, now_ms: f64) -> bool {
        let Some(entry) = self.entries.get(key) else {
            return false;
        };
        if entry.data.is_none() || entry.stale {
            return false;
        }
        match entry.fetched_at {
            Some(at) => now_ms - at < STALE_AFTER_MS,
            None => false,
        }
    }

    /// Decide whether a fetch is needed for `key`, and claim it if so.
    pub fn ensure_fetch(&mut self, key: &QueryKey, now_ms: f64) -> FetchDecision {
        if self.is_fresh(key, now_ms) {
            return FetchDecision::Fresh;
        }
        let next_generation = &mut self.next_generation;
        let entry = self.entries.entry(key.clone()).or_default();
        if entry.in_flight.is_some() {
            return FetchDecision::AlreadyInFlight;
        }
        *next_generation += 1;
        let token = *next_generation;
        entry.in_flight = Some(token);
        entry.latest_generation = token;
        entry.retried = false;
        FetchDecision::Begin(token)
    }

    /// Apply a finished request. Responses from superseded generations
    /// are dropped so an old page can never overwrite a newer one.
    pub fn complete_fetch(
        &mut self,
        key: &QueryKey,
        token: u64,
        now_ms: f64,
        result: Result<PageEnvelope<Value>, ApiError>,
    ) -> CompleteOutcome {
        let Some(entry) = self.entries.get_mut(key) else {
            return CompleteOutcome::Discarded;
        };
        if entry.latest_generation != token {
            return CompleteOutcome::Discarded;
        }
        match result {
            Ok(page) => {
                entry.in_flight = None;
                entry.data = Some(page);
                entry.error = None;
                entry.stale = false;
                entry.fetched_at = Some(now_ms);
                CompleteOutcome::Applied
            }
            Err(e) => {
                if !entry.retried {
                    entry.retried = true;
                    CompleteOutcome::RetryOnce
                } else {
                    entry.in_flight = None;
                    // Prior data stays visible alongside the error.
                    entry.error = Some(e);
                    CompleteOutcome::Applied
                }
            }
        }
    }

    /// Mark every entry of a resource stale. Idempotent; with no entries
    /// for the resource this is a no-op. Outstanding requests for the
    /// resource are superseded: their token stops being the latest, so
    /// a pre-mutation response can no longer land as fresh data.
    pub fn invalidate_resource(&mut self, resource: &str) -> usize {
        let mut touched = 0;
        let mut next_generation = self.next_generation;
        for (key, entry) in self.entries.iter_mut() {
            if key.matches_resource(resource) {
                entry.stale = true;
                if entry.in_flight.is_some() {
                    next_generation += 1;
                    entry.latest_generation = next_generation;
                    entry.in_flight = None;
                }
                touched += 1;
            }
        }
        self.next_generation = next_generation;
        touched
    }
}

/// Context-provided cache service. `Copy` so event handlers can capture
/// it freely, the same way the layout services are shaped.
#[derive(Clone, Copy)]
pub struct QueryClient {
    store: RwSignal<QueryStore>,
    /// Bumped on invalidation; subscriber effects track this (and their
    /// key) rather than the store itself, so a fetch completing does not
    /// re-trigger the fetch driver.
    revision: RwSignal<u64>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(QueryStore::new()),
            revision: RwSignal::new(0),
        }
    }

    pub fn expect() -> Self {
        use_context::<QueryClient>().expect("QueryClient not provided in context")
    }

    /// Mark all queries of a resource stale and wake subscribers.
    pub fn invalidate(&self, resource: &str) {
        self.store.update(|s| {
            s.invalidate_resource(resource);
        });
        self.revision.update(|r| *r += 1);
    }

    /// Run a write exactly once. Success invalidates the resource's
    /// queries; failure leaves the cache untouched (nothing was changed
    /// speculatively) and hands the error back to the caller.
    pub async fn mutate<T>(
        &self,
        resource: &str,
        op: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        let value = op.await?;
        self.invalidate(resource);
        Ok(value)
    }

    fn drive_fetch(&self, key: QueryKey, token: u64) {
        let store = self.store;
        spawn_local(async move {
            loop {
                let result = client::list(&key.resource, &key.query).await;
                if let Err(ref e) = result {
                    log::warn!("list {} failed: {}", key.resource, e);
                }
                let outcome = store
                    .try_update(|s| {
                        s.complete_fetch(&key, token, js_sys::Date::now(), result)
                    })
                    .unwrap_or(CompleteOutcome::Discarded);
                if outcome != CompleteOutcome::RetryOnce {
                    break;
                }
            }
        });
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Reactive view of one query key: what a list view binds to.
pub struct PageQuery {
    pub data: Signal<Option<PageEnvelope<Value>>>,
    pub error: Signal<Option<ApiError>>,
    pub loading: Signal<bool>,
}

/// Subscribe to a (possibly changing) query key. Refetches when the key
/// changes or the resource is invalidated; serves fresh snapshots
/// without touching the network.
pub fn use_page_query(client: QueryClient, key: Signal<QueryKey>) -> PageQuery {
    let store = client.store;
    let revision = client.revision;

    Effect::new(move |_| {
        let k = key.get();
        revision.track();
        let decision = store
            .try_update(|s| s.ensure_fetch(&k, js_sys::Date::now()))
            .unwrap_or(FetchDecision::Fresh);
        if let FetchDecision::Begin(token) = decision {
            client.drive_fetch(k, token);
        }
    });

    PageQuery {
        data: Signal::derive(move || {
            let k = key.get();
            store.with(|s| s.snapshot(&k))
        }),
        error: Signal::derive(move || {
            let k = key.get();
            store.with(|s| s.error(&k))
        }),
        loading: Signal::derive(move || {
            let k = key.get();
            store.with(|s| s.is_loading(&k))
        }),
    }
}

/// Deserialize the rows of a page, dropping records the DTO cannot
/// represent (logged, not fatal: one malformed record must not blank an
/// entire list screen).
pub fn typed_rows<T: DeserializeOwned>(page: &PageEnvelope<Value>) -> Vec<T> {
    page.data
        .iter()
        .filter_map(|row| match serde_json::from_value(row.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("dropping malformed record: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(resource: &str, page: u64) -> QueryKey {
        QueryKey::new(resource, ListQuery::new(page, 10))
    }

    fn page_data(marker: u64) -> PageEnvelope<Value> {
        PageEnvelope {
            data: vec![serde_json::json!({ "page": marker })],
            total: 30,
            total_pages: 3,
        }
    }

    #[test]
    fn test_single_in_flight_request_per_key() {
        let mut store = QueryStore::new();
        let k = key("products", 1);
        let d1 = store.ensure_fetch(&k, 0.0);
        assert!(matches!(d1, FetchDecision::Begin(_)));
        assert_eq!(store.ensure_fetch(&k, 0.0), FetchDecision::AlreadyInFlight);
    }

    #[test]
    fn test_fresh_snapshot_is_served_without_fetch() {
        let mut store = QueryStore::new();
        let k = key("products", 1);
        let FetchDecision::Begin(token) = store.ensure_fetch(&k, 0.0) else {
            panic!("expected Begin");
        };
        store.complete_fetch(&k, token, 0.0, Ok(page_data(1)));
        assert_eq!(store.ensure_fetch(&k, 1000.0), FetchDecision::Fresh);
    }

    #[test]
    fn test_snapshot_expires_after_ttl() {
        let mut store = QueryStore::new();
        let k = key("products", 1);
        let FetchDecision::Begin(token) = store.ensure_fetch(&k, 0.0) else {
            panic!("expected Begin");
        };
        store.complete_fetch(&k, token, 0.0, Ok(page_data(1)));
        assert!(matches!(
            store.ensure_fetch(&k, STALE_AFTER_MS + 1.0),
            FetchDecision::Begin(_)
        ));
    }

    #[test]
    fn test_invalidation_supersedes_in_flight_request() {
        let mut store = QueryStore::new();
        let k = key("products", 1);
        let FetchDecision::Begin(old_token) = store.ensure_fetch(&k, 0.0) else {
            panic!("expected Begin");
        };
        store.invalidate_resource("products");
        // The refetch claims a newer token than the superseded request.
        let FetchDecision::Begin(new_token) = store.ensure_fetch(&k, 20.0) else {
            panic!("expected Begin");
        };
        assert!(new_token > old_token);
        store.complete_fetch(&k, new_token, 30.0, Ok(page_data(2)));
        // The pre-invalidation response arriving late is dropped.
        assert_eq!(
            store.complete_fetch(&k, old_token, 40.0, Ok(page_data(1))),
            CompleteOutcome::Discarded
        );
        let snapshot = store.snapshot(&k).unwrap();
        assert_eq!(snapshot.data[0]["page"], 2);
    }

    #[test]
    fn test_distinct_pages_are_distinct_entries() {
        let mut store = QueryStore::new();
        let k1 = key("products", 1);
        let k2 = key("products", 2);
        let FetchDecision::Begin(t1) = store.ensure_fetch(&k1, 0.0) else {
            panic!("expected Begin");
        };
        let FetchDecision::Begin(t2) = store.ensure_fetch(&k2, 0.0) else {
            panic!("expected Begin");
        };
        // Page 1's response resolves after page 2's; each lands in its
        // own entry, so page 2's snapshot reflects page 2.
        store.complete_fetch(&k2, t2, 5.0, Ok(page_data(2)));
        store.complete_fetch(&k1, t1, 10.0, Ok(page_data(1)));
        assert_eq!(store.snapshot(&k2).unwrap().data[0]["page"], 2);
        assert_eq!(store.snapshot(&k1).unwrap().data[0]["page"], 1);
    }

    #[test]
    fn test_read_failure_retries_exactly_once() {
        let mut store = QueryStore::new();
        let k = key("products", 1);
        let FetchDecision::Begin(token) = store.ensure_fetch(&k, 0.0) else {
            panic!("expected Begin");
        };
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(
            store.complete_fetch(&k, token, 1.0, Err(err.clone())),
            CompleteOutcome::RetryOnce
        );
        assert_eq!(
            store.complete_fetch(&k, token, 2.0, Err(err.clone())),
            CompleteOutcome::Applied
        );
        assert_eq!(store.error(&k), Some(err));
        assert!(!store.is_loading(&k));
    }

    #[test]
    fn test_error_keeps_prior_data_visible() {
        let mut store = QueryStore::new();
        let k = key("products", 1);
        let FetchDecision::Begin(t1) = store.ensure_fetch(&k, 0.0) else {
            panic!("expected Begin");
        };
        store.complete_fetch(&k, t1, 0.0, Ok(page_data(1)));
        store.invalidate_resource("products");
        let FetchDecision::Begin(t2) = store.ensure_fetch(&k, 1.0) else {
            panic!("expected Begin");
        };
        let err = ApiError::Network("offline".to_string());
        store.complete_fetch(&k, t2, 2.0, Err(err.clone()));
        store.complete_fetch(&k, t2, 3.0, Err(err));
        assert!(store.snapshot(&k).is_some());
        assert!(store.error(&k).is_some());
    }

    #[test]
    fn test_invalidate_without_entries_is_noop() {
        let mut store = QueryStore::new();
        assert_eq!(store.invalidate_resource("banners"), 0);
    }

    #[test]
    fn test_invalidate_targets_exact_resource_only() {
        let mut store = QueryStore::new();
        let products = key("products", 1);
        let categories = key("categories", 1);
        let FetchDecision::Begin(t1) = store.ensure_fetch(&products, 0.0) else {
            panic!("expected Begin");
        };
        let FetchDecision::Begin(t2) = store.ensure_fetch(&categories, 0.0) else {
            panic!("expected Begin");
        };
        store.complete_fetch(&products, t1, 0.0, Ok(page_data(1)));
        store.complete_fetch(&categories, t2, 0.0, Ok(page_data(1)));
        assert_eq!(store.invalidate_resource("products"), 1);
        assert_eq!(store.ensure_fetch(&categories, 1.0), FetchDecision::Fresh);
        assert!(matches!(
            store.ensure_fetch(&products, 1.0),
            FetchDecision::Begin(_)
        ));
    }
}
