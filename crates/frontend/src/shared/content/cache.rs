//! Keyed result table behind the content client.
//!
//! Every response is stored under the key it was requested for, and views
//! only read the entry of the key they currently display. A late response for
//! a key the view has moved away from therefore lands in its own slot and is
//! never rendered in place of the current one.

use contracts::shared::ResourceKey;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use super::FetchError;

/// What a view renders for one resource.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Loading => QueryState::Loading,
            QueryState::Ready(value) => QueryState::Ready(f(value)),
            QueryState::Failed(err) => QueryState::Failed(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CacheEntry {
    /// A request is in flight; `previous` is the last good value, if any.
    Pending { previous: Option<Value> },
    Ready { value: Value, fetched_at: f64 },
    Failed { error: FetchError, failed_at: f64 },
}

impl CacheEntry {
    /// Whether the entry may be dropped at `now`. In-flight entries are
    /// kept so their response still has a slot to land in.
    fn is_expired(&self, now: f64, stale_time_ms: f64) -> bool {
        match self {
            CacheEntry::Pending { .. } => false,
            CacheEntry::Ready { fetched_at: at, .. } | CacheEntry::Failed { failed_at: at, .. } => {
                now - at >= stale_time_ms
            }
        }
    }
}

/// Result table keyed by [`ResourceKey`]. Times are milliseconds since epoch.
///
/// Entries past the stale window are evicted unless a mounted view still
/// watches their key.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCache {
    entries: HashMap<ResourceKey, CacheEntry>,
    /// Number of mounted views per key.
    watchers: HashMap<ResourceKey, usize>,
    stale_time_ms: f64,
}

impl ContentCache {
    pub fn new(stale_time_ms: f64) -> Self {
        Self {
            entries: HashMap::new(),
            watchers: HashMap::new(),
            stale_time_ms,
        }
    }

    /// Whether a request for `key` should be sent now.
    ///
    /// False while one is already in flight or the cached value is younger
    /// than the stale window.
    pub fn needs_fetch(&self, key: &ResourceKey, now: f64) -> bool {
        match self.entries.get(key) {
            None => true,
            Some(CacheEntry::Pending { .. }) => false,
            Some(CacheEntry::Ready { fetched_at, .. }) => now - fetched_at >= self.stale_time_ms,
            Some(CacheEntry::Failed { .. }) => true,
        }
    }

    /// Marks `key` as in flight. Returns `false` when no request is needed,
    /// in which case nothing changes.
    pub fn begin(&mut self, key: ResourceKey, now: f64) -> bool {
        if !self.needs_fetch(&key, now) {
            return false;
        }
        let previous = match self.entries.remove(&key) {
            Some(CacheEntry::Ready { value, .. }) => Some(value),
            _ => None,
        };
        self.evict_expired(now);
        self.entries.insert(key, CacheEntry::Pending { previous });
        true
    }

    /// Stores the outcome of a request for `key`.
    pub fn resolve(&mut self, key: ResourceKey, result: Result<Value, FetchError>, now: f64) {
        let entry = match result {
            Ok(value) => CacheEntry::Ready {
                value,
                fetched_at: now,
            },
            Err(error) => CacheEntry::Failed {
                error,
                failed_at: now,
            },
        };
        self.entries.insert(key, entry);
        self.evict_expired(now);
    }

    /// Registers a mounted view of `key`; its entry is never evicted while watched.
    pub fn watch(&mut self, key: &ResourceKey) {
        *self.watchers.entry(key.clone()).or_insert(0) += 1;
    }

    pub fn unwatch(&mut self, key: &ResourceKey) {
        if let Some(count) = self.watchers.get_mut(key) {
            *count -= 1;
            if *count == 0 {
                self.watchers.remove(key);
            }
        }
    }

    /// Drops unwatched entries older than the stale window.
    pub fn evict_expired(&mut self, now: f64) {
        let stale_time_ms = self.stale_time_ms;
        let watchers = &self.watchers;
        self.entries.retain(|key, entry| {
            watchers.contains_key(key) || !entry.is_expired(now, stale_time_ms)
        });
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops whatever is stored for `key`; the next view of it fetches again.
    pub fn invalidate(&mut self, key: &ResourceKey) {
        self.entries.remove(key);
    }

    /// Typed view of the entry for `key`.
    ///
    /// While a refetch is in flight the previous value stays visible. A value
    /// that does not decode as `T`, or a JSON `null`, is reported as a failure.
    pub fn state<T: DeserializeOwned>(&self, key: &ResourceKey) -> QueryState<T> {
        let value = match self.entries.get(key) {
            None | Some(CacheEntry::Pending { previous: None }) => return QueryState::Loading,
            Some(CacheEntry::Failed { error, .. }) => return QueryState::Failed(error.clone()),
            Some(CacheEntry::Pending {
                previous: Some(value),
            })
            | Some(CacheEntry::Ready { value, .. }) => value,
        };
        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: &Value) -> QueryState<T> {
    if value.is_null() {
        return QueryState::Failed(FetchError::Empty);
    }
    match T::deserialize(value) {
        Ok(decoded) => QueryState::Ready(decoded),
        Err(e) => QueryState::Failed(FetchError::Malformed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::c002_experience::aggregate::Experience;
    use serde_json::json;

    const STALE: f64 = 60_000.0;

    fn title(state: QueryState<Experience>) -> Option<String> {
        state.ready().and_then(|e| e.title.clone())
    }

    #[test]
    fn test_late_response_for_previous_key_is_not_shown() {
        let a = ResourceKey::experience_by_slug("okavango");
        let b = ResourceKey::experience_by_slug("kyoto");
        let mut cache = ContentCache::new(STALE);

        assert!(cache.begin(a.clone(), 0.0));
        // view navigates to B before A answers
        assert!(cache.begin(b.clone(), 10.0));
        cache.resolve(a.clone(), Ok(json!({"title": "Okavango"})), 20.0);

        assert_eq!(cache.state::<Experience>(&b), QueryState::Loading);
        assert_eq!(title(cache.state(&a)).as_deref(), Some("Okavango"));

        cache.resolve(b.clone(), Ok(json!({"title": "Kyoto"})), 30.0);
        assert_eq!(title(cache.state(&b)).as_deref(), Some("Kyoto"));
    }

    #[test]
    fn test_in_flight_request_is_shared() {
        let key = ResourceKey::featured_tours();
        let mut cache = ContentCache::new(STALE);
        assert!(cache.begin(key.clone(), 0.0));
        assert!(!cache.begin(key.clone(), 1.0));
        assert!(!cache.needs_fetch(&key, 2.0));
    }

    #[test]
    fn test_stale_window() {
        let key = ResourceKey::blog_posts();
        let mut cache = ContentCache::new(STALE);
        cache.begin(key.clone(), 0.0);
        cache.resolve(key.clone(), Ok(json!([])), 1_000.0);

        assert!(!cache.needs_fetch(&key, 1_000.0 + STALE - 1.0));
        assert!(cache.needs_fetch(&key, 1_000.0 + STALE));
    }

    #[test]
    fn test_refetch_keeps_previous_value_visible() {
        let key = ResourceKey::experience_by_slug("atacama");
        let mut cache = ContentCache::new(STALE);
        cache.begin(key.clone(), 0.0);
        cache.resolve(key.clone(), Ok(json!({"title": "Atacama"})), 0.0);

        assert!(cache.begin(key.clone(), STALE * 2.0));
        assert_eq!(title(cache.state(&key)).as_deref(), Some("Atacama"));
    }

    #[test]
    fn test_failures_surface_and_allow_retry() {
        let key = ResourceKey::experiences();
        let mut cache = ContentCache::new(STALE);
        cache.begin(key.clone(), 0.0);
        cache.resolve(key.clone(), Err(FetchError::Status(500)), 5.0);

        assert_eq!(
            cache.state::<Vec<Experience>>(&key),
            QueryState::Failed(FetchError::Status(500))
        );
        assert!(cache.needs_fetch(&key, 6.0));
    }

    #[test]
    fn test_null_and_malformed_payloads() {
        let null_key = ResourceKey::experience_by_slug("null");
        let bad_key = ResourceKey::experience_by_slug("bad");
        let mut cache = ContentCache::new(STALE);
        cache.resolve(null_key.clone(), Ok(Value::Null), 0.0);
        cache.resolve(bad_key.clone(), Ok(json!({"title": 42})), 0.0);

        assert_eq!(
            cache.state::<Experience>(&null_key),
            QueryState::Failed(FetchError::Empty)
        );
        assert!(matches!(
            cache.state::<Experience>(&bad_key),
            QueryState::Failed(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn test_expired_entries_are_evicted_unless_watched() {
        let visited = ResourceKey::experience_by_slug("okavango");
        let mounted = ResourceKey::experience_by_slug("kyoto");
        let failed = ResourceKey::experience_by_slug("gone");
        let mut cache = ContentCache::new(STALE);
        cache.watch(&mounted);
        cache.resolve(visited.clone(), Ok(json!({"title": "Okavango"})), 0.0);
        cache.resolve(mounted.clone(), Ok(json!({"title": "Kyoto"})), 0.0);
        cache.resolve(failed.clone(), Err(FetchError::Status(404)), 0.0);
        assert_eq!(cache.len(), 3);

        // still fresh: a revisit is served from the table
        cache.begin(ResourceKey::blog_posts(), STALE - 1.0);
        assert_eq!(title(cache.state(&visited)).as_deref(), Some("Okavango"));

        // past the stale window only the watched entry and the in-flight request remain
        cache.begin(ResourceKey::tour_packages(), STALE);
        assert_eq!(cache.state::<Experience>(&visited), QueryState::Loading);
        assert_eq!(cache.state::<Experience>(&failed), QueryState::Loading);
        assert_eq!(title(cache.state(&mounted)).as_deref(), Some("Kyoto"));
        assert!(matches!(
            cache.state::<Vec<Experience>>(&ResourceKey::blog_posts()),
            QueryState::Loading
        ));
        assert_eq!(cache.len(), 3);

        cache.unwatch(&mounted);
        cache.evict_expired(STALE);
        assert_eq!(cache.state::<Experience>(&mounted), QueryState::Loading);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalidate() {
        let key = ResourceKey::tour_packages();
        let mut cache = ContentCache::new(STALE);
        cache.resolve(key.clone(), Ok(json!([])), 0.0);
        cache.invalidate(&key);
        assert!(cache.needs_fetch(&key, 1.0));
        assert_eq!(cache.state::<Vec<u8>>(&key), QueryState::Loading);
    }
}
