use contracts::shared::ResourceKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::cache::{ContentCache, QueryState};
use super::client::fetch_json;
use crate::shared::api_utils::resource_url;
use crate::shared::config::SiteConfig;

/// App-wide content client: one result table shared by every view.
#[derive(Clone, Copy)]
pub struct ContentClient {
    cache: RwSignal<ContentCache>,
    api_base: StoredValue<String>,
}

impl ContentClient {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            cache: RwSignal::new(ContentCache::new(config.stale_time_ms)),
            api_base: StoredValue::new(config.api_base.clone()),
        }
    }

    /// Start a request for `key` unless one is in flight or a fresh result exists.
    pub fn ensure(&self, key: ResourceKey) {
        let now = js_sys::Date::now();
        if !self.cache.with_untracked(|c| c.needs_fetch(&key, now)) {
            return;
        }
        self.cache.update(|c| {
            c.begin(key.clone(), now);
        });

        let url = resource_url(&self.api_base.get_value(), &key);
        let cache = self.cache;
        spawn_local(async move {
            log::debug!("content fetch: {}", url);
            let result = fetch_json(&url).await;
            if let Err(e) = &result {
                log::warn!("content fetch failed for {}: {}", key, e);
            }
            cache.update(|c| c.resolve(key, result, js_sys::Date::now()));
        });
    }

    /// Forget the cached result for `key`.
    pub fn invalidate(&self, key: &ResourceKey) {
        self.cache.update(|c| c.invalidate(key));
    }

    /// Reactive typed state of `key`.
    pub fn state<T: DeserializeOwned>(&self, key: &ResourceKey) -> QueryState<T> {
        self.cache.with(|c| c.state(key))
    }

    /// Typed state of whichever key `key` currently names.
    ///
    /// Any cache write recomputes the memo, but dependants are only notified
    /// when the state of this key actually changed.
    pub fn query_state<T>(&self, key: Memo<Option<ResourceKey>>) -> Memo<QueryState<T>>
    where
        T: DeserializeOwned + PartialEq + Send + Sync + 'static,
    {
        let client = *self;
        Memo::new(move |_| match key.get() {
            Some(key) => client.state::<T>(&key),
            None => QueryState::Loading,
        })
    }

    /// Watcher bookkeeping does not change any state, so it does not notify.
    fn watch(&self, key: &ResourceKey) {
        self.cache.update_untracked(|c| c.watch(key));
    }

    fn unwatch(&self, key: &ResourceKey) {
        // May run during teardown, after the cache is gone.
        let _ = self.cache.try_update_untracked(|c| c.unwatch(key));
    }
}

/// Provides the content client to children components.
pub fn provide_content_client(config: &SiteConfig) -> ContentClient {
    let client = ContentClient::new(config);
    provide_context(client);
    client
}

pub fn use_content_client() -> ContentClient {
    expect_context::<ContentClient>()
}

/// Hook: load the resource named by `key` and track its state.
///
/// `key` may change over the component's lifetime (e.g. route slug); the
/// returned memo always reflects the current key only. `None` means there
/// is nothing to load yet and reads as `Loading`. The key is watched while
/// the component is mounted, which keeps its entry out of eviction.
pub fn use_content<T>(
    key: impl Fn() -> Option<ResourceKey> + Send + Sync + 'static,
) -> Memo<QueryState<T>>
where
    T: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    let client = use_content_client();
    let key = Memo::new(move |_| key());

    Effect::new(move |_| {
        if let Some(key) = key.get() {
            client.watch(&key);
            client.ensure(key.clone());
            on_cleanup(move || client.unwatch(&key));
        }
    });

    client.query_state(key)
}
