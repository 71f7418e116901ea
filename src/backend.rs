//! Reactive data hooks over [`HttpClient`] and [`QueryCache`].
//!
//! `use_backend` reads a list or record through the shared cache and fetches
//! only when nothing fresh is cached. `use_backend_mutation` sends a write and,
//! when it succeeds, marks the listed cache keys stale so every mounted reader
//! of those keys refetches.

use crate::api::{FetchClient, HttpClient, RequestDescriptor};
use crate::cache::{CacheEntry, QueryCache, QueryKey};
use crate::config::ClientConfig;
use crate::error::ApiError;
use leptos::logging::{error, log, warn};
use leptos::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

/// Shared HTTP client plus the query cache. Provided once by `App`.
#[derive(Clone)]
pub struct Backend {
    client: Rc<dyn HttpClient>,
    cache: RwSignal<QueryCache>,
}

impl Backend {
    pub fn new(client: impl HttpClient + 'static) -> Self {
        Self {
            client: Rc::new(client),
            cache: create_rw_signal(QueryCache::default()),
        }
    }

    pub fn cache(&self) -> RwSignal<QueryCache> {
        self.cache
    }

    /// Starts a background fetch for `key` unless one is already running or
    /// fresh data is cached.
    pub fn fetch(&self, key: QueryKey, request: RequestDescriptor) {
        let Some(generation) = self
            .cache
            .try_update(|cache| cache.start_fetch(&key))
            .flatten()
        else {
            return;
        };

        log!("[BACKEND] Fetching {} for key {}", request, key);
        let cache = self.cache;
        let call = self.client.send(request.clone());
        spawn_local(async move {
            let result = call.await;
            if let Err(err) = &result {
                error!("[BACKEND] Error invoking {}: {}", request, err);
            }
            // The cache outlives pages; try_update only fails once the app is gone.
            cache.try_update(|cache| cache.finish_fetch(&key, generation, result));
        });
    }

    /// Sends a request without touching the cache.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Option<Value>, ApiError> {
        self.client.send(request).await
    }

    pub fn invalidate(&self, keys: &[QueryKey]) {
        let count = self
            .cache
            .try_update(|cache| cache.invalidate_all(keys))
            .unwrap_or_default();
        log!("[BACKEND] Invalidated {} of {} cache keys", count, keys.len());
    }
}

/// The app's `Backend`, or a fetch-backed one if no ancestor provided it.
pub fn use_backend_context() -> Backend {
    use_context::<Backend>().unwrap_or_else(|| {
        warn!("[BACKEND] No Backend in context, creating a default fetch client");
        let backend = Backend::new(FetchClient::new(ClientConfig::from_build_env()));
        provide_context(backend.clone());
        backend
    })
}

/// Reactive view of one query.
pub struct QueryResult<T: 'static> {
    pub data: Signal<T>,
    pub is_loading: Signal<bool>,
    pub error: Signal<Option<ApiError>>,
}

impl<T: 'static> Clone for QueryResult<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for QueryResult<T> {}

/// Reads `request` through the cache under `key`.
///
/// `data` is `fallback` until the first response arrives, and stays
/// `fallback` if the call fails or the body is `null` or does not decode.
pub fn use_backend<T>(key: QueryKey, request: RequestDescriptor, fallback: T) -> QueryResult<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let backend = use_backend_context();
    let cache = backend.cache();

    let entry = {
        let key = key.clone();
        create_memo(move |_| cache.with(|cache| cache.entry(&key).cloned()))
    };

    {
        let key = key.clone();
        create_effect(move |_| {
            if cache.with(|cache| cache.should_fetch(&key)) {
                backend.fetch(key.clone(), request.clone());
            }
        });
    }

    let data = Signal::derive(move || {
        let raw = entry.with(|entry| entry.as_ref().and_then(|entry| entry.data.clone()));
        decode_or(raw, &fallback, &key)
    });
    let is_loading = Signal::derive(move || {
        entry.with(|entry| entry.as_ref().map(CacheEntry::is_loading).unwrap_or(true))
    });
    let error = Signal::derive(move || entry.with(|entry| entry.as_ref().and_then(|entry| entry.error.clone())));

    QueryResult {
        data,
        is_loading,
        error,
    }
}

/// Decodes cached JSON, substituting `fallback` for absent, `null` or
/// malformed data.
pub fn decode_or<T>(raw: Option<Value>, fallback: &T, key: &QueryKey) -> T
where
    T: DeserializeOwned + Clone,
{
    match raw {
        None | Some(Value::Null) => fallback.clone(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!("[BACKEND] Could not decode data for {}: {}", key, err);
            fallback.clone()
        }),
    }
}

/// A write against the backend with follow-up cache invalidation.
pub struct Mutation<A: 'static> {
    backend: Backend,
    build: Rc<dyn Fn(&A) -> RequestDescriptor>,
    invalidates: Rc<[QueryKey]>,
    pending: RwSignal<usize>,
}

impl<A: 'static> Clone for Mutation<A> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            build: Rc::clone(&self.build),
            invalidates: Rc::clone(&self.invalidates),
            pending: self.pending,
        }
    }
}

impl<A: 'static> Mutation<A> {
    pub fn new(
        backend: Backend,
        build: impl Fn(&A) -> RequestDescriptor + 'static,
        invalidates: Vec<QueryKey>,
    ) -> Self {
        Self {
            backend,
            build: Rc::new(build),
            invalidates: invalidates.into(),
            pending: create_rw_signal(0),
        }
    }

    /// Sends the request built from `args`. Exactly one result per call; on
    /// `Ok` the invalidation keys are already stale when this returns.
    pub async fn mutate(&self, args: A) -> Result<Option<Value>, ApiError> {
        let request = (self.build)(&args);
        log!("[BACKEND] Mutation {}", request);

        self.pending.try_update(|pending| *pending += 1);
        let result = self.backend.execute(request.clone()).await;
        match &result {
            Ok(_) => self.backend.invalidate(&self.invalidates),
            Err(err) => error!("[BACKEND] Mutation {} failed: {}", request, err),
        }
        self.pending.try_update(|pending| *pending = pending.saturating_sub(1));

        result
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let pending = self.pending;
        Signal::derive(move || pending.get() > 0)
    }
}

/// `build` maps the caller's arguments to a concrete request.
pub fn use_backend_mutation<A, F>(build: F, invalidates: Vec<QueryKey>) -> Mutation<A>
where
    A: 'static,
    F: Fn(&A) -> RequestDescriptor + 'static,
{
    Mutation::new(use_backend_context(), build, invalidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::{self, LocalBoxFuture};
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct ScriptedClient {
        sent: Rc<RefCell<Vec<RequestDescriptor>>>,
        reply: Rc<RefCell<Option<Result<Option<Value>, ApiError>>>>,
    }

    impl ScriptedClient {
        fn replying(reply: Result<Option<Value>, ApiError>) -> Self {
            let client = Self::default();
            *client.reply.borrow_mut() = Some(reply);
            client
        }
    }

    impl HttpClient for ScriptedClient {
        fn send(&self, request: RequestDescriptor) -> LocalBoxFuture<'static, Result<Option<Value>, ApiError>> {
            self.sent.borrow_mut().push(request);
            let reply = self.reply.borrow().clone().unwrap_or(Ok(None));
            Box::pin(future::ready(reply))
        }
    }

    fn reviews_key() -> QueryKey {
        QueryKey::from("/api/reviews/needsmoderation")
    }

    fn seed(backend: &Backend, key: &QueryKey, data: Value) {
        backend.cache().update(|cache| {
            let generation = cache.start_fetch(key).unwrap();
            cache.finish_fetch(key, generation, Ok(Some(data)));
        });
    }

    #[test]
    fn decode_or_falls_back_for_null_and_garbage() {
        let key = reviews_key();
        let fallback: Vec<i64> = Vec::new();
        assert_eq!(decode_or(None, &fallback, &key), Vec::<i64>::new());
        assert_eq!(decode_or(Some(Value::Null), &fallback, &key), Vec::<i64>::new());
        assert_eq!(decode_or(Some(json!({"not": "a list"})), &fallback, &key), Vec::<i64>::new());
        assert_eq!(decode_or(Some(json!([1, 2, 3])), &fallback, &key), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn successful_mutation_invalidates_keys() {
        let runtime = create_runtime();
        let client = ScriptedClient::replying(Ok(Some(json!({"id": 1}))));
        let backend = Backend::new(client.clone());
        let key = reviews_key();
        seed(&backend, &key, json!([]));

        let mutation = Mutation::new(
            backend.clone(),
            |id: &i64| RequestDescriptor::put("/api/reviews/moderate").param("id", id),
            vec![key.clone()],
        );
        let result = mutation.mutate(7).await;

        assert_eq!(result, Ok(Some(json!({"id": 1}))));
        assert_eq!(client.sent.borrow()[0].param_value("id"), Some("7"));
        assert!(backend.cache().with_untracked(|cache| cache.should_fetch(&key)));
        assert!(!mutation.is_loading().get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_mutation_leaves_cache_fresh() {
        let runtime = create_runtime();
        let client = ScriptedClient::replying(Err(ApiError::Network("Network Error".into())));
        let backend = Backend::new(client);
        let key = reviews_key();
        seed(&backend, &key, json!([]));

        let mutation = Mutation::new(
            backend.clone(),
            |_: &()| RequestDescriptor::put("/api/reviews/moderate"),
            vec![key.clone()],
        );
        let result = mutation.mutate(()).await;

        assert_eq!(result, Err(ApiError::Network("Network Error".into())));
        assert!(!backend.cache().with_untracked(|cache| cache.should_fetch(&key)));
        runtime.dispose();
    }

    #[tokio::test]
    async fn fetch_is_issued_once_per_key() {
        let runtime = create_runtime();
        let client = ScriptedClient::replying(Ok(Some(json!([{"id": 1}]))));
        let backend = Backend::new(client.clone());
        let key = reviews_key();

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                backend.fetch(key.clone(), RequestDescriptor::get("/api/reviews/needsmoderation"));
                backend.fetch(key.clone(), RequestDescriptor::get("/api/reviews/needsmoderation"));
                for _ in 0..10 {
                    let done = backend
                        .cache()
                        .with_untracked(|cache| cache.entry(&key).map(|e| !e.in_flight).unwrap_or(false));
                    if done {
                        break;
                    }
                    tokio::task::yield_now().await;
                }
            })
            .await;

        assert_eq!(client.sent.borrow().len(), 1);
        let data = backend
            .cache()
            .with_untracked(|cache| cache.entry(&key).and_then(|e| e.data.clone()));
        assert_eq!(data, Some(json!([{"id": 1}])));
        runtime.dispose();
    }
}
