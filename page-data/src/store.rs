use payloads::ResourceKey;
use std::collections::HashMap;

/// Cached payloads by resource key.
pub type DataMap<P> = HashMap<ResourceKey, P>;

/// Whether each key currently has a request in flight. A key that is absent
/// is not loading.
pub type LoadingStates = HashMap<ResourceKey, bool>;

/// The boundary a page loader talks to.
///
/// Both request methods are fire-and-forget: they return immediately and
/// the store writes results (or errors) into its own state once the fetch
/// resolves. `ensure_data_loaded` must be safe to call repeatedly with the
/// same keys without duplicating network work.
pub trait RemoteDataStore {
    type Payload;

    /// Load every key that is neither cached nor already loading.
    fn ensure_data_loaded(&self, keys: &[ResourceKey]);

    /// Reload every key unconditionally.
    fn refetch_data(&self, keys: &[ResourceKey]);

    fn data(&self) -> &DataMap<Self::Payload>;

    fn loading_states(&self) -> &LoadingStates;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Skip keys that are loaded or loading.
    IfMissing,
    /// Always issue a new request.
    Force,
}

/// Lifecycle of a single key as seen by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
    /// The last request failed and nothing was ever cached. Treated like
    /// `NotLoaded` by [`LoadMode::IfMissing`].
    Failed,
}

/// One fetch the caller must perform, handed out by
/// [`DataContext::begin_load`] and given back to
/// [`DataContext::finish_load`] with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub key: ResourceKey,
    /// Cache generation the request belongs to. [`DataContext::clear`]
    /// starts a new one.
    pub epoch: u64,
}

/// Owned cache state behind a [`RemoteDataStore`].
///
/// Each key moves `NotLoaded -> Loading -> Loaded`, and back to `Loading`
/// on a refetch. Requests are counted per key so the loading flag only
/// drops once the last outstanding response for that key has arrived.
/// Responses are applied in arrival order; the last one wins. Responses
/// to requests issued before the last [`Self::clear`] are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DataContext<P> {
    data: DataMap<P>,
    loading_states: LoadingStates,
    in_flight: HashMap<ResourceKey, u32>,
    errors: HashMap<ResourceKey, String>,
    epoch: u64,
}

impl<P> Default for DataContext<P> {
    fn default() -> Self {
        Self {
            data: HashMap::new(),
            loading_states: HashMap::new(),
            in_flight: HashMap::new(),
            errors: HashMap::new(),
            epoch: 0,
        }
    }
}

impl<P> DataContext<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark keys as loading and return the fetches the caller must
    /// actually perform. Each key appears at most once in the result, even
    /// if `keys` repeats it.
    pub fn begin_load(
        &mut self,
        keys: &[ResourceKey],
        mode: LoadMode,
    ) -> Vec<LoadRequest> {
        let mut issued: Vec<LoadRequest> = Vec::new();

        for key in keys {
            if issued.iter().any(|request| request.key == *key) {
                continue;
            }
            if mode == LoadMode::IfMissing
                && (self.data.contains_key(key) || self.is_key_loading(key))
            {
                continue;
            }

            *self.in_flight.entry(key.clone()).or_insert(0) += 1;
            self.loading_states.insert(key.clone(), true);
            self.errors.remove(key);
            issued.push(LoadRequest {
                key: key.clone(),
                epoch: self.epoch,
            });
        }

        if !issued.is_empty() {
            let keys: Vec<&ResourceKey> =
                issued.iter().map(|request| &request.key).collect();
            tracing::debug!("Loading {:?} ({:?})", keys, mode);
        }
        issued
    }

    /// Record the outcome of one request started by [`Self::begin_load`].
    ///
    /// A failed refetch keeps the previously cached payload.
    pub fn finish_load(
        &mut self,
        request: LoadRequest,
        result: Result<P, String>,
    ) {
        let LoadRequest { key, epoch } = request;
        if epoch != self.epoch {
            tracing::debug!("Dropping response for {} from a cleared cache", key);
            return;
        }

        let remaining = match self.in_flight.get_mut(&key) {
            Some(count) => {
                *count = count.saturating_sub(1);
                *count
            }
            None => {
                tracing::debug!("Response for {} arrived with no request in flight", key);
                0
            }
        };
        if remaining == 0 {
            self.in_flight.remove(&key);
            self.loading_states.insert(key.clone(), false);
        }
        match result {
            Ok(payload) => {
                self.errors.remove(&key);
                self.data.insert(key, payload);
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", key, e);
                self.errors.insert(key, e);
            }
        }
    }

    pub fn get(&self, key: &ResourceKey) -> Option<&P> {
        self.data.get(key)
    }

    pub fn data(&self) -> &DataMap<P> {
        &self.data
    }

    pub fn loading_states(&self) -> &LoadingStates {
        &self.loading_states
    }

    pub fn error(&self, key: &ResourceKey) -> Option<&String> {
        self.errors.get(key)
    }

    /// Generation stamped on requests issued now.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_loaded(&self, key: &ResourceKey) -> bool {
        self.data.contains_key(key)
    }

    fn is_key_loading(&self, key: &ResourceKey) -> bool {
        self.in_flight.get(key).is_some_and(|count| *count > 0)
    }

    pub fn load_state(&self, key: &ResourceKey) -> LoadState {
        if self.is_key_loading(key) {
            LoadState::Loading
        } else if self.data.contains_key(key) {
            LoadState::Loaded
        } else if self.errors.contains_key(key) {
            LoadState::Failed
        } else {
            LoadState::NotLoaded
        }
    }

    /// Drop all cached payloads, flags and errors, e.g. on logout.
    ///
    /// Responses to requests issued before the clear are ignored.
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.data.clear();
        self.loading_states.clear();
        self.in_flight.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{DataContext, LoadMode, LoadRequest, LoadState};
    use payloads::ResourceKey;

    fn keys(names: &[&str]) -> Vec<ResourceKey> {
        names.iter().map(|name| ResourceKey::from(*name)).collect()
    }

    fn issued_keys(requests: &[LoadRequest]) -> Vec<ResourceKey> {
        requests.iter().map(|request| request.key.clone()).collect()
    }

    /// Start a single load and return its request.
    fn begin_one<P>(
        ctx: &mut DataContext<P>,
        key: &ResourceKey,
        mode: LoadMode,
    ) -> LoadRequest {
        let mut issued = ctx.begin_load(std::slice::from_ref(key), mode);
        assert_eq!(issued.len(), 1);
        issued.remove(0)
    }

    #[test]
    fn test_begin_load_skips_loading_and_loaded_keys() {
        let mut ctx = DataContext::<u32>::new();
        let suppliers = ResourceKey::SUPPLIERS;

        assert_eq!(ctx.load_state(&suppliers), LoadState::NotLoaded);
        let request = begin_one(&mut ctx, &suppliers, LoadMode::IfMissing);
        assert_eq!(request.key, suppliers);
        assert_eq!(ctx.load_state(&suppliers), LoadState::Loading);
        assert_eq!(ctx.loading_states().get(&suppliers), Some(&true));
        assert!(!ctx.is_loaded(&suppliers));

        // Already loading
        assert!(
            ctx.begin_load(&[suppliers.clone()], LoadMode::IfMissing)
                .is_empty()
        );

        ctx.finish_load(request, Ok(3));
        assert_eq!(ctx.load_state(&suppliers), LoadState::Loaded);
        assert_eq!(ctx.loading_states().get(&suppliers), Some(&false));
        assert_eq!(ctx.get(&suppliers), Some(&3));
        assert!(ctx.is_loaded(&suppliers));

        // Already loaded
        assert!(
            ctx.begin_load(&[suppliers.clone()], LoadMode::IfMissing)
                .is_empty()
        );
    }

    #[test]
    fn test_begin_load_issues_duplicates_once() {
        let mut ctx = DataContext::<u32>::new();
        let issued =
            ctx.begin_load(&keys(&["a", "b", "a"]), LoadMode::IfMissing);
        assert_eq!(issued_keys(&issued), keys(&["a", "b"]));

        let issued = ctx.begin_load(&keys(&["a", "a"]), LoadMode::Force);
        assert_eq!(issued_keys(&issued), keys(&["a"]));
    }

    #[test]
    fn test_force_reloads_cached_key() {
        let mut ctx = DataContext::<&str>::new();
        let key = ResourceKey::STOCK_LOCATIONS;
        let first = begin_one(&mut ctx, &key, LoadMode::IfMissing);
        ctx.finish_load(first, Ok("old"));

        let refetch = begin_one(&mut ctx, &key, LoadMode::Force);
        assert_eq!(ctx.load_state(&key), LoadState::Loading);
        // Stale payload stays readable during the refetch
        assert_eq!(ctx.get(&key), Some(&"old"));

        ctx.finish_load(refetch, Ok("new"));
        assert_eq!(ctx.get(&key), Some(&"new"));
    }

    #[test]
    fn test_loading_flag_waits_for_last_response() {
        let mut ctx = DataContext::<u32>::new();
        let key = ResourceKey::PROCESSING_ORDERS;
        let first = begin_one(&mut ctx, &key, LoadMode::IfMissing);
        let second = begin_one(&mut ctx, &key, LoadMode::Force);

        ctx.finish_load(first, Ok(1));
        assert_eq!(ctx.load_state(&key), LoadState::Loading);
        assert_eq!(ctx.loading_states().get(&key), Some(&true));

        ctx.finish_load(second, Ok(2));
        assert_eq!(ctx.load_state(&key), LoadState::Loaded);
        assert_eq!(ctx.get(&key), Some(&2));
    }

    #[test]
    fn test_failed_load_is_retried_by_ensure() {
        let mut ctx = DataContext::<u32>::new();
        let key = ResourceKey::ACTIVITY_LOG;
        let request = begin_one(&mut ctx, &key, LoadMode::IfMissing);
        ctx.finish_load(request, Err("Network error".into()));

        assert_eq!(ctx.load_state(&key), LoadState::Failed);
        assert_eq!(ctx.error(&key).map(String::as_str), Some("Network error"));
        assert_eq!(ctx.loading_states().get(&key), Some(&false));

        begin_one(&mut ctx, &key, LoadMode::IfMissing);
        assert_eq!(ctx.error(&key), None);
    }

    #[test]
    fn test_failed_refetch_keeps_cached_payload() {
        let mut ctx = DataContext::<u32>::new();
        let key = ResourceKey::FINISHING_UNITS;
        let first = begin_one(&mut ctx, &key, LoadMode::IfMissing);
        ctx.finish_load(first, Ok(7));
        let refetch = begin_one(&mut ctx, &key, LoadMode::Force);
        ctx.finish_load(refetch, Err("500".into()));

        assert_eq!(ctx.get(&key), Some(&7));
        assert_eq!(ctx.load_state(&key), LoadState::Loaded);
        assert!(ctx.error(&key).is_some());
    }

    #[test]
    fn test_clear() {
        let mut ctx = DataContext::<u32>::new();
        let issued = ctx.begin_load(&keys(&["a", "b"]), LoadMode::IfMissing);
        ctx.finish_load(issued[0].clone(), Ok(1));
        ctx.clear();

        assert!(ctx.data().is_empty());
        assert!(ctx.loading_states().is_empty());
        assert_eq!(ctx.load_state(&ResourceKey::from("b")), LoadState::NotLoaded);
    }

    #[test]
    fn test_response_from_before_clear_is_dropped() {
        let mut ctx = DataContext::<&str>::new();
        let key = ResourceKey::PROFILE;
        let old_session = begin_one(&mut ctx, &key, LoadMode::IfMissing);
        ctx.clear();
        assert_eq!(ctx.epoch(), old_session.epoch + 1);

        ctx.finish_load(old_session, Ok("old session profile"));
        assert_eq!(ctx.get(&key), None);
        assert_eq!(ctx.load_state(&key), LoadState::NotLoaded);
        assert!(ctx.loading_states().is_empty());

        // Errors from the old session are dropped too
        let old_failure = LoadRequest {
            key: key.clone(),
            epoch: 0,
        };
        ctx.finish_load(old_failure, Err("401".into()));
        assert_eq!(ctx.error(&key), None);

        // The new session loads normally, even while an old response for
        // the same key is still outstanding
        let stale = begin_one(&mut ctx, &key, LoadMode::IfMissing);
        ctx.clear();
        let fresh = begin_one(&mut ctx, &key, LoadMode::IfMissing);
        ctx.finish_load(stale, Ok("stale"));
        assert_eq!(ctx.load_state(&key), LoadState::Loading);
        ctx.finish_load(fresh, Ok("new session profile"));
        assert_eq!(ctx.get(&key), Some(&"new session profile"));
        assert_eq!(ctx.load_state(&key), LoadState::Loaded);
    }
}
