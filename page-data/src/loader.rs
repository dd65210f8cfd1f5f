use payloads::ResourceKey;

use crate::store::{DataMap, LoadingStates, RemoteDataStore};

/// Per-page trigger state: remembers the last key list it asked the store
/// to load so that an equal list is not requested again.
///
/// Lists are compared by content and order. A caller that rebuilds the
/// same list every render does not cause repeated requests.
#[derive(Debug, Clone, Default)]
pub struct PageDataLoader {
    requested: Option<Vec<ResourceKey>>,
}

impl PageDataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask `store` to load `keys` if they differ from the last requested
    /// list. Returns whether a request was issued. An empty list is
    /// remembered but never requested.
    pub fn request<S>(&mut self, store: &S, keys: &[ResourceKey]) -> bool
    where
        S: RemoteDataStore + ?Sized,
    {
        if self.requested.as_deref() == Some(keys) {
            return false;
        }
        self.requested = Some(keys.to_vec());

        if keys.is_empty() {
            return false;
        }
        tracing::debug!("Page requested {:?}", keys);
        store.ensure_data_loaded(keys);
        true
    }

    /// Request `keys` and return the page-facing view of the store.
    pub fn load<'s, S>(
        &mut self,
        store: &'s S,
        keys: &[ResourceKey],
    ) -> PageData<'s, S>
    where
        S: RemoteDataStore + ?Sized,
    {
        self.request(store, keys);
        PageData::new(store, keys)
    }

    pub fn requested_keys(&self) -> Option<&[ResourceKey]> {
        self.requested.as_deref()
    }

    /// Forget the last request so the next call triggers again.
    pub fn reset(&mut self) {
        self.requested = None;
    }
}

/// What a page sees after declaring its keys.
pub struct PageData<'s, S: ?Sized> {
    store: &'s S,
    /// True while any of the page's keys is loading.
    pub is_loading: bool,
}

impl<'s, S> PageData<'s, S>
where
    S: RemoteDataStore + ?Sized,
{
    pub fn new(store: &'s S, keys: &[ResourceKey]) -> Self {
        Self {
            store,
            is_loading: is_loading(store.loading_states(), keys),
        }
    }

    pub fn data(&self) -> &'s DataMap<S::Payload> {
        self.store.data()
    }

    pub fn get(&self, key: &ResourceKey) -> Option<&'s S::Payload> {
        self.store.data().get(key)
    }

    pub fn loading_states(&self) -> &'s LoadingStates {
        self.store.loading_states()
    }

    pub fn fetch_data_by_key(&self, key: &ResourceKey, force: bool) {
        fetch_data_by_key(self.store, key, force);
    }

    pub fn refetch_data(&self, keys: &[ResourceKey]) {
        self.store.refetch_data(keys);
    }
}

/// Load a single key outside of a page's declared list. `force` bypasses
/// the cache.
pub fn fetch_data_by_key<S>(store: &S, key: &ResourceKey, force: bool)
where
    S: RemoteDataStore + ?Sized,
{
    let keys = std::slice::from_ref(key);
    if force {
        store.refetch_data(keys);
    } else {
        store.ensure_data_loaded(keys);
    }
}

/// True if any of `keys` is flagged as loading. Missing flags count as not
/// loading.
pub fn is_loading(loading_states: &LoadingStates, keys: &[ResourceKey]) -> bool {
    keys.iter()
        .any(|key| loading_states.get(key).copied().unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::is_loading;
    use crate::store::LoadingStates;
    use payloads::ResourceKey;

    #[test]
    fn test_is_loading() {
        let states: LoadingStates = [
            (ResourceKey::SUPPLIERS, false),
            (ResourceKey::STOCK_LOCATIONS, true),
        ]
        .into_iter()
        .collect();

        assert!(!is_loading(&states, &[]));
        assert!(!is_loading(&states, &[ResourceKey::SUPPLIERS]));
        assert!(is_loading(
            &states,
            &[ResourceKey::SUPPLIERS, ResourceKey::STOCK_LOCATIONS]
        ));
        // Absent keys are not loading
        assert!(!is_loading(&states, &[ResourceKey::from("unknown")]));
        assert!(!is_loading(&LoadingStates::new(), &[ResourceKey::PROFILE]));
    }
}
