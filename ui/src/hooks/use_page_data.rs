use page_data::{
    DataMap, LoadingStates, PageDataLoader, RemoteDataStore, is_loading,
};
use payloads::{Resource, ResourceKey};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, data_store::DataStoreHandle};

/// Page data hook return type
pub struct PageDataHookReturn {
    state: Rc<State>,
    /// True while any of the page's keys is loading
    pub is_loading: bool,
    /// Load one key; `true` forces a refetch even if it is cached
    pub fetch_data_by_key: Callback<(ResourceKey, bool)>,
    pub refetch_data: Callback<Vec<ResourceKey>>,
}

impl PageDataHookReturn {
    pub fn data(&self) -> &DataMap<Resource> {
        self.state.data.data()
    }

    pub fn loading_states(&self) -> &LoadingStates {
        self.state.data.loading_states()
    }

    pub fn get(&self, key: &ResourceKey) -> Option<&Resource> {
        self.state.data.get(key)
    }

    /// Error from the last failed load of `key`, if any.
    pub fn error(&self, key: &ResourceKey) -> Option<&String> {
        self.state.data.error(key)
    }
}

/// Declare the resources a page needs.
///
/// The keys are requested from the global store after the first render
/// and again whenever their contents change. Overlapping requests from
/// other pages are deduplicated by the store.
///
/// # Example
///
/// ```ignore
/// #[function_component]
/// fn SuppliersTable() -> Html {
///     let page = use_page_data(vec![ResourceKey::SUPPLIERS]);
///     if page.is_loading {
///         return html! { <p>{"Loading suppliers..."}</p> };
///     }
///     // render page.get(&ResourceKey::SUPPLIERS)
/// }
/// ```
#[hook]
pub fn use_page_data(keys: Vec<ResourceKey>) -> PageDataHookReturn {
    let (state, dispatch) = use_store::<State>();
    let loader = use_mut_ref(PageDataLoader::new);
    let store = DataStoreHandle::new(state.clone(), dispatch);

    // Runs after every render; the loader only triggers on a new key list
    {
        let store = store.clone();
        let keys = keys.clone();
        use_effect(move || {
            loader.borrow_mut().request(&store, &keys);
        });
    }

    let fetch_data_by_key = {
        let store = store.clone();
        Callback::from(move |(key, force): (ResourceKey, bool)| {
            page_data::fetch_data_by_key(&store, &key, force);
        })
    };

    let refetch_data = Callback::from(move |keys: Vec<ResourceKey>| {
        store.refetch_data(&keys);
    });

    PageDataHookReturn {
        is_loading: is_loading(state.data.loading_states(), &keys),
        state,
        fetch_data_by_key,
        refetch_data,
    }
}
