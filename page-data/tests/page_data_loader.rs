use page_data::{
    DataContext, DataMap, LoadMode, LoadRequest, LoadingStates, PageDataLoader,
    RemoteDataStore, ResourceKey,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Store that records every request and never fetches anything.
#[derive(Default)]
struct RecordingStore {
    data: DataMap<String>,
    loading_states: LoadingStates,
    ensured: RefCell<Vec<Vec<ResourceKey>>>,
    refetched: RefCell<Vec<Vec<ResourceKey>>>,
}

impl RecordingStore {
    fn with_loading(states: &[(&str, bool)]) -> Self {
        Self {
            loading_states: states
                .iter()
                .map(|(key, loading)| (ResourceKey::from(*key), *loading))
                .collect(),
            ..Default::default()
        }
    }

    fn ensured(&self) -> Vec<Vec<ResourceKey>> {
        self.ensured.borrow().clone()
    }

    fn refetched(&self) -> Vec<Vec<ResourceKey>> {
        self.refetched.borrow().clone()
    }
}

impl RemoteDataStore for RecordingStore {
    type Payload = String;

    fn ensure_data_loaded(&self, keys: &[ResourceKey]) {
        self.ensured.borrow_mut().push(keys.to_vec());
    }

    fn refetch_data(&self, keys: &[ResourceKey]) {
        self.refetched.borrow_mut().push(keys.to_vec());
    }

    fn data(&self) -> &DataMap<String> {
        &self.data
    }

    fn loading_states(&self) -> &LoadingStates {
        &self.loading_states
    }
}

fn keys(names: &[&str]) -> Vec<ResourceKey> {
    names.iter().map(|name| ResourceKey::from(*name)).collect()
}

#[test]
fn test_empty_keys_never_trigger() {
    let store = RecordingStore::with_loading(&[("suppliers", true)]);
    let mut loader = PageDataLoader::new();

    let page = loader.load(&store, &[]);
    assert!(!page.is_loading);
    let page = loader.load(&store, &[]);
    assert!(!page.is_loading);

    assert!(store.ensured().is_empty());
    assert_eq!(loader.requested_keys(), Some(&[][..]));
}

#[test]
fn test_single_loading_key() {
    let store = RecordingStore::with_loading(&[("suppliers", true)]);
    let mut loader = PageDataLoader::new();

    let page = loader.load(&store, &keys(&["suppliers"]));
    assert!(page.is_loading);
    assert_eq!(store.ensured(), vec![keys(&["suppliers"])]);
}

#[test]
fn test_any_loading_key_makes_page_loading() {
    let store = RecordingStore::with_loading(&[
        ("suppliers", false),
        ("stockLocations", true),
    ]);
    let mut loader = PageDataLoader::new();

    let page = loader.load(&store, &keys(&["suppliers", "stockLocations"]));
    assert!(page.is_loading);
}

#[test]
fn test_absent_keys_are_not_loading() {
    let store = RecordingStore::with_loading(&[("suppliers", false)]);
    let mut loader = PageDataLoader::new();

    let page = loader.load(&store, &keys(&["suppliers", "finishingUnits"]));
    assert!(!page.is_loading);
}

#[test]
fn test_same_keys_trigger_once() {
    let store = RecordingStore::default();
    let mut loader = PageDataLoader::new();

    // A fresh Vec each time, as a page would build on every render
    assert!(loader.request(&store, &keys(&["x"])));
    assert!(!loader.request(&store, &keys(&["x"])));

    assert_eq!(store.ensured(), vec![keys(&["x"])]);
}

#[test]
fn test_changed_keys_trigger_again() {
    let store = RecordingStore::default();
    let mut loader = PageDataLoader::new();

    loader.request(&store, &keys(&["suppliers"]));
    loader.request(&store, &keys(&["suppliers", "stockLocations"]));
    loader.request(&store, &keys(&["suppliers", "stockLocations"]));
    loader.request(&store, &[]);
    loader.request(&store, &keys(&["suppliers"]));

    assert_eq!(
        store.ensured(),
        vec![
            keys(&["suppliers"]),
            keys(&["suppliers", "stockLocations"]),
            keys(&["suppliers"]),
        ]
    );
}

#[test]
fn test_reset_retriggers() {
    let store = RecordingStore::default();
    let mut loader = PageDataLoader::new();

    loader.request(&store, &keys(&["profile"]));
    loader.reset();
    assert_eq!(loader.requested_keys(), None);
    loader.request(&store, &keys(&["profile"]));

    assert_eq!(store.ensured().len(), 2);
}

#[test]
fn test_fetch_data_by_key() {
    let store = RecordingStore::default();
    let mut loader = PageDataLoader::new();
    let page = loader.load(&store, &[]);

    page.fetch_data_by_key(&ResourceKey::ACTIVITY_LOG, true);
    page.fetch_data_by_key(&ResourceKey::PROCESSING_ORDERS, false);

    assert_eq!(store.refetched(), vec![keys(&["activityLog"])]);
    assert_eq!(store.ensured(), vec![keys(&["processingOrders"])]);
}

#[test]
fn test_refetch_data_passes_through() {
    let store = RecordingStore::default();
    let mut loader = PageDataLoader::new();
    let page = loader.load(&store, &keys(&["suppliers"]));

    page.refetch_data(&keys(&["suppliers", "stockLocations"]));

    assert_eq!(
        store.refetched(),
        vec![keys(&["suppliers", "stockLocations"])]
    );
    assert_eq!(store.ensured(), vec![keys(&["suppliers"])]);
}

/// Store shaped like the UI one: a snapshot of shared state for reading,
/// with requests applied to the shared state and queued for fetching.
struct SnapshotStore {
    snapshot: DataContext<String>,
    shared: Rc<RefCell<DataContext<String>>>,
    pending: Rc<RefCell<Vec<LoadRequest>>>,
}

impl SnapshotStore {
    fn new(
        shared: &Rc<RefCell<DataContext<String>>>,
        pending: &Rc<RefCell<Vec<LoadRequest>>>,
    ) -> Self {
        Self {
            snapshot: shared.borrow().clone(),
            shared: shared.clone(),
            pending: pending.clone(),
        }
    }

    fn begin(&self, keys: &[ResourceKey], mode: LoadMode) {
        let issued = self.shared.borrow_mut().begin_load(keys, mode);
        self.pending.borrow_mut().extend(issued);
    }
}

impl RemoteDataStore for SnapshotStore {
    type Payload = String;

    fn ensure_data_loaded(&self, keys: &[ResourceKey]) {
        self.begin(keys, LoadMode::IfMissing);
    }

    fn refetch_data(&self, keys: &[ResourceKey]) {
        self.begin(keys, LoadMode::Force);
    }

    fn data(&self) -> &DataMap<String> {
        self.snapshot.data()
    }

    fn loading_states(&self) -> &LoadingStates {
        self.snapshot.loading_states()
    }
}

fn pending_keys(pending: &Rc<RefCell<Vec<LoadRequest>>>) -> Vec<ResourceKey> {
    pending
        .borrow()
        .iter()
        .map(|request| request.key.clone())
        .collect()
}

#[test]
fn test_two_pages_share_one_fetch() {
    let shared = Rc::new(RefCell::new(DataContext::new()));
    let pending = Rc::new(RefCell::new(Vec::new()));
    let mut orders_page = PageDataLoader::new();
    let mut suppliers_page = PageDataLoader::new();

    let store = SnapshotStore::new(&shared, &pending);
    orders_page.request(
        &store,
        &[ResourceKey::PROCESSING_ORDERS, ResourceKey::SUPPLIERS],
    );
    suppliers_page.request(&store, &[ResourceKey::SUPPLIERS]);
    assert_eq!(
        pending_keys(&pending),
        vec![ResourceKey::PROCESSING_ORDERS, ResourceKey::SUPPLIERS]
    );

    // Next render sees both keys loading
    let store = SnapshotStore::new(&shared, &pending);
    let page = suppliers_page.load(&store, &[ResourceKey::SUPPLIERS]);
    assert!(page.is_loading);
    assert_eq!(page.get(&ResourceKey::SUPPLIERS), None);

    for request in pending.borrow_mut().drain(..) {
        let payload = format!("{} payload", request.key);
        shared.borrow_mut().finish_load(request, Ok(payload));
    }

    let store = SnapshotStore::new(&shared, &pending);
    let page = orders_page.load(
        &store,
        &[ResourceKey::PROCESSING_ORDERS, ResourceKey::SUPPLIERS],
    );
    assert!(!page.is_loading);
    assert_eq!(
        page.get(&ResourceKey::SUPPLIERS).map(String::as_str),
        Some("suppliers payload")
    );

    // A forced fetch goes out even though the key is cached
    page.fetch_data_by_key(&ResourceKey::SUPPLIERS, true);
    assert_eq!(pending_keys(&pending), vec![ResourceKey::SUPPLIERS]);
    // A plain fetch of a cached key does nothing
    page.fetch_data_by_key(&ResourceKey::PROCESSING_ORDERS, false);
    assert_eq!(pending.borrow().len(), 1);
}
