//! On-demand loading of named resources for dashboard pages.
//!
//! A page declares the [`ResourceKey`]s it needs and hands them to a
//! [`PageDataLoader`], which asks the shared [`RemoteDataStore`] to load
//! them once per distinct key list. The store owns the cache, the per-key
//! loading flags and the deduplication of in-flight requests; the loader
//! only decides *when* to ask and derives an aggregate loading flag.
//!
//! [`DataContext`] is the state every store implementation keeps. It has no
//! knowledge of how payloads are fetched, so it can live inside a UI store
//! and be driven by whatever async runtime the UI uses.

pub mod loader;
pub mod store;

pub use loader::{PageData, PageDataLoader, fetch_data_by_key, is_loading};
pub use payloads::ResourceKey;
pub use store::{
    DataContext, DataMap, LoadMode, LoadRequest, LoadState, LoadingStates,
    RemoteDataStore,
};
