use page_data::{DataMap, LoadMode, LoadingStates, RemoteDataStore};
use payloads::{Resource, ResourceKey};
use std::rc::Rc;
use yewdux::prelude::*;

use crate::{State, get_api_client};

/// [`RemoteDataStore`] over the global yewdux [`State`].
///
/// Reads come from the state snapshot the handle was built with; requests
/// go through the dispatcher so deduplication always sees the latest state.
#[derive(Clone)]
pub struct DataStoreHandle {
    state: Rc<State>,
    dispatch: Dispatch<State>,
}

impl DataStoreHandle {
    pub fn new(state: Rc<State>, dispatch: Dispatch<State>) -> Self {
        Self { state, dispatch }
    }

    fn begin(&self, keys: &[ResourceKey], mode: LoadMode) {
        let mut issued = Vec::new();
        self.dispatch.reduce_mut(|state| {
            issued = state.data.begin_load(keys, mode);
        });

        for request in issued {
            let dispatch = self.dispatch.clone();

            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = match api_client.fetch_resource(&request.key).await {
                    Ok(resource) => matching_resource(&request.key, resource),
                    Err(e) => Err(e.to_string()),
                };

                dispatch.reduce_mut(|state| state.finish_load(request, result));
            });
        }
    }
}

/// Refuse to cache a payload under a key it does not belong to.
fn matching_resource(
    key: &ResourceKey,
    resource: Resource,
) -> Result<Resource, String> {
    if resource.key() == *key {
        Ok(resource)
    } else {
        Err(format!(
            "Expected {} but received {}",
            key,
            resource.key()
        ))
    }
}

impl RemoteDataStore for DataStoreHandle {
    type Payload = Resource;

    fn ensure_data_loaded(&self, keys: &[ResourceKey]) {
        self.begin(keys, LoadMode::IfMissing);
    }

    fn refetch_data(&self, keys: &[ResourceKey]) {
        self.begin(keys, LoadMode::Force);
    }

    fn data(&self) -> &DataMap<Resource> {
        self.state.data.data()
    }

    fn loading_states(&self) -> &LoadingStates {
        self.state.data.loading_states()
    }
}

#[cfg(test)]
mod tests {
    use super::matching_resource;
    use payloads::{Resource, ResourceKey};

    #[test]
    fn test_matching_resource() {
        assert_eq!(
            matching_resource(&ResourceKey::SUPPLIERS, Resource::Suppliers(vec![])),
            Ok(Resource::Suppliers(vec![]))
        );
        assert_eq!(
            matching_resource(
                &ResourceKey::STOCK_LOCATIONS,
                Resource::Suppliers(vec![])
            ),
            Err("Expected stockLocations but received suppliers".to_string())
        );
    }
}
