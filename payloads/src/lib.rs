pub mod api_client;
pub mod requests;
pub mod responses;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

pub use api_client::{APIClient, ClientError};
pub use responses::{HomePage, Permissions, Resource};

/// Name of one cached collection on the backend, e.g. `"suppliers"`.
///
/// Keys are opaque: two keys are the same resource only if their strings
/// match exactly. The well-known keys used by the dashboard pages are
/// available as associated constants, but any string is accepted.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ResourceKey(Cow<'static, str>);

impl ResourceKey {
    pub const SUPPLIERS: Self = Self(Cow::Borrowed("suppliers"));
    pub const STOCK_LOCATIONS: Self = Self(Cow::Borrowed("stockLocations"));
    pub const FINISHING_UNITS: Self = Self(Cow::Borrowed("finishingUnits"));
    pub const PROCESSING_ORDERS: Self =
        Self(Cow::Borrowed("processingOrders"));
    pub const ACTIVITY_LOG: Self = Self(Cow::Borrowed("activityLog"));
    pub const PROFILE: Self = Self(Cow::Borrowed("profile"));

    pub fn new(key: impl Into<String>) -> Self {
        Self(Cow::Owned(key.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ResourceKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl AsRef<str> for ResourceKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct UserId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct SupplierId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct StockLocationId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct FinishingUnitId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct ProcessingOrderId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct ActivityId(pub Uuid);
