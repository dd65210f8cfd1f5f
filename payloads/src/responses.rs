use crate::{
    ActivityId, FinishingUnitId, ProcessingOrderId, ResourceKey,
    StockLocationId, SupplierId, UserId,
};
use derive_more::Display;
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A warehouse or shelf area where greige and finished fabric is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLocation {
    pub id: StockLocationId,
    pub name: String,
    pub description: Option<String>,
    /// Capacity in meters of fabric, if tracked
    pub capacity_meters: Option<Decimal>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An external or in-house unit performing a finishing process (dyeing,
/// printing, washing...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishingUnit {
    pub id: FinishingUnitId,
    pub name: String,
    pub process: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProcess,
    Finished,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOrder {
    pub id: ProcessingOrderId,
    pub order_number: String,
    pub supplier_id: SupplierId,
    pub finishing_unit_id: FinishingUnitId,
    pub stock_location_id: Option<StockLocationId>,
    pub fabric: String,
    pub quantity_meters: Decimal,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: ActivityId,
    pub username: String,
    pub action: String,
    pub details: Option<String>,
    pub created_at: Timestamp,
}

/// Page-level permission flags attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub is_admin: bool,
    pub manage_suppliers: bool,
    pub manage_stock: bool,
    pub manage_finishing: bool,
    pub manage_orders: bool,
    pub view_activity_log: bool,
}

/// The page a user is sent to after login or when visiting `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HomePage {
    Suppliers,
    StockLocations,
    FinishingUnits,
    ProcessingOrders,
    ActivityLog,
    Profile,
}

impl Permissions {
    /// Admins land on the order board. Everyone else lands on the first
    /// page they are allowed to manage, or their profile if none.
    pub fn home_page(&self) -> HomePage {
        if self.is_admin {
            return HomePage::ProcessingOrders;
        }
        [
            (self.manage_suppliers, HomePage::Suppliers),
            (self.manage_stock, HomePage::StockLocations),
            (self.manage_finishing, HomePage::FinishingUnits),
            (self.manage_orders, HomePage::ProcessingOrders),
            (self.view_activity_log, HomePage::ActivityLog),
        ]
        .into_iter()
        .find_map(|(allowed, page)| allowed.then_some(page))
        .unwrap_or(HomePage::Profile)
    }

    pub fn can_view(&self, page: HomePage) -> bool {
        if self.is_admin {
            return true;
        }
        match page {
            HomePage::Suppliers => self.manage_suppliers,
            HomePage::StockLocations => self.manage_stock,
            HomePage::FinishingUnits => self.manage_finishing,
            HomePage::ProcessingOrders => self.manage_orders,
            HomePage::ActivityLog => self.view_activity_log,
            HomePage::Profile => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub permissions: Permissions,
}

/// A cached payload for one well-known [`ResourceKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Suppliers(Vec<Supplier>),
    StockLocations(Vec<StockLocation>),
    FinishingUnits(Vec<FinishingUnit>),
    ProcessingOrders(Vec<ProcessingOrder>),
    ActivityLog(Vec<ActivityLogEntry>),
    Profile(UserProfile),
}

impl Resource {
    pub fn key(&self) -> ResourceKey {
        match self {
            Self::Suppliers(_) => ResourceKey::SUPPLIERS,
            Self::StockLocations(_) => ResourceKey::STOCK_LOCATIONS,
            Self::FinishingUnits(_) => ResourceKey::FINISHING_UNITS,
            Self::ProcessingOrders(_) => ResourceKey::PROCESSING_ORDERS,
            Self::ActivityLog(_) => ResourceKey::ACTIVITY_LOG,
            Self::Profile(_) => ResourceKey::PROFILE,
        }
    }

    /// Number of rows a table view of this resource would show.
    pub fn len(&self) -> usize {
        match self {
            Self::Suppliers(v) => v.len(),
            Self::StockLocations(v) => v.len(),
            Self::FinishingUnits(v) => v.len(),
            Self::ProcessingOrders(v) => v.len(),
            Self::ActivityLog(v) => v.len(),
            Self::Profile(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HomePage {
    /// The resource a page needs before it can render its table.
    pub fn resource_key(&self) -> ResourceKey {
        match self {
            Self::Suppliers => ResourceKey::SUPPLIERS,
            Self::StockLocations => ResourceKey::STOCK_LOCATIONS,
            Self::FinishingUnits => ResourceKey::FINISHING_UNITS,
            Self::ProcessingOrders => ResourceKey::PROCESSING_ORDERS,
            Self::ActivityLog => ResourceKey::ACTIVITY_LOG,
            Self::Profile => ResourceKey::PROFILE,
        }
    }
}
