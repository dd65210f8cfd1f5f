use payloads::responses::{FinishingUnit, Supplier};
use payloads::{HomePage, Resource, ResourceKey};
use yew::prelude::*;

use crate::hooks::{
    PageDataHookReturn, SignedOutFallback, use_page_data, use_require_auth,
    use_title,
};

/// Keys a list page needs. The first one is the page's own table; the rest
/// are lookups for display names.
pub fn page_keys(page: HomePage) -> Vec<ResourceKey> {
    match page {
        HomePage::ProcessingOrders => vec![
            ResourceKey::PROCESSING_ORDERS,
            ResourceKey::SUPPLIERS,
            ResourceKey::FINISHING_UNITS,
        ],
        other => vec![other.resource_key()],
    }
}

fn page_title(page: HomePage) -> &'static str {
    match page {
        HomePage::Suppliers => "Suppliers",
        HomePage::StockLocations => "Stock Locations",
        HomePage::FinishingUnits => "Finishing Units",
        HomePage::ProcessingOrders => "Processing Orders",
        HomePage::ActivityLog => "Activity Log",
        HomePage::Profile => "Profile",
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub page: HomePage,
}

#[function_component]
pub fn ResourcePage(props: &Props) -> Html {
    let Some(profile) = use_require_auth() else {
        return html! { <SignedOutFallback /> };
    };

    if !profile.permissions.can_view(props.page) {
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {"You don't have access to this page."}
                </p>
            </div>
        };
    }

    html! { <ResourceContent page={props.page} /> }
}

#[function_component]
fn ResourceContent(props: &Props) -> Html {
    let title = page_title(props.page);
    use_title(title);

    let keys = page_keys(props.page);
    let primary = keys[0].clone();
    let page = use_page_data(keys.clone());

    let on_refresh = {
        let refetch = page.refetch_data.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(keys.clone()))
    };

    let body = match page.get(&primary) {
        None if page.is_loading => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("Loading {}...", title.to_lowercase())}
                </p>
            </div>
        },
        None => match page.error(&primary) {
            Some(error) => html! {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading {}: {}", title.to_lowercase(), error)}
                    </p>
                </div>
            },
            None => html! {},
        },
        Some(resource) if resource.is_empty() => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("No {} yet.", title.to_lowercase())}
                </p>
            </div>
        },
        Some(resource) => html! {
            <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                {for resource_rows(resource, &page).into_iter().map(|row| html! {
                    <li class="py-3 text-sm">{row}</li>
                })}
            </ul>
        },
    };

    html! {
        <div class="space-y-4">
            <div class="flex justify-between items-center">
                <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {title}
                </h2>
                <button
                    onclick={on_refresh}
                    disabled={page.is_loading}
                    class="text-sm underline disabled:opacity-50"
                >
                    {if page.is_loading { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            {body}
        </div>
    }
}

fn resource_rows(resource: &Resource, page: &PageDataHookReturn) -> Vec<String> {
    match resource {
        Resource::Suppliers(suppliers) => suppliers
            .iter()
            .map(|s| match &s.contact_name {
                Some(contact) => format!("{} ({})", s.name, contact),
                None => s.name.clone(),
            })
            .collect(),
        Resource::StockLocations(locations) => locations
            .iter()
            .map(|l| match l.capacity_meters {
                Some(capacity) => format!("{} · {} m", l.name, capacity),
                None => l.name.clone(),
            })
            .collect(),
        Resource::FinishingUnits(units) => units
            .iter()
            .map(|u| {
                let status = if u.is_active { "active" } else { "inactive" };
                format!("{} · {} · {}", u.name, u.process, status)
            })
            .collect(),
        Resource::ProcessingOrders(orders) => {
            let suppliers: &[Supplier] = match page.get(&ResourceKey::SUPPLIERS) {
                Some(Resource::Suppliers(suppliers)) => suppliers.as_slice(),
                _ => &[],
            };
            let units: &[FinishingUnit] = match page.get(&ResourceKey::FINISHING_UNITS) {
                Some(Resource::FinishingUnits(units)) => units.as_slice(),
                _ => &[],
            };
            orders
                .iter()
                .map(|o| {
                    format!(
                        "{} · {} · {} m · {} → {} · {}",
                        o.order_number,
                        o.fabric,
                        o.quantity_meters,
                        supplier_name(suppliers, o.supplier_id),
                        unit_name(units, o.finishing_unit_id),
                        o.status,
                    )
                })
                .collect()
        }
        Resource::ActivityLog(entries) => entries
            .iter()
            .map(|e| format!("{} · {} {}", e.created_at, e.username, e.action))
            .collect(),
        Resource::Profile(profile) => vec![profile.username.clone()],
    }
}

fn supplier_name(suppliers: &[Supplier], id: payloads::SupplierId) -> String {
    suppliers
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "Unknown supplier".into())
}

fn unit_name(units: &[FinishingUnit], id: payloads::FinishingUnitId) -> String {
    units
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Unknown unit".into())
}
