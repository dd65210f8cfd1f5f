use payloads::HomePage;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State};

const NAV_PAGES: [(HomePage, &str); 5] = [
    (HomePage::ProcessingOrders, "Orders"),
    (HomePage::Suppliers, "Suppliers"),
    (HomePage::StockLocations, "Stock"),
    (HomePage::FinishingUnits, "Finishing"),
    (HomePage::ActivityLog, "Activity"),
];

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();

    // Only pages the user may open are linked
    let links = state.profile().map(|profile| {
        NAV_PAGES
            .iter()
            .filter(|(page, _)| profile.permissions.can_view(*page))
            .map(|(page, label)| {
                html! {
                    <Link<Route> to={Route::from(*page)} classes="text-sm hover:underline">
                        {*label}
                    </Link<Route>>
                }
            })
            .collect::<Vec<Html>>()
    });

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::Home}>
                            <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{"Textile Admin"}</h1>
                        </Link<Route>>
                    </div>
                    if let Some(links) = links {
                        <nav class="flex items-center space-x-4">
                            {for links}
                            <Link<Route> to={Route::Profile} classes="text-sm hover:underline">
                                {"Profile"}
                            </Link<Route>>
                        </nav>
                    }
                </div>
            </div>
        </header>
    }
}
