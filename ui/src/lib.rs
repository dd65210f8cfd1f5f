use payloads::{APIClient, HomePage};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod data_store;
mod hooks;
mod logs;
mod pages;
mod state;

pub use data_store::DataStoreHandle;
pub use state::{AuthState, State};

use components::MainLayout;
use hooks::use_authentication;
use pages::{
    HomeRedirect, LoginPage, NotFoundPage, ProfilePage, ResourcePage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <BrowserRouter>
            <Session />
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

/// Runs the startup session check inside the router.
#[function_component]
fn Session() -> Html {
    use_authentication();
    html! {}
}

#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/suppliers")]
    Suppliers,
    #[at("/stock-locations")]
    StockLocations,
    #[at("/finishing-units")]
    FinishingUnits,
    #[at("/orders")]
    ProcessingOrders,
    #[at("/activity")]
    ActivityLog,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<HomePage> for Route {
    fn from(page: HomePage) -> Self {
        match page {
            HomePage::Suppliers => Self::Suppliers,
            HomePage::StockLocations => Self::StockLocations,
            HomePage::FinishingUnits => Self::FinishingUnits,
            HomePage::ProcessingOrders => Self::ProcessingOrders,
            HomePage::ActivityLog => Self::ActivityLog,
            HomePage::Profile => Self::Profile,
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomeRedirect /> },
        Route::Login => html! { <LoginPage /> },
        Route::Suppliers => html! { <ResourcePage page={HomePage::Suppliers} /> },
        Route::StockLocations => {
            html! { <ResourcePage page={HomePage::StockLocations} /> }
        }
        Route::FinishingUnits => {
            html! { <ResourcePage page={HomePage::FinishingUnits} /> }
        }
        Route::ProcessingOrders => {
            html! { <ResourcePage page={HomePage::ProcessingOrders} /> }
        }
        Route::ActivityLog => {
            html! { <ResourcePage page={HomePage::ActivityLog} /> }
        }
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
