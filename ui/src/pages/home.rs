use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{SignedOutFallback, use_require_auth};

/// Sends the user to the first page their permissions allow.
#[function_component]
pub fn HomeRedirect() -> Html {
    match use_require_auth() {
        Some(profile) => {
            let route = Route::from(profile.permissions.home_page());
            html! { <Redirect<Route> to={route} /> }
        }
        None => html! { <SignedOutFallback /> },
    }
}
