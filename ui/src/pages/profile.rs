use payloads::{Resource, ResourceKey};
use yew::prelude::*;

use crate::hooks::{
    SignedOutFallback, use_logout, use_page_data, use_require_auth, use_title,
};

#[function_component]
pub fn ProfilePage() -> Html {
    match use_require_auth() {
        Some(_) => html! { <ProfileContent /> },
        None => html! { <SignedOutFallback /> },
    }
}

#[function_component]
fn ProfileContent() -> Html {
    use_title("Profile");
    let logout = use_logout();
    let page = use_page_data(vec![ResourceKey::PROFILE]);

    // Reloading also refreshes the session profile and its permissions
    let on_reload = {
        let fetch = page.fetch_data_by_key.clone();
        Callback::from(move |_: MouseEvent| {
            fetch.emit((ResourceKey::PROFILE, true));
        })
    };

    let details = match page.get(&ResourceKey::PROFILE) {
        Some(Resource::Profile(profile)) => {
            let p = &profile.permissions;
            let granted: Vec<&str> = [
                (p.is_admin, "Administrator"),
                (p.manage_suppliers, "Suppliers"),
                (p.manage_stock, "Stock locations"),
                (p.manage_finishing, "Finishing units"),
                (p.manage_orders, "Processing orders"),
                (p.view_activity_log, "Activity log"),
            ]
            .into_iter()
            .filter_map(|(allowed, label)| allowed.then_some(label))
            .collect();

            html! {
                <dl class="space-y-2 text-sm">
                    <div><dt class="font-medium">{"Username"}</dt><dd>{profile.username.clone()}</dd></div>
                    <div><dt class="font-medium">{"Email"}</dt><dd>{profile.email.clone()}</dd></div>
                    if let Some(display_name) = &profile.display_name {
                        <div><dt class="font-medium">{"Display name"}</dt><dd>{display_name.clone()}</dd></div>
                    }
                    <div>
                        <dt class="font-medium">{"Access"}</dt>
                        <dd>{if granted.is_empty() { "None".to_string() } else { granted.join(", ") }}</dd>
                    </div>
                </dl>
            }
        }
        _ if page.is_loading => html! {
            <p class="text-neutral-600 dark:text-neutral-400">{"Loading profile..."}</p>
        },
        _ => match page.error(&ResourceKey::PROFILE) {
            Some(error) => html! {
                <p class="text-sm text-red-700 dark:text-red-400">{error.clone()}</p>
            },
            None => html! {},
        },
    };

    html! {
        <div class="max-w-md space-y-6">
            <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">{"Profile"}</h2>
            {details}
            <div class="flex gap-4">
                <button onclick={on_reload} disabled={page.is_loading} class="text-sm underline">
                    {"Reload"}
                </button>
                <button onclick={logout} class="text-sm underline">{"Sign out"}</button>
            </div>
        </div>
    }
}
