use crate::components::LoginForm;
use crate::{AuthState, State};
use payloads::responses::UserProfile;
use yew::prelude::*;
use yewdux::use_store;

/// Hook that requires authentication. Returns the user profile if logged in,
/// or None if logged out or still checking auth status.
#[hook]
pub fn use_require_auth() -> Option<UserProfile> {
    let (state, _) = use_store::<State>();
    state.profile().cloned()
}

/// Shown in place of a page while auth is being checked or when the
/// session is gone.
#[function_component]
pub fn SignedOutFallback() -> Html {
    let (state, _) = use_store::<State>();

    match &state.auth_state {
        AuthState::Unknown => {
            // Show spinner while checking auth
            html! {
                <div class="text-center py-8">
                    <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
                </div>
            }
        }
        // Signing in swaps the page content back in
        AuthState::LoggedOut => html! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <LoginForm />
            </div>
        },
        AuthState::LoggedIn(_) => html! {},
    }
}
