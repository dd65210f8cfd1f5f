use payloads::{requests, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State};

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    #[prop_or_default]
    pub on_success: Callback<responses::UserProfile>,
}

#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    let (_state, dispatch) = use_store::<State>();

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let username = username_input.value();
            let password = password_input.value();

            if username.is_empty() || password.is_empty() {
                error_message.set(Some(
                    "Please enter both username and password".to_string(),
                ));
                return;
            }

            let credentials = requests::LoginCredentials { username, password };
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let on_success = on_success.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client = crate::get_api_client();
                match api_client.login(&credentials).await {
                    Ok(()) => match api_client.user_profile().await {
                        Ok(profile) => {
                            tracing::info!("Signed in as {}", profile.username);
                            dispatch.reduce_mut(|state| {
                                state.auth_state =
                                    AuthState::LoggedIn(profile.clone());
                            });
                            on_success.emit(profile);
                        }
                        Err(e) => {
                            tracing::warn!("Failed to load profile: {}", e);
                            error_message.set(Some(
                                "Login succeeded but failed to load profile"
                                    .to_string(),
                            ));
                        }
                    },
                    Err(e) => {
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
            <h1 class="mb-6 text-center text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Sign in"}
            </h1>

            <form onsubmit={on_submit} class="space-y-6">
                if let Some(error) = &*error_message {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    </div>
                }

                <div>
                    <label for="username" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Username"}
                    </label>
                    <input
                        ref={username_ref}
                        type="text"
                        id="username"
                        name="username"
                        autocomplete="username"
                        required={true}
                        class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                    />
                </div>

                <div>
                    <label for="password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Password"}
                    </label>
                    <input
                        ref={password_ref}
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        required={true}
                        class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100"
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
                >
                    {if *is_loading { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
