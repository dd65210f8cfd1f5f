use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::LoginForm;
use crate::hooks::use_title;
use crate::state::State;

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign in");
    let navigator = use_navigator();
    let (state, _) = use_store::<State>();

    // Already signed in: go to the home redirect
    {
        let navigator = navigator.clone();
        let signed_in = state.profile().is_some();
        use_effect_with(signed_in, move |signed_in| {
            if let (true, Some(navigator)) = (*signed_in, navigator) {
                navigator.push(&Route::Home);
            }
        });
    }

    let on_success = Callback::from(move |_: responses::UserProfile| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <LoginForm {on_success} />
        </div>
    }
}
