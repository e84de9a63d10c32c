use hrms_access::DEFAULT_AUTHENTICATED_PATH;
use leptos::{ev::SubmitEvent, *};

use crate::{
    api::LoginRequest,
    components::layout::ErrorMessage,
    pages::login::utils,
    state::auth,
    utils::navigation::use_navigator,
};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let navigator = use_navigator();
    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    set_error.set(None);
                    navigator.navigate(DEFAULT_AUTHENTICATED_PATH);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&email, &password) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <form class="w-full max-w-sm space-y-4 bg-white p-6 rounded-lg shadow" on:submit=on_submit>
                <h2 class="text-lg font-semibold">"Sign in"</h2>
                <Show when=move || error.get().is_some()>
                    <ErrorMessage message=Signal::derive(move || error.get().unwrap_or_default()) />
                </Show>
                <input
                    type="email"
                    name="email"
                    placeholder="Email"
                    class="w-full border rounded-md px-3 py-2"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    class="w-full border rounded-md px-3 py-2"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="w-full rounded-md bg-blue-600 text-white py-2"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <div class="flex justify-between text-sm">
                    <a href="/register">"Create account"</a>
                    <a href="/forgot-password">"Forgot password?"</a>
                </div>
            </form>
        </div>
    }
}
