use hrms_access::{Role, LOGIN_PATH};
use leptos::*;

use crate::{
    state::auth::{use_logout_action, use_session},
    utils::navigation::use_navigator,
};

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center p-8" role="status">
            <div class="h-8 w-8 rounded-full border-4 border-gray-300 border-t-blue-600 animate-spin"></div>
            <span class="sr-only">"Loading"</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="rounded-md bg-red-50 p-3 text-sm text-red-700" role="alert">
            {move || message.get()}
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();
    let logout_action = use_logout_action();
    let logout_pending = logout_action.pending();

    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            navigator.navigate(LOGIN_PATH);
        }
    });

    let user_label = move || {
        session.with(|snapshot| {
            snapshot
                .user()
                .map(|user| format!("{} ({})", user.display_name(), user.role))
                .unwrap_or_default()
        })
    };
    let has_role = move |allowed: &'static [Role]| {
        session.with(|snapshot| snapshot.role().is_some_and(|role| allowed.contains(&role)))
    };
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <header class="bg-white shadow-sm border-b">
            <div class="max-w-7xl mx-auto px-4 flex justify-between items-center h-16">
                <h1 class="text-xl font-semibold">"HRMS"</h1>
                <nav class="flex items-center space-x-4 text-sm">
                    <a href="/employee/dashboard">"My dashboard"</a>
                    <Show when=move || has_role(&[Role::Manager, Role::Admin])>
                        <a href="/manager/dashboard">"Team"</a>
                    </Show>
                    <Show when=move || has_role(&[Role::Admin])>
                        <a href="/admin/dashboard">"Administration"</a>
                    </Show>
                    <span class="text-gray-500">{user_label}</span>
                    <button
                        class="px-3 py-1 rounded-md border"
                        on:click=on_logout
                        disabled=move || logout_pending.get()
                    >
                        "Sign out"
                    </button>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main class="max-w-7xl mx-auto py-6 px-4">{children()}</main>
        </div>
    }
}
