use leptos::*;

use crate::{
    components::{
        guard::{ProtectedRoute, RequireUser},
        layout::Layout,
    },
    state::auth::use_session,
};

#[component]
fn Greeting(area: &'static str) -> impl IntoView {
    let session = use_session();
    let name = move || {
        session.with(|snapshot| {
            snapshot
                .user()
                .map(|user| user.display_name().to_string())
                .unwrap_or_default()
        })
    };
    view! {
        <section class="space-y-2">
            <h2 class="text-2xl font-semibold">{area}</h2>
            <p class="text-gray-600">"Welcome, " {name}</p>
        </section>
    }
}

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout>
                <Greeting area="My dashboard" />
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout>
                <Greeting area="Team overview" />
            </Layout>
        </ProtectedRoute>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout>
                <Greeting area="Administration" />
            </Layout>
        </ProtectedRoute>
    }
}

/// Landing page for any signed-in user; only checks presence.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireUser>
            <Layout>
                <Greeting area="Dashboard" />
            </Layout>
        </RequireUser>
    }
}
