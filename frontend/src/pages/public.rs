//! Public pages besides login. Account self-service lives upstream; these
//! screens only point users at it.

use leptos::*;

#[component]
fn PublicCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="w-full max-w-sm bg-white p-6 rounded-lg shadow space-y-3">
                <h2 class="text-lg font-semibold">{title}</h2>
                {children()}
                <a href="/login" class="text-sm text-blue-600">"Back to sign in"</a>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <PublicCard title="Create account">
            <p class="text-sm text-gray-600">
                "Accounts are created by your HR administrator. Ask them for an invitation."
            </p>
        </PublicCard>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <PublicCard title="Reset password">
            <p class="text-sm text-gray-600">
                "Contact your HR administrator to reset your password."
            </p>
        </PublicCard>
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <PublicCard title="Access denied">
            <p class="text-sm text-gray-600">
                "Your role does not have access to that page."
            </p>
            <a href="/employee/dashboard" class="text-sm text-blue-600">"Go to my dashboard"</a>
        </PublicCard>
    }
}
