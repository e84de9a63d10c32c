use hrms_access::RoutePolicy;
use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{
        AdminDashboardPage, DashboardPage, EmployeeDashboardPage, ForgotPasswordPage, LoginPage,
        ManagerDashboardPage, RegisterPage, UnauthorizedPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/forgot-password",
    "/unauthorized",
    "/dashboard",
    "/employee/dashboard",
    "/manager/dashboard",
    "/admin/dashboard",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/employee/dashboard",
    "/manager/dashboard",
    "/admin/dashboard",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login", "/register", "/forgot-password"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_context(RoutePolicy::default());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/forgot-password" view=ForgotPasswordPage/>
                    <Route path="/unauthorized" view=UnauthorizedPage/>
                    <Route path="/dashboard" view=DashboardPage/>
                    <Route path="/employee/dashboard" view=EmployeeDashboardPage/>
                    <Route path="/manager/dashboard" view=ManagerDashboardPage/>
                    <Route path="/admin/dashboard" view=AdminDashboardPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrms_access::{Role, DEFAULT_AUTHENTICATED_PATH, LOGIN_PATH, UNAUTHORIZED_PATH};
    use std::collections::HashSet;

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS.iter().chain(PUBLIC_ROUTE_PATHS) {
            assert!(all.contains(path), "route missing from ROUTE_PATHS: {}", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn route_lists_agree_with_policy() {
        let policy = RoutePolicy::default();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(policy.is_gated(path), "{} not gated", path);
            assert!(policy.allow_list_for(path).is_some(), "{} not protected", path);
        }
        for path in PUBLIC_ROUTE_PATHS {
            assert!(policy.is_public(path), "{} not public", path);
        }
        assert!(!policy.is_gated(UNAUTHORIZED_PATH));
    }

    #[test]
    fn redirect_targets_are_routed() {
        for target in [LOGIN_PATH, UNAUTHORIZED_PATH, DEFAULT_AUTHENTICATED_PATH] {
            assert!(ROUTE_PATHS.contains(&target), "{} has no route", target);
        }
    }

    #[test]
    fn default_landing_page_admits_every_role() {
        let policy = RoutePolicy::default();
        let roles = policy.allow_list_for(DEFAULT_AUTHENTICATED_PATH).unwrap();
        assert!(Role::ALL.iter().all(|role| roles.permits(*role)));
    }
}
