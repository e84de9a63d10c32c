use std::rc::Rc;

use hrms_access::{
    gate::{presence_gate, role_gate, transition_target},
    AllowList, GateState, RoutePolicy,
};
use leptos::*;
use leptos_router::{use_location, RouterContext};

use crate::{
    components::layout::LoadingSpinner,
    state::auth::{use_session, SessionContext},
    utils::navigation::{use_navigator, Navigator},
};

/// Navigates when `current` is a newly entered state. Returns `current` so it
/// can seed the next comparison.
fn follow_transition(
    navigator: &dyn Navigator,
    previous: Option<GateState>,
    current: GateState,
) -> GateState {
    if let Some(target) = transition_target(previous, current) {
        // A 401 from the API client may already have sent us there.
        if navigator.current_path().as_deref() == Some(target) {
            log::debug!("Gate entered {:?}; already at {}", current, target);
        } else {
            log::debug!("Gate entered {:?}; navigating to {}", current, target);
            navigator.navigate(target);
        }
    }
    current
}

/// Path the gate decides on: the explicit prop, else the router location when
/// mounted under a `<Router>`, else whatever the navigator reports.
fn route_path(explicit: Option<String>) -> Signal<String> {
    if let Some(path) = explicit {
        return Signal::derive(move || path.clone());
    }
    if use_context::<RouterContext>().is_some() {
        return use_location().pathname.into();
    }
    let path = use_navigator().current_path().unwrap_or_default();
    Signal::derive(move || path.clone())
}

fn gated_view(
    state: Memo<GateState>,
    navigator: Rc<dyn Navigator>,
    children: ChildrenFn,
) -> impl IntoView {
    create_effect(move |previous: Option<GateState>| {
        follow_transition(navigator.as_ref(), previous, state.get())
    });
    view! {
        <Show
            when=move || state.get().renders_children()
            fallback=move || {
                if state.get() == GateState::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for authenticated users whose role is allowed.
/// An empty `roles` list admits any authenticated user.
#[component]
pub fn RequireRole(
    #[prop(optional, into)] roles: AllowList,
    #[prop(optional)] session: Option<SessionContext>,
    children: ChildrenFn,
) -> impl IntoView {
    role_gated_view(roles, session, children)
}

fn role_gated_view(
    roles: AllowList,
    session: Option<SessionContext>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = session.unwrap_or_else(use_session);
    let state = create_memo(move |_| session.with(|snapshot| role_gate(snapshot, &roles)));
    gated_view(state, use_navigator(), children)
}

/// Role gate whose allow-list comes from the route policy entry for the
/// current location.
#[component]
pub fn ProtectedRoute(
    #[prop(optional, into)] path: Option<String>,
    #[prop(optional)] session: Option<SessionContext>,
    children: ChildrenFn,
) -> impl IntoView {
    let policy = use_context::<RoutePolicy>().unwrap_or_default();
    let path = route_path(path);
    let session = session.unwrap_or_else(use_session);
    let state = create_memo(move |_| {
        let path = path.get();
        if policy.is_public(&path) {
            return GateState::Authorized;
        }
        // Paths the policy does not list still require a signed-in user.
        let roles = policy.allow_list_for(&path).cloned().unwrap_or_default();
        session.with(|snapshot| role_gate(snapshot, &roles))
    });
    gated_view(state, use_navigator(), children)
}

/// Redirect-only guard: requires a signed-in user but performs no role
/// check, and never redirects away from the login page itself.
#[component]
pub fn RequireUser(
    #[prop(optional)] session: Option<SessionContext>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = session.unwrap_or_else(use_session);
    let path = route_path(None);
    let state = create_memo(move |_| {
        let path = path.get();
        session.with(|snapshot| presence_gate(snapshot, &path))
    });
    gated_view(state, use_navigator(), children)
}
