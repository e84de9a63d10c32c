use std::rc::Rc;

use hrms_access::SessionSnapshot;
use leptos::*;

use crate::{
    state::auth::SessionContext,
    test_support::helpers::RecordingNavigator,
    utils::navigation::NavigatorHandle,
};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` as if the browser were at `path` with the given session.
pub fn render_at<F, N>(snapshot: SessionSnapshot, path: &'static str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_context(SessionContext::seeded(snapshot));
        provide_context(NavigatorHandle(Rc::new(RecordingNavigator::at(path))));
        view()
    })
}
