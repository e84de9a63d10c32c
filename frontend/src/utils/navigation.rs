use std::{cell::RefCell, rc::Rc};

use hrms_access::LOGIN_PATH;
use leptos::*;

pub trait Navigator {
    fn current_path(&self) -> Option<String>;
    fn navigate(&self, path: &str);
}

/// Full-page navigation through `window.location`, so the edge gate sees the
/// next request.
///
/// Once a navigation is issued the document is on its way out; until it
/// unloads, `current_path` reports the pending target and repeats of that
/// target are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

thread_local! {
    static PENDING_TARGET: RefCell<Option<String>> = const { RefCell::new(None) };
}

impl BrowserNavigator {
    fn pending_target() -> Option<String> {
        PENDING_TARGET.with(|pending| pending.borrow().clone())
    }

    #[cfg(target_arch = "wasm32")]
    fn location_path() -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn location_path() -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn set_location(path: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(path);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_location(path: &str) {
        log::debug!("navigation to {} skipped outside the browser", path);
    }
}

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        Self::pending_target().or_else(Self::location_path)
    }

    fn navigate(&self, path: &str) {
        if Self::pending_target().as_deref() == Some(path) {
            log::debug!("navigation to {} already pending", path);
            return;
        }
        PENDING_TARGET.with(|pending| *pending.borrow_mut() = Some(path.to_string()));
        Self::set_location(path);
    }
}

#[derive(Clone)]
pub struct NavigatorHandle(pub Rc<dyn Navigator>);

pub fn use_navigator() -> Rc<dyn Navigator> {
    use_context::<NavigatorHandle>()
        .map(|handle| handle.0)
        .unwrap_or_else(|| Rc::new(BrowserNavigator))
}

pub fn redirect_to_login_if_needed(navigator: &dyn Navigator) {
    if navigator.current_path().as_deref() == Some(LOGIN_PATH) {
        return;
    }
    navigator.navigate(LOGIN_PATH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::RecordingNavigator;

    #[test]
    fn redirect_skips_when_already_on_login() {
        let navigator = RecordingNavigator::at("/login");
        redirect_to_login_if_needed(&navigator);
        assert!(navigator.visits().is_empty());
    }

    #[test]
    fn redirect_navigates_from_other_pages() {
        let navigator = RecordingNavigator::at("/admin/employees");
        redirect_to_login_if_needed(&navigator);
        assert_eq!(navigator.visits(), vec!["/login".to_string()]);
    }

    #[test]
    fn browser_navigator_drops_repeat_of_pending_target() {
        let navigator = BrowserNavigator;
        navigator.navigate("/login");
        assert_eq!(navigator.current_path().as_deref(), Some("/login"));
        redirect_to_login_if_needed(&navigator);
        navigator.navigate("/login");
        assert_eq!(BrowserNavigator::pending_target().as_deref(), Some("/login"));
    }

    #[test]
    fn use_navigator_prefers_context() {
        let runtime = create_runtime();
        let recording = Rc::new(RecordingNavigator::at("/dashboard"));
        provide_context(NavigatorHandle(recording.clone()));
        let navigator = use_navigator();
        navigator.navigate("/unauthorized");
        assert_eq!(recording.visits(), vec!["/unauthorized".to_string()]);
        runtime.dispose();
    }
}
