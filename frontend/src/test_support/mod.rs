#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::utils::{cookies::CredentialStore, navigation::Navigator};
    use hrms_access::{Role, SessionUser};
    use std::cell::RefCell;

    pub fn user_with_role(role: Role) -> SessionUser {
        SessionUser {
            id: format!("u-{}", role),
            email: format!("{}@example.com", role),
            name: Some(format!("{} User", role)),
            role,
        }
    }

    pub fn employee_user() -> SessionUser {
        user_with_role(Role::Employee)
    }

    pub fn manager_user() -> SessionUser {
        user_with_role(Role::Manager)
    }

    pub fn admin_user() -> SessionUser {
        user_with_role(Role::Admin)
    }

    pub fn user_json(role: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "u1",
            "email": "alice@example.com",
            "name": "Alice Example",
            "role": role
        })
    }

    #[derive(Default)]
    pub struct MemoryCredentialStore {
        token: RefCell<Option<String>>,
    }

    impl MemoryCredentialStore {
        pub fn with_token(token: &str) -> Self {
            Self {
                token: RefCell::new(Some(token.to_string())),
            }
        }
    }

    impl CredentialStore for MemoryCredentialStore {
        fn read(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn store(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
        }
    }

    /// Navigator that records targets instead of leaving the page.
    #[derive(Default)]
    pub struct RecordingNavigator {
        path: RefCell<Option<String>>,
        visits: RefCell<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn at(path: &str) -> Self {
            Self {
                path: RefCell::new(Some(path.to_string())),
                visits: RefCell::new(Vec::new()),
            }
        }

        pub fn visits(&self) -> Vec<String> {
            self.visits.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> Option<String> {
            self.path.borrow().clone()
        }

        fn navigate(&self, path: &str) {
            *self.path.borrow_mut() = Some(path.to_string());
            self.visits.borrow_mut().push(path.to_string());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub use host::*;

    #[cfg(not(target_arch = "wasm32"))]
    mod host {
        use super::{MemoryCredentialStore, RecordingNavigator};
        use crate::api::{
            test_support::mock::{MockTransport, BASE_URL},
            ApiClient,
        };
        use std::rc::Rc;

        pub struct Harness {
            pub transport: Rc<MockTransport>,
            pub credentials: Rc<MemoryCredentialStore>,
            pub navigator: Rc<RecordingNavigator>,
            pub client: ApiClient,
        }

        pub fn harness(token: Option<&str>, path: &str) -> Harness {
            let transport = Rc::new(MockTransport::new());
            let credentials = Rc::new(
                token
                    .map(MemoryCredentialStore::with_token)
                    .unwrap_or_default(),
            );
            let navigator = Rc::new(RecordingNavigator::at(path));
            let client = ApiClient::with_parts(
                transport.clone(),
                Some(BASE_URL.to_string()),
                credentials.clone(),
                navigator.clone(),
            );
            Harness {
                transport,
                credentials,
                navigator,
                client,
            }
        }
    }
}
