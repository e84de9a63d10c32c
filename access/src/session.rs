use serde::{Deserialize, Serialize};

use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: Role,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Read view of the authentication state.
///
/// `is_authenticated` is derived from the presence of a user, so the two can
/// never disagree. A fresh snapshot starts out loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    user: Option<SessionUser>,
    is_loading: bool,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn authenticated(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Marks a resolution in flight; the current user is kept until it settles.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    /// Settles an in-flight resolution without changing the user.
    pub fn end_loading(&mut self) {
        self.is_loading = false;
    }

    pub fn resolve(&mut self, user: Option<SessionUser>) {
        self.user = user;
        self.is_loading = false;
    }

    pub fn clear(&mut self) {
        self.resolve(None);
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}
