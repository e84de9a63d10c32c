//! The route policy table shared by the edge gate and the client gate.
//!
//! Each rule pairs a path prefix with its access level. The edge only asks
//! whether a path is public or protected; the client gate additionally reads
//! the role allow-list attached to protected rules.

use crate::{
    error::PolicyError,
    role::{AllowList, Role},
};

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
pub const DEFAULT_AUTHENTICATED_PATH: &str = "/employee/dashboard";

/// A path prefix. `/admin`, `/admin/` and `/admin/*` all declare the same pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    prefix: String,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self, PolicyError> {
        let trimmed = raw.trim();
        if !trimmed.starts_with('/') {
            return Err(PolicyError::RelativePattern(raw.to_string()));
        }
        let without_glob = trimmed.strip_suffix("/*").unwrap_or(trimmed);
        let prefix = match without_glob.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Ok(Self {
            prefix: prefix.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// True when `path` equals the prefix or continues it past a `/`.
    pub fn matches(&self, path: &str) -> bool {
        if self.prefix == "/" {
            return path.starts_with('/');
        }
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected(AllowList),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pattern: RoutePattern,
    access: Access,
}

impl RouteRule {
    pub fn public(pattern: &str) -> Result<Self, PolicyError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            access: Access::Public,
        })
    }

    pub fn protected(pattern: &str, roles: &[Role]) -> Result<Self, PolicyError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            access: Access::Protected(AllowList::of(roles)),
        })
    }

    pub fn is_public(&self) -> bool {
        matches!(self.access, Access::Public)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    rules: Vec<RouteRule>,
}

impl RoutePolicy {
    pub fn new(rules: Vec<RouteRule>) -> Result<Self, PolicyError> {
        for (idx, rule) in rules.iter().enumerate() {
            if rules[..idx].iter().any(|earlier| earlier.pattern == rule.pattern) {
                return Err(PolicyError::DuplicatePattern(
                    rule.pattern.as_str().to_string(),
                ));
            }
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// First rule whose pattern matches `path`.
    pub fn lookup(&self, path: &str) -> Option<&RouteRule> {
        self.rules.iter().find(|rule| rule.pattern.matches(path))
    }

    /// Paths outside every rule bypass the edge gate entirely.
    pub fn is_gated(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.lookup(path).is_some_and(RouteRule::is_public)
    }

    pub fn allow_list_for(&self, path: &str) -> Option<&AllowList> {
        match self.lookup(path).map(|rule| &rule.access) {
            Some(Access::Protected(roles)) => Some(roles),
            _ => None,
        }
    }
}

fn builtin(prefix: &str, access: Access) -> RouteRule {
    RouteRule {
        pattern: RoutePattern {
            prefix: prefix.to_string(),
        },
        access,
    }
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            rules: vec![
                builtin(LOGIN_PATH, Access::Public),
                builtin("/register", Access::Public),
                builtin("/forgot-password", Access::Public),
                builtin("/employee", Access::Protected(AllowList::any())),
                builtin(
                    "/manager",
                    Access::Protected(AllowList::of(&[Role::Manager, Role::Admin])),
                ),
                builtin("/admin", Access::Protected(AllowList::of(&[Role::Admin]))),
                builtin("/dashboard", Access::Protected(AllowList::any())),
            ],
        }
    }
}
