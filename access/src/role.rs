use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RoleParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| RoleParseError::Unknown(s.to_string()))
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Roles permitted to view a page. An empty list admits any authenticated role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    roles: Vec<Role>,
}

impl AllowList {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn of(roles: &[Role]) -> Self {
        let mut list = Self::default();
        for role in roles {
            list.push(*role);
        }
        list
    }

    /// Builds a list from role names, matched case-insensitively.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, RoleParseError> {
        let mut list = Self::default();
        for name in names {
            list.push(name.as_ref().parse()?);
        }
        Ok(list)
    }

    fn push(&mut self, role: Role) {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn permits(&self, role: Role) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }
}

impl From<Vec<Role>> for AllowList {
    fn from(roles: Vec<Role>) -> Self {
        Self::of(&roles)
    }
}
