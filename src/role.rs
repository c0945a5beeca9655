//! Role enumeration and capability implication

use serde::{Deserialize, Serialize};

/// Access level for a signed-in AgriLink principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access
    Admin,
    /// Content moderation access
    Moderator,
    /// Baseline access
    User,
    /// Field operations access
    FieldOfficer,
}

impl Role {
    /// Parse from the stored string form, e.g. `"field_officer"`
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "moderator" => Some(Role::Moderator),
            "user" => Some(Role::User),
            "field_officer" => Some(Role::FieldOfficer),
            _ => None,
        }
    }

    /// Parse a role value read from the store.
    ///
    /// The store is not trusted to hold only valid variants: anything that is
    /// not one of the four enumerated strings maps to the least-privileged
    /// role rather than being passed through.
    pub fn from_stored(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Role::User)
    }

    /// The stored string form of this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
            Role::FieldOfficer => "field_officer",
        }
    }

    /// Whether this role carries moderator capability. Admin implies it.
    pub fn implies_moderator(&self) -> bool {
        matches!(self, Role::Moderator | Role::Admin)
    }

    /// Whether this role carries field-officer capability. Admin implies it.
    pub fn implies_field_officer(&self) -> bool {
        matches!(self, Role::FieldOfficer | Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
