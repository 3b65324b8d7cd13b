use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::{generate_id, now_rfc3339};

/// The role assigned to a user: an existing role id, or the "new" sentinel
/// meaning a role is being created alongside this user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSelection {
    Existing(String),
    New,
}

impl RoleSelection {
    pub const NEW_SENTINEL: &'static str = "new";

    pub fn as_str(&self) -> &str {
        match self {
            RoleSelection::Existing(id) => id,
            RoleSelection::New => Self::NEW_SENTINEL,
        }
    }
}

impl std::fmt::Display for RoleSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoleSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Role selection must not be empty".to_string());
        }
        if trimmed == Self::NEW_SENTINEL {
            Ok(RoleSelection::New)
        } else {
            Ok(RoleSelection::Existing(trimmed.to_string()))
        }
    }
}

// Stored as the plain id string, with "new" reserved for the sentinel.
impl Serialize for RoleSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RoleSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

/// A saved user: a person assigned to a role and a club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub club: String,
    pub role: RoleSelection,
    pub created_at: String,
    pub updated_at: String,
}

/// An in-progress, unsaved user edit prior to commit into the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub club: String,
    pub role: Option<RoleSelection>,
}

impl User {
    pub fn new(
        full_name: String,
        phone_number: String,
        email: String,
        club: String,
        role: RoleSelection,
    ) -> Self {
        let now = now_rfc3339();
        Self {
            id: generate_id("user"),
            full_name,
            phone_number,
            email,
            club,
            role,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Stamp the record as modified now.
    pub fn touch(&mut self) {
        self.updated_at = now_rfc3339();
    }
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            phone_number: user.phone_number.clone(),
            email: user.email.clone(),
            club: user.club.clone(),
            role: Some(user.role.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_selection_parses_sentinel() {
        let selection: RoleSelection = "new".parse().unwrap();
        assert_eq!(selection, RoleSelection::New);
    }

    #[test]
    fn test_role_selection_parses_id() {
        let selection: RoleSelection = "role-003".parse().unwrap();
        assert_eq!(selection, RoleSelection::Existing("role-003".to_string()));
    }

    #[test]
    fn test_role_selection_rejects_empty() {
        assert!("".parse::<RoleSelection>().is_err());
        assert!("   ".parse::<RoleSelection>().is_err());
    }

    #[test]
    fn test_role_selection_serde_round_trip() {
        let json = serde_json::to_string(&RoleSelection::New).unwrap();
        assert_eq!(json, "\"new\"");
        let back: RoleSelection = serde_json::from_str("\"role-002\"").unwrap();
        assert_eq!(back, RoleSelection::Existing("role-002".to_string()));
    }

    #[test]
    fn test_new_user_has_timestamp_id() {
        let user = User::new(
            "John Doe".to_string(),
            "+1 (555) 123-4567".to_string(),
            "john.doe@example.com".to_string(),
            "club-001".to_string(),
            RoleSelection::Existing("role-003".to_string()),
        );
        assert!(user.id.starts_with("user-"));
        assert_eq!(user.created_at, user.updated_at);
    }
}
