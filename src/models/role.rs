use serde::{Deserialize, Serialize};

use crate::models::permission::PermissionMatrix;
use crate::models::{generate_id, now_rfc3339};

/// A saved role: a named permission set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub permissions: PermissionMatrix,
    pub created_at: String,
    pub updated_at: String,
}

/// An in-progress, unsaved role edit prior to commit into the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleDraft {
    pub name: String,
    /// Template id the matrix was last cloned from, empty when none.
    pub clone_from: String,
    pub permissions: PermissionMatrix,
}

impl Role {
    pub fn new(name: String, permissions: PermissionMatrix) -> Self {
        let now = now_rfc3339();
        Self {
            id: generate_id("role"),
            name,
            permissions,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Stamp the record as modified now.
    pub fn touch(&mut self) {
        self.updated_at = now_rfc3339();
    }
}

impl RoleDraft {
    pub fn from_role(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            clone_from: String::new(),
            permissions: role.permissions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_role_has_timestamp_id_and_equal_stamps() {
        let role = Role::new("Trainer".to_string(), PermissionMatrix::default());
        assert!(role.id.starts_with("role-"));
        assert_eq!(role.created_at, role.updated_at);
    }

    #[test]
    fn test_draft_from_role_drops_clone_marker() {
        let role = Role::new("Trainer".to_string(), PermissionMatrix::default());
        let draft = RoleDraft::from_role(&role);
        assert_eq!(draft.name, "Trainer");
        assert!(draft.clone_from.is_empty());
        assert_eq!(draft.permissions, role.permissions);
    }
}
