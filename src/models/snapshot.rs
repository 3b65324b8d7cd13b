use serde::{Deserialize, Serialize};

use crate::models::role::Role;
use crate::models::user::User;
use crate::models::now_rfc3339;

/// An immutable snapshot of both stores, taken once per submission action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSnapshot {
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub timestamp: String,
}

impl SubmissionSnapshot {
    pub fn new(users: Vec<User>, roles: Vec<Role>) -> Self {
        Self {
            users,
            roles,
            timestamp: now_rfc3339(),
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}
