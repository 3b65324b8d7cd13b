use crate::models::{Role, User};

/// Ordered collection of saved roles. Create appends, update replaces the
/// record with the matching id, delete filters it out; update and delete on
/// absent ids are no-ops.
#[derive(Debug, Clone, Default)]
pub struct RoleStore {
    roles: Vec<Role>,
}

impl RoleStore {
    pub fn new(seed: Vec<Role>) -> Self {
        Self { roles: seed }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    pub fn create(&mut self, role: Role) -> &Role {
        tracing::info!(role_id = %role.id, name = %role.name, "Role created");
        self.roles.push(role);
        self.roles.last().unwrap()
    }

    /// Replace the role with the matching id in place. Returns false when no
    /// such role exists.
    pub fn update(&mut self, role: Role) -> bool {
        match self.roles.iter_mut().find(|r| r.id == role.id) {
            Some(existing) => {
                tracing::info!(role_id = %role.id, "Role updated");
                *existing = role;
                true
            }
            None => false,
        }
    }

    /// Remove the role with the matching id. Returns false when no such role
    /// exists.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| r.id != id);
        let removed = self.roles.len() < before;
        if removed {
            tracing::info!(role_id = %id, "Role deleted");
        }
        removed
    }
}

/// Ordered collection of saved users; same lifecycle contract as the role
/// store.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new(seed: Vec<User>) -> Self {
        Self { users: seed }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn create(&mut self, user: User) -> &User {
        tracing::info!(user_id = %user.id, name = %user.full_name, "User created");
        self.users.push(user);
        self.users.last().unwrap()
    }

    pub fn update(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                tracing::info!(user_id = %user.id, "User updated");
                *existing = user;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        let removed = self.users.len() < before;
        if removed {
            tracing::info!(user_id = %id, "User deleted");
        }
        removed
    }
}
