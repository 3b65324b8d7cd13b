use std::sync::Arc;

use crate::catalog::PermissionCatalog;
use crate::errors::{DomainError, DomainResult};
use crate::fixtures;
use crate::models::{Club, Role, RoleDraft, RoleSelection, SubmissionSnapshot, User};
use crate::services::role_builder::RoleBuilder;
use crate::services::stores::{RoleStore, UserStore};
use crate::services::submission::submit_configuration;
use crate::services::user_builder::UserBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Roles,
    Users,
}

/// The dashboard either shows the management tabs or the read-only summary
/// of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Management,
    Summary(SubmissionSnapshot),
}

/// Container owning both stores, the club list, and the catalog. All
/// mutations of the stores go through the methods here; nothing else holds a
/// mutable handle.
pub struct Dashboard {
    catalog: Arc<PermissionCatalog>,
    clubs: Vec<Club>,
    known_emails: Vec<String>,
    roles: RoleStore,
    users: UserStore,
    tab: DashboardTab,
    view: DashboardView,
}

impl Dashboard {
    pub fn new(
        catalog: Arc<PermissionCatalog>,
        clubs: Vec<Club>,
        known_emails: Vec<String>,
        seed_roles: Vec<Role>,
        seed_users: Vec<User>,
    ) -> Self {
        Self {
            catalog,
            clubs,
            known_emails,
            roles: RoleStore::new(seed_roles),
            users: UserStore::new(seed_users),
            tab: DashboardTab::Roles,
            view: DashboardView::Management,
        }
    }

    /// A dashboard seeded with the standard fixtures.
    pub fn seeded(catalog: Arc<PermissionCatalog>) -> Self {
        let seed_roles = fixtures::seed_roles(&catalog);
        Self::new(
            catalog,
            fixtures::clubs(),
            fixtures::registered_emails(),
            seed_roles,
            fixtures::seed_users(),
        )
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn catalog(&self) -> &Arc<PermissionCatalog> {
        &self.catalog
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn roles(&self) -> &RoleStore {
        &self.roles
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    // ----- builders -----

    pub fn new_role_builder(&self) -> RoleBuilder {
        RoleBuilder::new_role(Arc::clone(&self.catalog))
    }

    pub fn edit_role_builder(&self, role_id: &str) -> DomainResult<RoleBuilder> {
        let role = self
            .roles
            .get(role_id)
            .ok_or_else(|| DomainError::NotFound(format!("Role not found: {}", role_id)))?;
        Ok(RoleBuilder::edit_role(Arc::clone(&self.catalog), role))
    }

    pub fn new_user_builder(&self) -> UserBuilder {
        UserBuilder::new(self.clubs.clone(), self.known_emails.clone())
    }

    pub fn edit_user_builder(&self, user_id: &str) -> DomainResult<UserBuilder> {
        let user = self
            .users
            .get(user_id)
            .ok_or_else(|| DomainError::NotFound(format!("User not found: {}", user_id)))?;
        Ok(UserBuilder::edit_user(
            self.clubs.clone(),
            self.known_emails.clone(),
            user,
        ))
    }

    // ----- role CRUD -----

    pub fn create_role(&mut self, draft: &RoleDraft) -> DomainResult<&Role> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Role name is required".to_string(),
            ));
        }
        let mut permissions = draft.permissions.clone();
        permissions.normalize(&self.catalog);
        Ok(self
            .roles
            .create(Role::new(draft.name.trim().to_string(), permissions)))
    }

    pub fn update_role(&mut self, role: Role) -> bool {
        self.roles.update(role)
    }

    pub fn delete_role(&mut self, role_id: &str) -> bool {
        self.roles.delete(role_id)
    }

    /// Role choices offered by the user builder: every stored role plus the
    /// "new" sentinel.
    pub fn role_options(&self) -> Vec<(String, String)> {
        let mut options: Vec<(String, String)> = self
            .roles
            .roles()
            .iter()
            .map(|r| (r.id.clone(), r.name.clone()))
            .collect();
        options.push((
            RoleSelection::NEW_SENTINEL.to_string(),
            "New Role...".to_string(),
        ));
        options
    }

    // ----- user CRUD -----

    pub fn create_user(&mut self, user: User) -> &User {
        self.users.create(user)
    }

    /// Create a role and a user referencing it in one explicit operation
    /// (the resolved form of the "new role" selection). The user's role is
    /// rewritten to the freshly created role's id.
    pub fn create_user_with_role(
        &mut self,
        mut user: User,
        role_draft: &RoleDraft,
    ) -> DomainResult<&User> {
        let role_id = self.create_role(role_draft)?.id.clone();
        user.role = RoleSelection::Existing(role_id);
        Ok(self.users.create(user))
    }

    pub fn update_user(&mut self, user: User) -> bool {
        self.users.update(user)
    }

    pub fn delete_user(&mut self, user_id: &str) -> bool {
        self.users.delete(user_id)
    }

    // ----- submission -----

    /// Snapshot both stores and switch to the summary view.
    pub fn submit(&mut self) -> &SubmissionSnapshot {
        let snapshot = submit_configuration(&self.users, &self.roles);
        self.view = DashboardView::Summary(snapshot);
        match &self.view {
            DashboardView::Summary(snapshot) => snapshot,
            DashboardView::Management => unreachable!(),
        }
    }

    /// Return to the management tabs, discarding any summary snapshot.
    pub fn back_to_management(&mut self) {
        self.view = DashboardView::Management;
    }
}
