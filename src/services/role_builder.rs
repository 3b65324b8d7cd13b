use std::sync::Arc;

use crate::catalog::{CatalogModule, PermissionCatalog};
use crate::errors::DomainResult;
use crate::models::{ModuleState, PermissionLevel, PermissionMatrix, Role, RoleDraft};

/// Predefined permission patterns usable to initialize a new role's matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTemplate {
    SrLeadership,
    GeneralManager,
    FrontDesk,
}

impl RoleTemplate {
    pub const ALL: [RoleTemplate; 3] = [
        RoleTemplate::SrLeadership,
        RoleTemplate::GeneralManager,
        RoleTemplate::FrontDesk,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "sr-leadership" => Some(RoleTemplate::SrLeadership),
            "general-manager" => Some(RoleTemplate::GeneralManager),
            "front-desk" => Some(RoleTemplate::FrontDesk),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            RoleTemplate::SrLeadership => "sr-leadership",
            RoleTemplate::GeneralManager => "general-manager",
            RoleTemplate::FrontDesk => "front-desk",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoleTemplate::SrLeadership => "Sr. Leadership",
            RoleTemplate::GeneralManager => "General Manager",
            RoleTemplate::FrontDesk => "Front Desk",
        }
    }

    /// The template's full matrix over the given catalog.
    pub fn matrix(&self, catalog: &PermissionCatalog) -> PermissionMatrix {
        match self {
            RoleTemplate::SrLeadership => {
                PermissionMatrix::from_module_levels(catalog, |_| PermissionLevel::FullAccess)
            }
            RoleTemplate::GeneralManager => {
                PermissionMatrix::from_module_levels(catalog, |module_id| {
                    if module_id == "admin" {
                        PermissionLevel::FullAccess
                    } else {
                        PermissionLevel::ReadOnly
                    }
                })
            }
            RoleTemplate::FrontDesk => PermissionMatrix::from_module_levels(catalog, |module_id| {
                if module_id == "booking" || module_id == "member" {
                    PermissionLevel::FullAccess
                } else {
                    PermissionLevel::Forbidden
                }
            }),
        }
    }
}

/// View-only filter over the catalog: free-text search plus a hide-empty
/// toggle. Never touches the matrix.
#[derive(Debug, Clone, Default)]
pub struct MatrixFilter {
    pub search: String,
    pub hide_empty: bool,
}

/// Edits a role draft (name + permission matrix) against a catalog.
///
/// Works for both new roles and existing ones; committing an existing role
/// replaces it in the store. Consumers read the current state back through
/// `draft()` and `is_valid()` after each operation.
pub struct RoleBuilder {
    catalog: Arc<PermissionCatalog>,
    draft: RoleDraft,
    is_new: bool,
    filter: MatrixFilter,
}

impl RoleBuilder {
    /// Start an empty draft for a new role. Every function starts Forbidden.
    pub fn new_role(catalog: Arc<PermissionCatalog>) -> Self {
        let draft = RoleDraft {
            name: String::new(),
            clone_from: String::new(),
            permissions: PermissionMatrix::forbidden_for(&catalog),
        };
        Self {
            catalog,
            draft,
            is_new: true,
            filter: MatrixFilter::default(),
        }
    }

    /// Start from an existing role. The matrix is normalized against the
    /// catalog in case the catalog changed since the role was saved.
    pub fn edit_role(catalog: Arc<PermissionCatalog>, role: &Role) -> Self {
        let mut draft = RoleDraft::from_role(role);
        draft.permissions.normalize(&catalog);
        Self {
            catalog,
            draft,
            is_new: false,
            filter: MatrixFilter::default(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn draft(&self) -> &RoleDraft {
        &self.draft
    }

    /// New roles need a non-empty trimmed name; existing roles are always
    /// valid.
    pub fn is_valid(&self) -> bool {
        !self.is_new || !self.draft.name.trim().is_empty()
    }

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    /// Overwrite the whole matrix from a template. Unknown or empty template
    /// ids are a no-op.
    pub fn clone_from_template(&mut self, template_id: &str) {
        let Some(template) = RoleTemplate::from_id(template_id) else {
            return;
        };
        self.draft.clone_from = template_id.to_string();
        self.draft.permissions = template.matrix(&self.catalog);
        tracing::debug!(template = template_id, "Cloned permissions from template");
    }

    pub fn set_permission(
        &mut self,
        module_id: &str,
        function_name: &str,
        level: PermissionLevel,
    ) -> DomainResult<()> {
        self.draft
            .permissions
            .set(&self.catalog, module_id, function_name, level)
    }

    pub fn bulk_set_all(&mut self, level: PermissionLevel) {
        self.draft.permissions.set_all(&self.catalog, level);
    }

    pub fn bulk_set_module(&mut self, module_id: &str, level: PermissionLevel) -> DomainResult<()> {
        self.draft
            .permissions
            .set_module(&self.catalog, module_id, level)
    }

    /// Clear the name and set every function back to Forbidden.
    pub fn reset(&mut self) {
        self.draft = RoleDraft {
            name: String::new(),
            clone_from: String::new(),
            permissions: PermissionMatrix::forbidden_for(&self.catalog),
        };
    }

    pub fn selected_count(&self) -> usize {
        self.draft.permissions.selected_count()
    }

    pub fn module_state(&self, module_id: &str) -> ModuleState {
        self.draft.permissions.module_state(module_id)
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.search = term.to_string();
    }

    pub fn set_hide_empty(&mut self, hide: bool) {
        self.filter.hide_empty = hide;
    }

    pub fn filter(&self) -> &MatrixFilter {
        &self.filter
    }

    /// Catalog modules visible under the current filter. The search term
    /// matches module names or function names case-insensitively; hide-empty
    /// suppresses modules whose state is `none`.
    pub fn filtered_modules(&self) -> Vec<&CatalogModule> {
        let term = self.filter.search.to_lowercase();
        self.catalog
            .modules()
            .iter()
            .filter(|module| {
                if self.filter.hide_empty && self.module_state(&module.id) == ModuleState::None {
                    return false;
                }
                if term.is_empty() {
                    return true;
                }
                module.name.to_lowercase().contains(&term)
                    || module
                        .functions
                        .iter()
                        .any(|f| f.name.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Turn the draft into a brand-new role record.
    pub fn build(&self) -> Role {
        Role::new(self.draft.name.trim().to_string(), self.draft.permissions.clone())
    }

    /// Apply the draft onto an existing role, keeping id and creation stamp.
    pub fn apply_to(&self, role: &mut Role) {
        role.name = self.draft.name.trim().to_string();
        role.permissions = self.draft.permissions.clone();
        role.touch();
    }
}
