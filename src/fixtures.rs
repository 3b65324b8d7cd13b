//! Seed data supplied to the dashboard at construction time. Kept out of the
//! stores themselves so tests can swap in isolated fixtures.

use crate::catalog::PermissionCatalog;
use crate::models::{Club, PermissionLevel, PermissionMatrix, Role, RoleSelection, User};

/// The five static club locations.
pub fn clubs() -> Vec<Club> {
    vec![
        Club::new("club-001", "Downtown Fitness Center"),
        Club::new("club-002", "Westside Athletic Club"),
        Club::new("club-003", "Elite Sports Complex"),
        Club::new("club-004", "Suburban Recreation Center"),
        Club::new("club-005", "Metro Health & Wellness"),
    ]
}

/// Emails the duplicate-email advisory warning checks against.
pub fn registered_emails() -> Vec<String> {
    vec![
        "john.doe@example.com".to_string(),
        "admin@club.com".to_string(),
    ]
}

/// The three pre-seeded roles.
pub fn seed_roles(catalog: &PermissionCatalog) -> Vec<Role> {
    vec![
        Role {
            id: "role-002".to_string(),
            name: "Senior Leadership".to_string(),
            permissions: PermissionMatrix::from_module_levels(catalog, |_| {
                PermissionLevel::FullAccess
            }),
            created_at: "2024-01-20T14:30:00Z".to_string(),
            updated_at: "2024-01-20T14:30:00Z".to_string(),
        },
        Role {
            id: "role-003".to_string(),
            name: "General Manager".to_string(),
            permissions: PermissionMatrix::from_module_levels(catalog, |module_id| {
                if module_id == "admin" {
                    PermissionLevel::FullAccess
                } else {
                    PermissionLevel::ReadOnly
                }
            }),
            created_at: "2024-02-01T09:15:00Z".to_string(),
            updated_at: "2024-02-01T09:15:00Z".to_string(),
        },
        Role {
            id: "role-004".to_string(),
            name: "Front Desk".to_string(),
            permissions: PermissionMatrix::from_module_levels(catalog, |module_id| {
                if module_id == "booking" || module_id == "member" {
                    PermissionLevel::FullAccess
                } else {
                    PermissionLevel::Forbidden
                }
            }),
            created_at: "2024-02-10T16:45:00Z".to_string(),
            updated_at: "2024-02-10T16:45:00Z".to_string(),
        },
    ]
}

/// The two pre-seeded users.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "user-001".to_string(),
            full_name: "John Doe".to_string(),
            phone_number: "+1 (555) 123-4567".to_string(),
            email: "john.doe@example.com".to_string(),
            club: "club-001".to_string(),
            role: RoleSelection::Existing("role-003".to_string()),
            created_at: "2024-01-25T10:00:00Z".to_string(),
            updated_at: "2024-01-25T10:00:00Z".to_string(),
        },
        User {
            id: "user-002".to_string(),
            full_name: "Jane Smith".to_string(),
            phone_number: "+1 (555) 987-6543".to_string(),
            email: "jane.smith@example.com".to_string(),
            club: "club-002".to_string(),
            role: RoleSelection::Existing("role-004".to_string()),
            created_at: "2024-02-05T14:30:00Z".to_string(),
            updated_at: "2024-02-05T14:30:00Z".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModuleState;

    #[test]
    fn test_seed_roles_cover_full_catalog() {
        let catalog = PermissionCatalog::builtin();
        for role in seed_roles(&catalog) {
            assert_eq!(role.permissions.len(), catalog.function_count());
        }
    }

    #[test]
    fn test_seed_role_shapes() {
        let catalog = PermissionCatalog::builtin();
        let roles = seed_roles(&catalog);

        // Senior Leadership: everything full
        assert_eq!(
            roles[0].permissions.selected_count(),
            catalog.function_count()
        );
        assert_eq!(roles[0].permissions.module_state("booking"), ModuleState::Full);

        // General Manager: full admin, read-only elsewhere
        assert_eq!(roles[1].permissions.module_state("admin"), ModuleState::Full);
        assert_eq!(
            roles[1].permissions.module_state("booking"),
            ModuleState::ReadOnly
        );

        // Front Desk: booking and member only
        assert_eq!(roles[2].permissions.module_state("booking"), ModuleState::Full);
        assert_eq!(roles[2].permissions.module_state("admin"), ModuleState::None);
    }

    #[test]
    fn test_seed_users_reference_seed_data() {
        let users = seed_users();
        let club_ids: Vec<String> = clubs().into_iter().map(|c| c.id).collect();
        assert_eq!(users.len(), 2);
        for user in users {
            assert!(club_ids.contains(&user.club));
        }
    }
}
