use crate::models::{club_name, Club, Role, RoleSelection, SubmissionSnapshot};
use crate::services::stores::{RoleStore, UserStore};

/// Snapshot the current stores for the read-only summary screen.
pub fn submit_configuration(users: &UserStore, roles: &RoleStore) -> SubmissionSnapshot {
    let snapshot = SubmissionSnapshot::new(users.users().to_vec(), roles.roles().to_vec());
    tracing::info!(
        users = snapshot.user_count(),
        roles = snapshot.role_count(),
        "Configuration submitted"
    );
    snapshot
}

/// Display name for a user's role selection, resolved against the snapshot's
/// roles.
pub fn role_display_name(roles: &[Role], selection: &RoleSelection) -> String {
    match selection {
        RoleSelection::New => "New Role".to_string(),
        RoleSelection::Existing(id) => roles
            .iter()
            .find(|r| &r.id == id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| "Unknown Role".to_string()),
    }
}

/// Flattened, render-ready view of a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSummary {
    pub timestamp: String,
    pub user_count: usize,
    pub role_count: usize,
    pub user_lines: Vec<String>,
    pub role_lines: Vec<String>,
}

/// Build the per-record summary lines shown after submission.
pub fn summarize(snapshot: &SubmissionSnapshot, clubs: &[Club]) -> SubmissionSummary {
    let user_lines = snapshot
        .users
        .iter()
        .map(|user| {
            format!(
                "{} <{}> at {} as {}",
                user.full_name,
                user.email,
                club_name(clubs, &user.club),
                role_display_name(&snapshot.roles, &user.role)
            )
        })
        .collect();

    let role_lines = snapshot
        .roles
        .iter()
        .map(|role| {
            format!(
                "{} ({} functions selected)",
                role.name,
                role.permissions.selected_count()
            )
        })
        .collect();

    SubmissionSummary {
        timestamp: snapshot.timestamp.clone(),
        user_count: snapshot.user_count(),
        role_count: snapshot.role_count(),
        user_lines,
        role_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PermissionCatalog;
    use crate::fixtures;

    fn seeded_snapshot() -> SubmissionSnapshot {
        let roles = RoleStore::new(fixtures::seed_roles(&PermissionCatalog::builtin()));
        let users = UserStore::new(fixtures::seed_users());
        submit_configuration(&users, &roles)
    }

    #[test]
    fn test_snapshot_captures_seeded_counts() {
        let snapshot = seeded_snapshot();
        assert_eq!(snapshot.role_count(), 3);
        assert_eq!(snapshot.user_count(), 2);
        assert!(!snapshot.timestamp.is_empty());
    }

    #[test]
    fn test_snapshot_is_independent_of_later_store_edits() {
        let roles = RoleStore::new(fixtures::seed_roles(&PermissionCatalog::builtin()));
        let mut users = UserStore::new(fixtures::seed_users());
        let snapshot = submit_configuration(&users, &roles);

        users.delete("user-001");
        assert_eq!(snapshot.user_count(), 2);
    }

    #[test]
    fn test_role_display_name_resolution() {
        let snapshot = seeded_snapshot();
        assert_eq!(
            role_display_name(
                &snapshot.roles,
                &RoleSelection::Existing("role-003".to_string())
            ),
            "General Manager"
        );
        assert_eq!(
            role_display_name(
                &snapshot.roles,
                &RoleSelection::Existing("role-999".to_string())
            ),
            "Unknown Role"
        );
        assert_eq!(
            role_display_name(&snapshot.roles, &RoleSelection::New),
            "New Role"
        );
    }

    #[test]
    fn test_summary_lines_resolve_names() {
        let snapshot = seeded_snapshot();
        let summary = summarize(&snapshot, &fixtures::clubs());

        assert_eq!(summary.user_count, 2);
        assert_eq!(summary.role_count, 3);
        assert!(summary.user_lines[0].contains("John Doe"));
        assert!(summary.user_lines[0].contains("Downtown Fitness Center"));
        assert!(summary.user_lines[0].contains("General Manager"));
        assert!(summary.role_lines[0].contains("Senior Leadership"));
    }
}
