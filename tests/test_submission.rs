mod helpers;

use clubaccess::models::{PermissionLevel, RoleSelection};
use clubaccess::services::submission::summarize;
use clubaccess::services::DashboardView;

use helpers::seeded_dashboard;

#[test]
fn test_seeded_submission_snapshot() {
    let mut dashboard = seeded_dashboard();
    let snapshot = dashboard.submit().clone();

    assert_eq!(snapshot.role_count(), 3);
    assert_eq!(snapshot.user_count(), 2);
    assert!(!snapshot.timestamp.is_empty());
    assert!(matches!(dashboard.view(), DashboardView::Summary(_)));
}

#[test]
fn test_snapshot_does_not_track_later_edits() {
    let mut dashboard = seeded_dashboard();
    let snapshot = dashboard.submit().clone();

    dashboard.back_to_management();
    dashboard.delete_user("user-001");
    dashboard.delete_role("role-002");

    assert_eq!(snapshot.user_count(), 2);
    assert_eq!(snapshot.role_count(), 3);
    assert_eq!(dashboard.users().len(), 1);
    assert_eq!(dashboard.roles().len(), 2);
}

#[test]
fn test_summary_lines_for_full_session() {
    let mut dashboard = seeded_dashboard();

    // build a new role and a user assigned to it in one step
    let mut role_builder = dashboard.new_role_builder();
    role_builder.set_name("Night Auditor");
    role_builder
        .bulk_set_module("booking", PermissionLevel::FullAccess)
        .unwrap();
    let role_draft = role_builder.draft().clone();

    let mut user_builder = dashboard.new_user_builder();
    user_builder.set_full_name("sam porter");
    user_builder.set_phone_number("+1 555 333 2222");
    user_builder.set_email("sam.porter@example.com");
    user_builder.set_club("club-004");
    user_builder.set_role(RoleSelection::New);
    let user = user_builder.build().unwrap();

    dashboard.create_user_with_role(user, &role_draft).unwrap();

    let snapshot = dashboard.submit().clone();
    let summary = summarize(&snapshot, dashboard.clubs());

    assert_eq!(summary.user_count, 3);
    assert_eq!(summary.role_count, 4);

    let sam_line = summary
        .user_lines
        .iter()
        .find(|line| line.contains("Sam Porter"))
        .unwrap();
    assert!(sam_line.contains("<sam.porter@example.com>"));
    assert!(sam_line.contains("Night Auditor"));

    // booking holds four functions
    assert!(summary
        .role_lines
        .iter()
        .any(|line| line == "Night Auditor (4 functions selected)"));
}

#[test]
fn test_back_to_management_keeps_stores_intact() {
    let mut dashboard = seeded_dashboard();
    dashboard.submit();
    dashboard.back_to_management();

    assert_eq!(dashboard.view(), &DashboardView::Management);
    assert_eq!(dashboard.roles().len(), 3);
    assert_eq!(dashboard.users().len(), 2);
}
