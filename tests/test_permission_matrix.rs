use clubaccess::catalog::PermissionCatalog;
use clubaccess::models::{PermissionLevel, PermissionMatrix, Role};

#[test]
fn test_stored_matrix_reconciles_against_current_catalog() {
    let catalog = PermissionCatalog::builtin();

    // a matrix saved against an older catalog revision
    let json = r#"{
        "booking": { "Session": 2, "Retired function": 1 },
        "retired-module": { "Anything": 2 }
    }"#;
    let mut matrix: PermissionMatrix = serde_json::from_str(json).unwrap();

    matrix.normalize(&catalog);

    assert_eq!(matrix.len(), catalog.function_count());
    assert_eq!(matrix.get("booking", "Session"), PermissionLevel::FullAccess);
    assert_eq!(
        matrix.get("booking", "Retired function"),
        PermissionLevel::Forbidden
    );
    assert_eq!(matrix.selected_count(), 1);
}

#[test]
fn test_matrix_serializes_as_nested_numeric_map() {
    let catalog = PermissionCatalog::builtin();
    let mut matrix = PermissionMatrix::forbidden_for(&catalog);
    matrix
        .set(&catalog, "member", "Member", PermissionLevel::ReadOnly)
        .unwrap();

    let json = serde_json::to_value(&matrix).unwrap();
    assert_eq!(json["member"]["Member"], 1);
    assert_eq!(json["booking"]["Session"], 0);
}

#[test]
fn test_role_record_round_trips_through_json() {
    let catalog = PermissionCatalog::builtin();
    let mut matrix = PermissionMatrix::forbidden_for(&catalog);
    matrix
        .set_module(&catalog, "admin", PermissionLevel::FullAccess)
        .unwrap();
    let role = Role::new("Club Admin".to_string(), matrix);

    let json = serde_json::to_string(&role).unwrap();
    let decoded: Role = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, role);
    assert_eq!(decoded.permissions.selected_count(), 2);
}

#[test]
fn test_unknown_level_in_stored_data_is_rejected() {
    let json = r#"{ "booking": { "Session": 7 } }"#;
    assert!(serde_json::from_str::<PermissionMatrix>(json).is_err());
}
