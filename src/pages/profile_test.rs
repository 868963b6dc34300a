use super::*;
use crate::state::role::Role;

#[test]
fn profile_rows_include_present_optional_fields() {
    let mut identity = UserIdentity::new(3, "Hana Girma", "hana@aastu.edu.et", Role::Student);
    identity.department = Some("Software Engineering".to_owned());
    identity.student_id = Some(" ".to_owned());

    let labels: Vec<&str> = profile_rows(&identity).into_iter().map(|(l, _)| l).collect();
    assert_eq!(labels, vec!["Name", "Email", "Role", "Department"]);
}

#[test]
fn role_row_uses_display_label() {
    let identity = UserIdentity::new(1, "Dr. Alemu", "alemu@aastu.edu.et", Role::DepartmentHead);
    let rows = profile_rows(&identity);
    assert_eq!(rows[2], ("Role", Role::DepartmentHead.label().to_owned()));
}

#[test]
fn display_name_collapses_whitespace() {
    assert_eq!(validate_display_name("  Hana   Girma "), Ok("Hana Girma".to_owned()));
    assert_eq!(validate_display_name("   "), Err("Name cannot be empty."));
}

#[test]
fn access_list_follows_role_permissions() {
    assert_eq!(access_list(Role::Student), vec!["document:view", "analytics:view"]);
    assert!(access_list(Role::Dean).contains(&"document:approve"));
    assert!(!access_list(Role::Teacher).contains(&"document:approve"));
    assert_eq!(access_list(Role::Admin).len(), 21);
}
