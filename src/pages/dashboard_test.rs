use super::*;

#[test]
fn greeting_uses_first_name() {
    assert_eq!(greeting("Hana Girma"), "Welcome back, Hana");
    assert_eq!(greeting("  "), "Welcome back");
}

#[test]
fn every_role_has_a_subtitle() {
    for role in Role::ALL {
        assert!(!dashboard_subtitle(role).is_empty(), "{role}");
    }
}
