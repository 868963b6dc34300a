use super::*;

#[test]
fn logout_replaces_history_entry_with_login() {
    let (path, options) = after_logout();
    assert_eq!(path, "/login");
    assert!(options.replace);
}
