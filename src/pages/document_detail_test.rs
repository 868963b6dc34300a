use super::*;
use crate::net::types::DocumentSummary;
use crate::state::session::UserIdentity;

fn viewer(role: Role) -> Session {
    Session::resolved(Some(UserIdentity::new(1, "Viewer", "v@aastu.edu.et", role)))
}

#[test]
fn document_ids_must_be_positive_integers() {
    assert_eq!(parse_document_id("42"), Some(42));
    assert_eq!(parse_document_id(" 7 "), Some(7));
    assert_eq!(parse_document_id("0"), None);
    assert_eq!(parse_document_id("-3"), None);
    assert_eq!(parse_document_id("abc"), None);
}

#[test]
fn detail_rows_skip_blank_fields() {
    let detail = DocumentDetail {
        summary: DocumentSummary {
            author: Some("Hana Girma".to_owned()),
            department: Some("  ".to_owned()),
            year: Some(serde_json::json!(2023)),
            file_size: Some("2048".to_owned()),
            date: Some("2023-06-01".to_owned()),
            ..DocumentSummary::default()
        },
        approval_status: Some("approved".to_owned()),
        ..DocumentDetail::default()
    };
    assert_eq!(
        detail_rows(&detail, &viewer(Role::DepartmentHead)),
        vec![
            ("Author", "Hana Girma".to_owned()),
            ("Year", "2023".to_owned()),
            ("Size", "2.0 KB".to_owned()),
            ("Uploaded", "2023-06-01".to_owned()),
            ("Status", "approved".to_owned()),
        ]
    );
}

#[test]
fn approval_status_hidden_from_roles_that_cannot_approve() {
    let detail = DocumentDetail {
        approval_status: Some("pending".to_owned()),
        ..DocumentDetail::default()
    };
    for role in [Role::Student, Role::Teacher] {
        assert!(detail_rows(&detail, &viewer(role)).is_empty(), "{role:?}");
    }
    for role in [Role::DepartmentHead, Role::Dean, Role::Admin] {
        assert_eq!(
            detail_rows(&detail, &viewer(role)),
            vec![("Status", "pending".to_owned())],
            "{role:?}"
        );
    }
}
