use super::*;

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_without_success_field_counts_as_success() {
    let envelope: ApiEnvelope<u32> = serde_json::from_str(r#"{"data": 3}"#).unwrap();
    assert_eq!(envelope.into_data(), Ok(3));
}

#[test]
fn envelope_failure_carries_message() {
    let envelope: ApiEnvelope<u32> =
        serde_json::from_str(r#"{"success": false, "message": "Invalid credentials"}"#).unwrap();
    assert_eq!(
        envelope.into_data(),
        Err(ApiError::Rejected("Invalid credentials".to_owned()))
    );
}

#[test]
fn envelope_structured_message_is_rendered_as_json() {
    let envelope: ApiEnvelope<u32> =
        serde_json::from_str(r#"{"success": false, "message": {"email": ["taken"]}}"#).unwrap();
    assert_eq!(envelope.message_text().as_deref(), Some(r#"{"email":["taken"]}"#));
}

#[test]
fn envelope_missing_data_is_decode_error() {
    let envelope: ApiEnvelope<u32> = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(matches!(envelope.into_data(), Err(ApiError::Decode(_))));
}

// =============================================================
// Users
// =============================================================

#[test]
fn decode_user_accepts_bare_and_wrapped_shapes() {
    let bare = serde_json::json!({"id": 1, "name": "A", "email": "a@x", "role": "teacher"});
    let wrapped = serde_json::json!({"success": true, "user": bare.clone()});
    let a = decode_user(bare).unwrap();
    let b = decode_user(wrapped).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.role_name(), Some("teacher"));
}

#[test]
fn decode_user_rejects_failed_envelope() {
    let body = serde_json::json!({"success": false, "message": "User not authenticated"});
    assert_eq!(
        decode_user(body),
        Err(ApiError::Rejected("User not authenticated".to_owned()))
    );
}

#[test]
fn user_record_converts_to_identity_with_department_object() {
    let record = decode_user(serde_json::json!({
        "id": 5,
        "name": "Hana",
        "email": "hana@aastu.edu.et",
        "role": "student",
        "student_id": "ETS1/14",
        "department_id": 2,
        "department": {"id": 2, "name": "Software Engineering"},
        "created_at": "2024-01-01"
    }))
    .unwrap();
    let identity = UserIdentity::try_from(record).unwrap();
    assert_eq!(identity.role, Role::Student);
    assert_eq!(identity.department.as_deref(), Some("Software Engineering"));
    assert_eq!(identity.student_id.as_deref(), Some("ETS1/14"));
}

#[test]
fn user_record_with_unknown_role_fails_conversion() {
    let record = decode_user(
        serde_json::json!({"id": 5, "name": "X", "email": "x@y", "role": "registrar"}),
    )
    .unwrap();
    assert_eq!(record.role_name(), Some("registrar"));
    assert!(matches!(UserIdentity::try_from(record), Err(ApiError::Decode(_))));
}

// =============================================================
// Lists
// =============================================================

#[test]
fn decode_list_accepts_bare_array() {
    let list: Vec<Department> =
        decode_list(serde_json::json!([{"id": 1, "name": "SE"}]), "departments").unwrap();
    assert_eq!(list, vec![Department { id: 1, name: "SE".to_owned() }]);
}

#[test]
fn decode_list_accepts_nested_key() {
    let body = serde_json::json!({"success": true, "data": {"departments": [{"id": 2, "name": "EE"}]}});
    let list: Vec<Department> = decode_list(body, "departments").unwrap();
    assert_eq!(list[0].name, "EE");
}

#[test]
fn decode_list_accepts_data_array() {
    let body = serde_json::json!({"success": true, "data": [{"id": 9, "title": "Thesis"}]});
    let list: Vec<DocumentSummary> = decode_list(body, "documents").unwrap();
    assert_eq!(list[0].id, 9);
    assert_eq!(list[0].title, "Thesis");
}

#[test]
fn decode_list_missing_key_is_decode_error() {
    let body = serde_json::json!({"data": {"other": []}});
    assert!(matches!(
        decode_list::<Department>(body, "departments"),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn document_summary_reads_backend_field_names() {
    let doc: DocumentSummary = serde_json::from_value(serde_json::json!({
        "id": 3,
        "title": "Compiler Notes",
        "type": "lecture",
        "fileSize": "1.2 MB",
        "keywords": ["parsing", "lexing"],
        "downloads": 10
    }))
    .unwrap();
    assert_eq!(doc.document_type.as_deref(), Some("lecture"));
    assert_eq!(doc.file_size.as_deref(), Some("1.2 MB"));
    assert_eq!(doc.keywords.len(), 2);
    assert_eq!(doc.views, 0);
}

#[test]
fn suggestion_flattens_document_fields() {
    let suggestion: Suggestion = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Database Design",
        "reason": "Trending in your field",
        "relevance": 95
    }))
    .unwrap();
    assert_eq!(suggestion.document.title, "Database Design");
    assert_eq!(suggestion.relevance, Some(95));
}

// =============================================================
// Query and stats
// =============================================================

#[test]
fn default_query_is_empty() {
    assert_eq!(DocumentQuery::default().to_query_string(), "");
}

#[test]
fn query_string_encodes_and_skips_empty_filters() {
    let query = DocumentQuery {
        search: "  data & ml ".to_owned(),
        document_type: Some(String::new()),
        department_id: Some(4),
        year: Some("2023".to_owned()),
        sort: DocumentSort::MostViewed,
    };
    assert_eq!(
        query.to_query_string(),
        "search_query=data%20%26%20ml&department=4&year=2023&sort_by=views-desc"
    );
}

#[test]
fn sort_from_unknown_param_is_newest() {
    assert_eq!(DocumentSort::from_param("title-asc"), DocumentSort::TitleAsc);
    assert_eq!(DocumentSort::from_param("bogus"), DocumentSort::Newest);
}

#[test]
fn role_stats_keeps_scalars_sorted_by_key() {
    let stats = RoleStats::from_value(&serde_json::json!({
        "total_documents": 12,
        "pendingReviews": "3",
        "breakdown": {"a": 1}
    }));
    assert_eq!(
        stats.items,
        vec![
            ("Pending reviews".to_owned(), "3".to_owned()),
            ("Total documents".to_owned(), "12".to_owned()),
        ]
    );
}

#[test]
fn role_stats_from_non_object_is_empty() {
    assert!(RoleStats::from_value(&serde_json::json!([1, 2])).items.is_empty());
}
