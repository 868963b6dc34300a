use super::*;

#[test]
fn untouched_filters_build_an_empty_query() {
    let query = build_query("", ANY, ANY, "", "date-desc");
    assert_eq!(query, DocumentQuery::default());
    assert_eq!(query.to_query_string(), "");
}

#[test]
fn filters_are_trimmed_and_parsed() {
    let query = build_query("  networks ", "thesis", "4", " 2022 ", "title-asc");
    assert_eq!(query.search, "networks");
    assert_eq!(query.document_type.as_deref(), Some("thesis"));
    assert_eq!(query.department_id, Some(4));
    assert_eq!(query.year.as_deref(), Some("2022"));
    assert_eq!(query.sort, DocumentSort::TitleAsc);
}

#[test]
fn unknown_sort_and_bad_department_fall_back() {
    let query = build_query("", ANY, "cs", "", "author-asc");
    assert_eq!(query.department_id, None);
    assert_eq!(query.sort, DocumentSort::Newest);
}
