use super::*;
use crate::net::types::DocumentSummary;

fn suggestion(id: u64, reason: Option<&str>, relevance: Option<u32>) -> Suggestion {
    Suggestion {
        document: DocumentSummary {
            id,
            ..DocumentSummary::default()
        },
        reason: reason.map(str::to_owned),
        relevance,
    }
}

#[test]
fn note_combines_reason_and_relevance() {
    assert_eq!(
        suggestion_note(&suggestion(1, Some("Same department"), Some(87))).as_deref(),
        Some("Same department (87% match)")
    );
    assert_eq!(
        suggestion_note(&suggestion(1, Some(" "), Some(40))).as_deref(),
        Some("40% match")
    );
    assert_eq!(suggestion_note(&suggestion(1, None, None)), None);
}

#[test]
fn rank_orders_by_relevance_and_keeps_unscored_last() {
    let ranked = rank(vec![
        suggestion(1, None, None),
        suggestion(2, None, Some(10)),
        suggestion(3, None, Some(90)),
        suggestion(4, None, None),
    ]);
    let ids: Vec<u64> = ranked.iter().map(|s| s.document.id).collect();
    assert_eq!(ids, vec![3, 2, 1, 4]);
}
