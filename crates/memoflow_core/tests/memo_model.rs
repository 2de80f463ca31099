use memoflow_core::{Memo, MemoDraft, MemoValidationError};
use uuid::Uuid;

fn full_draft() -> MemoDraft {
    MemoDraft {
        subject: "Q1 Review".to_string(),
        received_date: "2024-01-10".to_string(),
        from: "Alice".to_string(),
        to: "Bob".to_string(),
        data_dispatcher: "Ops Desk".to_string(),
        content: "Quarterly numbers attached.".to_string(),
    }
}

#[test]
fn from_draft_assigns_identity_and_keeps_fields() {
    let memo = Memo::from_draft(&full_draft()).unwrap();

    assert!(!memo.id.is_nil());
    assert_eq!(memo.subject, "Q1 Review");
    assert_eq!(memo.from, "Alice");
    assert_eq!(memo.to, "Bob");
    assert_eq!(memo.received_date.as_deref(), Some("2024-01-10"));
    assert_eq!(memo.data_dispatcher.as_deref(), Some("Ops Desk"));
    assert_eq!(memo.content.as_deref(), Some("Quarterly numbers attached."));
}

#[test]
fn empty_optional_fields_become_none() {
    let draft = MemoDraft {
        subject: "Bare".to_string(),
        from: "A".to_string(),
        to: "B".to_string(),
        ..MemoDraft::default()
    };
    let memo = Memo::from_draft(&draft).unwrap();

    assert_eq!(memo.received_date, None);
    assert_eq!(memo.data_dispatcher, None);
    assert_eq!(memo.content, None);
    assert_eq!(memo.display_date(), None);
}

#[test]
fn each_missing_required_field_is_its_own_error() {
    let mut draft = full_draft();
    draft.subject = String::new();
    assert_eq!(
        draft.validate().unwrap_err(),
        MemoValidationError::MissingSubject
    );

    let mut draft = full_draft();
    draft.from = "   ".to_string();
    assert_eq!(
        draft.validate().unwrap_err(),
        MemoValidationError::MissingFrom
    );

    let mut draft = full_draft();
    draft.to = String::new();
    assert_eq!(draft.validate().unwrap_err(), MemoValidationError::MissingTo);
}

#[test]
fn malformed_received_date_is_rejected() {
    let mut draft = full_draft();
    draft.received_date = "10/01/2024".to_string();

    assert_eq!(
        draft.validate().unwrap_err(),
        MemoValidationError::InvalidReceivedDate("10/01/2024".to_string())
    );
}

#[test]
fn display_date_uses_locale_form() {
    let memo = Memo::from_draft(&full_draft()).unwrap();
    assert_eq!(memo.display_date().as_deref(), Some("1/10/2024"));
}

#[test]
fn serialization_uses_camel_case_wire_fields_and_empty_strings() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let draft = MemoDraft {
        subject: "Q1 Review".to_string(),
        from: "Alice".to_string(),
        to: "Bob".to_string(),
        ..MemoDraft::default()
    };
    let memo = Memo::from_draft_with_id(id, &draft).unwrap();

    let json = serde_json::to_value(&memo).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["subject"], "Q1 Review");
    assert_eq!(json["from"], "Alice");
    assert_eq!(json["to"], "Bob");
    // Absent optionals keep the original wire shape: empty strings.
    assert_eq!(json["receivedDate"], "");
    assert_eq!(json["dataDispatcher"], "");
    assert_eq!(json["content"], "");

    let decoded: Memo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, memo);
}

#[test]
fn deserialization_maps_empty_wire_strings_to_none() {
    let decoded: Memo = serde_json::from_value(serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "subject": "s",
        "from": "a",
        "to": "b",
        "receivedDate": "2024-03-05",
        "dataDispatcher": "",
        "content": "",
    }))
    .unwrap();

    assert_eq!(decoded.received_date.as_deref(), Some("2024-03-05"));
    assert_eq!(decoded.data_dispatcher, None);
    assert_eq!(decoded.content, None);
}
