//! Wire-tolerance tests: raw records decode from the shapes the backend
//! actually sends, and missing optional fields never fail a record.

use desk_core::entities::{ContractRecord, ContractRef, MeetingRecord, UserRef};
use desk_core::enums::{ContractStatus, MeetingStatus};
use pretty_assertions::assert_eq;

const CONTRACTS_FIXTURE: &str = r#"[
    {
        "_id": "65f1c0a2e4b0a1b2c3d4e5f6",
        "contract_name": "Software Development Agreement",
        "contract_type": "Service Contract",
        "client_name": "Tech Solutions Inc.",
        "amount": 150000,
        "start_date": "2025-01-15",
        "end_date": "2026-01-15",
        "status": "Expired",
        "description": "Custom software development for enterprise application",
        "assigned_user_email": "ops@techsolutions.example",
        "__v": 0
    },
    {
        "id": 2,
        "contract_name": "Cloud Infrastructure Contract",
        "amount": "$75,000",
        "status": null
    },
    {
        "contract_name": "No identifier at all"
    }
]"#;

#[test]
fn contracts_decode_from_mixed_shapes() {
    let records: Vec<ContractRecord> = serde_json::from_str(CONTRACTS_FIXTURE).unwrap();
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.identifier(), Some("65f1c0a2e4b0a1b2c3d4e5f6"));
    assert_eq!(first.amount, Some(150_000.0));
    assert_eq!(first.known_status(), Some(ContractStatus::Expired));
    assert_eq!(
        first.assigned_user_email.as_deref(),
        Some("ops@techsolutions.example")
    );

    let second = &records[1];
    assert_eq!(second.identifier(), Some("2"));
    assert_eq!(second.amount, Some(75_000.0));
    assert_eq!(second.status, None);
    assert_eq!(second.known_status(), None);
    assert_eq!(second.client_name, None);

    assert_eq!(records[2].identifier(), None);
}

#[test]
fn unknown_contract_status_is_kept_verbatim() {
    let record: ContractRecord =
        serde_json::from_str(r#"{"_id":"c9","status":"Terminated"}"#).unwrap();
    assert_eq!(record.status.as_deref(), Some("Terminated"));
    assert_eq!(record.known_status(), None);
}

#[test]
fn unparseable_amount_becomes_none() {
    let record: ContractRecord =
        serde_json::from_str(r#"{"_id":"c1","amount":"call us"}"#).unwrap();
    assert_eq!(record.amount, None);
}

#[test]
fn meeting_decodes_populated_references() {
    let record: MeetingRecord = serde_json::from_str(
        r#"{
            "_id": "m1",
            "title": "Product Strategy Meeting",
            "meeting_date": "2026-02-20T00:00:00.000Z",
            "meeting_time": "10:00",
            "duration": "60",
            "status": "scheduled",
            "contract_id": {"_id": "c1", "contract_name": "Consulting Services", "client_name": "Business Consultants Ltd"},
            "created_by": {"_id": "u1", "username": "sarah", "email": "sarah@example.com"}
        }"#,
    )
    .unwrap();

    assert_eq!(record.identifier(), Some("m1"));
    assert_eq!(record.duration, Some(60));
    assert_eq!(record.known_status(), Some(MeetingStatus::Scheduled));
    let contract = record.contract_id.as_ref().unwrap();
    assert_eq!(contract.id(), Some("c1"));
    assert_eq!(contract.contract_name(), Some("Consulting Services"));
    assert_eq!(
        record.created_by.as_ref().and_then(UserRef::display_name),
        Some("sarah")
    );
}

#[test]
fn meeting_decodes_bare_id_references() {
    let record: MeetingRecord = serde_json::from_str(
        r#"{"_id": "m2", "contract_id": "c7", "created_by": "u3", "duration": null}"#,
    )
    .unwrap();

    assert_eq!(record.contract_id, Some(ContractRef::Id("c7".into())));
    assert_eq!(record.created_by, Some(UserRef::Id("u3".into())));
    assert_eq!(record.duration, None);
    assert_eq!(
        record.created_by.as_ref().and_then(UserRef::display_name),
        None
    );
}

#[test]
fn host_falls_back_to_email_when_username_blank() {
    let user: UserRef =
        serde_json::from_str(r#"{"username": "  ", "email": "host@example.com"}"#).unwrap();
    assert_eq!(user.display_name(), Some("host@example.com"));
}
