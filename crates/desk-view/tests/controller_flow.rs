//! List controller driven against an in-memory record source.

use std::cell::{Cell, RefCell};

use desk_api::ApiError;
use desk_core::drafts::{ContractDraft, MeetingDraft};
use desk_core::entities::{ContractRecord, MeetingRecord};
use desk_core::enums::ContractStatus;
use desk_core::identity::Session;
use desk_view::filter::{AttendeeCategory, ContractCategory};
use desk_view::{Effect, Formatter, ListController, ListState, RecordSource, Route};
use pretty_assertions::assert_eq;

// exp = 2001-09-09
const EXPIRED_JWT: &str = "eyJhbGciOiJIUzI1NiJ9.eyJpZCI6InUtMSIsImV4cCI6MTAwMDAwMDAwMH0.sig";
// exp = 2100-01-01, role admin
const LIVE_ADMIN_JWT: &str =
    "eyJhbGciOiJIUzI1NiJ9.eyJpZCI6InUtMSIsInJvbGUiOiJhZG1pbiIsImV4cCI6NDEwMjQ0NDgwMH0.sig";

fn admin() -> Session {
    Session::new(LIVE_ADMIN_JWT, Some("admin".into()), Some("u-1".into()))
}

fn member() -> Session {
    Session::new("opaque-member-token", Some("user".into()), Some("u-2".into()))
}

#[derive(Default)]
struct MemorySource {
    contracts: RefCell<Vec<ContractRecord>>,
    meetings: RefCell<Vec<MeetingRecord>>,
    calls: Cell<usize>,
    unauthorized: Cell<bool>,
    failing: Cell<bool>,
    // confirm writes without echoing the saved record
    silent: Cell<bool>,
}

impl MemorySource {
    fn with_contracts(statuses: &[&str]) -> Self {
        let source = Self::default();
        *source.contracts.borrow_mut() = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| ContractRecord {
                object_id: Some(format!("c{}", i + 1)),
                contract_name: Some(format!("Contract {}", i + 1)),
                status: Some((*status).to_string()),
                ..ContractRecord::default()
            })
            .collect();
        source
    }

    fn check(&self) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.unauthorized.get() {
            return Err(ApiError::Unauthorized);
        }
        if self.failing.get() {
            return Err(ApiError::Api {
                status: 500,
                message: "Server error".into(),
            });
        }
        Ok(())
    }
}

fn contract_from(id: String, draft: &ContractDraft) -> ContractRecord {
    ContractRecord {
        object_id: Some(id),
        contract_name: Some(draft.name.clone()),
        contract_type: Some(draft.contract_type.clone()),
        client_name: Some(draft.client.clone()),
        amount: draft.amount.parse().ok(),
        start_date: Some(draft.start_date.clone()),
        end_date: Some(draft.end_date.clone()),
        status: Some(draft.status.as_str().into()),
        description: Some(draft.description.clone()),
        ..ContractRecord::default()
    }
}

impl RecordSource<ContractRecord> for MemorySource {
    async fn fetch_all(&self, _session: &Session) -> Result<Vec<ContractRecord>, ApiError> {
        self.check()?;
        Ok(self.contracts.borrow().clone())
    }

    async fn create(
        &self,
        _session: &Session,
        draft: &ContractDraft,
    ) -> Result<Option<ContractRecord>, ApiError> {
        self.check()?;
        let id = format!("new-{}", self.contracts.borrow().len() + 1);
        let record = contract_from(id, draft);
        self.contracts.borrow_mut().push(record.clone());
        Ok((!self.silent.get()).then_some(record))
    }

    async fn update(
        &self,
        _session: &Session,
        id: &str,
        draft: &ContractDraft,
    ) -> Result<Option<ContractRecord>, ApiError> {
        self.check()?;
        let record = contract_from(id.to_string(), draft);
        if let Some(slot) = self
            .contracts
            .borrow_mut()
            .iter_mut()
            .find(|c| c.identifier() == Some(id))
        {
            *slot = record.clone();
        }
        Ok((!self.silent.get()).then_some(record))
    }

    async fn remove(&self, _session: &Session, id: &str) -> Result<(), ApiError> {
        self.check()?;
        self.contracts
            .borrow_mut()
            .retain(|c| c.identifier() != Some(id));
        Ok(())
    }
}

impl RecordSource<MeetingRecord> for MemorySource {
    async fn fetch_all(&self, _session: &Session) -> Result<Vec<MeetingRecord>, ApiError> {
        self.check()?;
        Ok(self.meetings.borrow().clone())
    }

    async fn create(
        &self,
        _session: &Session,
        _draft: &MeetingDraft,
    ) -> Result<Option<MeetingRecord>, ApiError> {
        self.check()?;
        Err(ApiError::Rejected {
            message: "not supported here".into(),
        })
    }

    async fn update(
        &self,
        _session: &Session,
        _id: &str,
        _draft: &MeetingDraft,
    ) -> Result<Option<MeetingRecord>, ApiError> {
        self.check()?;
        Err(ApiError::Rejected {
            message: "not supported here".into(),
        })
    }

    async fn remove(&self, _session: &Session, _id: &str) -> Result<(), ApiError> {
        self.check()
    }
}

fn draft() -> ContractDraft {
    ContractDraft {
        name: "Widget Supply".into(),
        contract_type: "Vendor Contract".into(),
        client: "Initech".into(),
        start_date: "2025-01-01".into(),
        end_date: "2025-12-31".into(),
        amount: "12000".into(),
        description: "Widgets, monthly".into(),
        status: ContractStatus::Pending,
    }
}

type Contracts = ListController<ContractRecord, ContractCategory>;

fn visible_ids(controller: &Contracts) -> Vec<String> {
    controller.visible().iter().map(|r| r.id.clone()).collect()
}

async fn loaded(source: &MemorySource, session: &Session) -> Contracts {
    let mut controller = Contracts::new(Formatter::default());
    assert_eq!(controller.load(source, session).await, None);
    assert_eq!(controller.state(), &ListState::Ready);
    controller
}

const SIX: [&str; 6] = ["Expired", "Active", "Expired", "Expired", "Pending", "Active"];

#[tokio::test]
async fn load_and_filter_the_sample() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;

    controller.set_category(ContractCategory::Status(ContractStatus::Expired));
    assert_eq!(visible_ids(&controller), vec!["c1", "c3", "c4"]);

    let counts: Vec<_> = controller.counts().into_iter().map(|(_, n)| n).collect();
    assert_eq!(counts, vec![6, 2, 3, 1]);
}

#[tokio::test]
async fn missing_token_redirects_before_any_call() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = Contracts::new(Formatter::default());

    let effect = controller.load(&source, &Session::anonymous()).await;
    assert_eq!(effect, Some(Effect::Redirect(Route::Login)));
    assert_eq!(source.calls.get(), 0);
    assert_eq!(controller.state(), &ListState::Idle);
}

#[tokio::test]
async fn expired_token_redirects_before_any_call() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = Contracts::new(Formatter::default());
    let session = Session::new(EXPIRED_JWT, Some("admin".into()), None);

    let effect = controller.load(&source, &session).await;
    assert_eq!(effect, Some(Effect::Redirect(Route::Login)));
    assert_eq!(source.calls.get(), 0);
}

#[tokio::test]
async fn server_401_redirects_and_idles() {
    let source = MemorySource::with_contracts(&SIX);
    source.unauthorized.set(true);
    let mut controller = Contracts::new(Formatter::default());

    let effect = controller.load(&source, &admin()).await;
    assert_eq!(effect, Some(Effect::Redirect(Route::Login)));
    assert_eq!(controller.state(), &ListState::Idle);
    assert!(controller.notice().is_none());
}

#[tokio::test]
async fn admin_create_appends_after_confirmation() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;

    let effect = controller.create(&source, &admin(), &draft()).await;
    assert_eq!(effect, None);
    assert_eq!(controller.rows().len(), 7);
    let last = controller.rows().last().unwrap();
    assert_eq!(last.id, "new-7");
    assert_eq!(last.status, "Pending");
    assert_eq!(last.figure, "$12,000");
    assert_eq!(controller.saved().map(|r| r.id.as_str()), Some("new-7"));
    let notice = controller.notice().unwrap();
    assert!(!notice.is_error());
    assert_eq!(notice.message(), "contract created");
}

#[tokio::test]
async fn member_cannot_mutate_and_no_call_is_made() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &member()).await;
    let calls_after_load = source.calls.get();
    let before = controller.rows().to_vec();

    assert!(!controller.capabilities().can_create);
    assert_eq!(controller.create(&source, &member(), &draft()).await, None);
    assert_eq!(controller.remove(&source, &member(), "c1").await, None);

    assert_eq!(source.calls.get(), calls_after_load);
    assert_eq!(controller.rows(), before.as_slice());
    let notice = controller.notice().unwrap();
    assert!(notice.is_error());
    assert!(notice.message().contains("not permitted"), "{}", notice.message());
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_source() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;
    let calls_after_load = source.calls.get();

    let mut bad = draft();
    bad.name = "  ".into();
    bad.amount = "lots".into();
    controller.create(&source, &admin(), &bad).await;

    assert_eq!(source.calls.get(), calls_after_load);
    assert_eq!(controller.rows().len(), 6);
    let message = controller.notice().unwrap().message().to_string();
    assert!(message.contains("name"), "{message}");
    assert!(message.contains("amount"), "{message}");
}

#[tokio::test]
async fn failed_delete_leaves_the_list_untouched() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;
    let before = visible_ids(&controller);

    source.failing.set(true);
    assert_eq!(controller.remove(&source, &admin(), "c2").await, None);

    assert_eq!(visible_ids(&controller), before);
    let notice = controller.notice().unwrap();
    assert!(notice.is_error());
    assert_eq!(
        notice.message(),
        "could not delete contract: API error (500): Server error"
    );
}

#[tokio::test]
async fn failed_create_leaves_the_list_untouched() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;
    let before = controller.rows().to_vec();

    source.failing.set(true);
    assert_eq!(controller.create(&source, &admin(), &draft()).await, None);

    assert_eq!(controller.rows(), before.as_slice());
    assert!(controller.saved().is_none());
    let notice = controller.notice().unwrap();
    assert!(notice.is_error());
    assert_eq!(
        notice.message(),
        "could not create contract: API error (500): Server error"
    );
}

#[tokio::test]
async fn failed_update_leaves_the_list_untouched() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;
    let before = controller.rows().to_vec();

    source.failing.set(true);
    let mut edit = draft();
    edit.status = ContractStatus::Active;
    assert_eq!(controller.update(&source, &admin(), "c3", &edit).await, None);

    assert_eq!(controller.rows(), before.as_slice());
    assert_eq!(controller.rows()[2].title, "Contract 3");
    let notice = controller.notice().unwrap();
    assert!(notice.is_error());
    assert_eq!(
        notice.message(),
        "could not update contract: API error (500): Server error"
    );
}

#[tokio::test]
async fn create_confirmed_without_record_reloads_the_list() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;
    let calls_after_load = source.calls.get();

    source.silent.set(true);
    assert_eq!(controller.create(&source, &admin(), &draft()).await, None);

    // the write plus one reload
    assert_eq!(source.calls.get(), calls_after_load + 2);
    assert_eq!(controller.state(), &ListState::Ready);
    assert_eq!(controller.rows().len(), 7);
    assert!(controller.rows().iter().any(|r| r.id == "new-7"));
    assert!(controller.saved().is_none());
    let notice = controller.notice().unwrap();
    assert!(!notice.is_error());
    assert_eq!(notice.message(), "contract created");
}

#[tokio::test]
async fn update_confirmed_without_record_reloads_the_list() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;

    source.silent.set(true);
    let mut edit = draft();
    edit.status = ContractStatus::Active;
    assert_eq!(controller.update(&source, &admin(), "c3", &edit).await, None);

    assert_eq!(controller.rows().len(), 6);
    assert_eq!(controller.rows()[2].title, "Widget Supply");
    assert_eq!(controller.rows()[2].status, "Active");
    assert_eq!(controller.notice().unwrap().message(), "contract updated");
}

#[tokio::test]
async fn confirmed_delete_removes_row_and_selection() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;
    assert!(controller.select("c2"));

    controller.remove(&source, &admin(), "c2").await;
    assert_eq!(controller.rows().len(), 5);
    assert!(controller.rows().iter().all(|r| r.id != "c2"));
    assert!(controller.selected().is_none());
}

#[tokio::test]
async fn update_replaces_in_place() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;

    let mut edit = draft();
    edit.status = ContractStatus::Active;
    controller.update(&source, &admin(), "c3", &edit).await;

    let ids: Vec<_> = controller.rows().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3", "c4", "c5", "c6"]);
    assert_eq!(controller.rows()[2].title, "Widget Supply");
    assert_eq!(controller.rows()[2].status, "Active");
    assert_eq!(controller.notice().unwrap().message(), "contract updated");
}

#[tokio::test]
async fn update_of_unknown_id_makes_no_call() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;
    let calls_after_load = source.calls.get();

    controller.update(&source, &admin(), "missing", &draft()).await;
    assert_eq!(source.calls.get(), calls_after_load);
    assert!(controller.notice().unwrap().is_error());
}

#[tokio::test]
async fn unauthorized_mutation_redirects() {
    let source = MemorySource::with_contracts(&SIX);
    let mut controller = loaded(&source, &admin()).await;

    source.unauthorized.set(true);
    let effect = controller.remove(&source, &admin(), "c1").await;
    assert_eq!(effect, Some(Effect::Redirect(Route::Login)));
    assert_eq!(controller.state(), &ListState::Idle);
    assert!(controller.notice().is_none());
}

#[tokio::test]
async fn attendee_meetings_tabs() {
    let source = MemorySource::default();
    *source.meetings.borrow_mut() = ["scheduled", "ongoing", "completed", "scheduled"]
        .iter()
        .enumerate()
        .map(|(i, status)| MeetingRecord {
            object_id: Some(format!("m{i}")),
            title: Some(format!("Meeting {i}")),
            status: Some((*status).to_string()),
            ..MeetingRecord::default()
        })
        .collect();

    let mut controller = ListController::<MeetingRecord, AttendeeCategory>::new(Formatter::default());
    controller.load(&source, &member()).await;
    assert_eq!(controller.state(), &ListState::Ready);

    controller.set_category(AttendeeCategory::Upcoming);
    let ids: Vec<_> = controller.visible().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec!["m0", "m3"]);
    assert_eq!(
        controller.counts(),
        vec![
            (AttendeeCategory::All, 4),
            (AttendeeCategory::Upcoming, 2),
            (AttendeeCategory::Live, 1),
        ]
    );
}
