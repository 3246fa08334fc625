//! The seam between list controllers and the remote API.

use desk_api::{ApiClient, ApiError};
use desk_core::drafts::{ContractDraft, MeetingDraft};
use desk_core::entities::{ContractRecord, MeetingRecord};
use desk_core::errors::ValidationError;
use desk_core::identity::Session;

use crate::error::MappingError;
use crate::format::Formatter;
use crate::mapper::{DisplayRecord, RecordKind, map_contract, map_meeting};

/// A raw record kind a list controller can hold.
pub trait ListRecord: Clone {
    /// Create/update payload.
    type Draft;

    const KIND: RecordKind;

    fn to_display(&self, fmt: &Formatter) -> Result<DisplayRecord, MappingError>;

    /// # Errors
    ///
    /// Returns [`ValidationError`] when the draft must not be sent.
    fn validate_draft(draft: &Self::Draft) -> Result<(), ValidationError>;
}

impl ListRecord for ContractRecord {
    type Draft = ContractDraft;

    const KIND: RecordKind = RecordKind::Contract;

    fn to_display(&self, fmt: &Formatter) -> Result<DisplayRecord, MappingError> {
        map_contract(self, fmt)
    }

    fn validate_draft(draft: &ContractDraft) -> Result<(), ValidationError> {
        draft.validate()
    }
}

impl ListRecord for MeetingRecord {
    type Draft = MeetingDraft;

    const KIND: RecordKind = RecordKind::Meeting;

    fn to_display(&self, fmt: &Formatter) -> Result<DisplayRecord, MappingError> {
        map_meeting(self, fmt)
    }

    fn validate_draft(draft: &MeetingDraft) -> Result<(), ValidationError> {
        draft.validate()
    }
}

/// Where a controller's records come from.
///
/// Implemented by [`ApiClient`] for both record kinds; tests use an
/// in-memory implementation.
#[allow(async_fn_in_trait)]
pub trait RecordSource<R: ListRecord> {
    async fn fetch_all(&self, session: &Session) -> Result<Vec<R>, ApiError>;

    /// `Ok(None)` means the server confirmed the write without echoing the record.
    async fn create(&self, session: &Session, draft: &R::Draft) -> Result<Option<R>, ApiError>;

    async fn update(
        &self,
        session: &Session,
        id: &str,
        draft: &R::Draft,
    ) -> Result<Option<R>, ApiError>;

    async fn remove(&self, session: &Session, id: &str) -> Result<(), ApiError>;
}

impl RecordSource<ContractRecord> for ApiClient {
    async fn fetch_all(&self, session: &Session) -> Result<Vec<ContractRecord>, ApiError> {
        self.list_contracts(session).await
    }

    async fn create(
        &self,
        session: &Session,
        draft: &ContractDraft,
    ) -> Result<Option<ContractRecord>, ApiError> {
        self.create_contract(session, draft).await
    }

    async fn update(
        &self,
        session: &Session,
        id: &str,
        draft: &ContractDraft,
    ) -> Result<Option<ContractRecord>, ApiError> {
        self.update_contract(session, id, draft).await
    }

    async fn remove(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        self.delete_contract(session, id).await
    }
}

impl RecordSource<MeetingRecord> for ApiClient {
    async fn fetch_all(&self, session: &Session) -> Result<Vec<MeetingRecord>, ApiError> {
        self.list_meetings(session).await
    }

    async fn create(
        &self,
        session: &Session,
        draft: &MeetingDraft,
    ) -> Result<Option<MeetingRecord>, ApiError> {
        self.create_meeting(session, draft).await
    }

    async fn update(
        &self,
        session: &Session,
        id: &str,
        draft: &MeetingDraft,
    ) -> Result<Option<MeetingRecord>, ApiError> {
        self.update_meeting(session, id, draft).await
    }

    async fn remove(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        self.delete_meeting(session, id).await
    }
}
