//! List Controller: fetch lifecycle, filters, selection and confirmed
//! mutations for one list page.
//!
//! ```text
//! Idle ──fetch──▶ Loading ──ok──▶ Ready ◀─┐ filter changes
//!   ▲                │                └───┘
//!   │                └──err──▶ Error ──retry──▶ Loading
//!   └── leave_page / 401 (with a redirect to the login view)
//! ```
//!
//! The controller is owned by a single task. Each fetch carries a
//! [`FetchTicket`] stamped with a generation number; a result is applied only
//! if its ticket is still the one in flight, so superseded fetches and
//! fetches that finish after `leave_page` are dropped.

use chrono::Utc;
use desk_api::ApiError;
use desk_auth::check_credential;
use desk_core::identity::Session;

use crate::error::ViewError;
use crate::filter::{Category, FilterState, apply_filter, category_counts};
use crate::format::Formatter;
use crate::mapper::DisplayRecord;
use crate::role::{Action, Capabilities};
use crate::route::Route;
use crate::source::{ListRecord, RecordSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Idle,
    Loading,
    Ready,
    /// Fetch failed; holds the page-level message. Retry with `refresh`.
    Error(String),
}

/// Handle for one fetch. Only the most recently issued ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Work the caller must perform after a controller call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the list and hand the result to [`ListController::complete_fetch`].
    Fetch(FetchTicket),
    /// Navigate away; used for the login redirect on auth failure.
    Redirect(Route),
}

/// User-visible message left by the last mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Info(message) | Self::Error(message) => message,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

pub struct ListController<R: ListRecord, C: Category> {
    formatter: Formatter,
    capabilities: Capabilities,
    state: ListState,
    // `records[i]` is the source of `rows[i]`
    records: Vec<R>,
    rows: Vec<DisplayRecord>,
    filter: FilterState<C>,
    selected: Option<String>,
    notice: Option<Notice>,
    // row produced by the last confirmed create/update, when the server echoed it
    saved: Option<String>,
    generation: u64,
    in_flight: Option<u64>,
    dropped: usize,
}

impl<R: ListRecord, C: Category> ListController<R, C> {
    #[must_use]
    pub fn new(formatter: Formatter) -> Self {
        Self {
            formatter,
            capabilities: Capabilities::VIEW_ONLY,
            state: ListState::Idle,
            records: Vec::new(),
            rows: Vec::new(),
            filter: FilterState::default(),
            selected: None,
            notice: None,
            saved: None,
            generation: 0,
            in_flight: None,
            dropped: 0,
        }
    }

    // --- lifecycle ---

    /// Navigate onto the page: discard anything held and start a fresh fetch.
    pub fn enter_page(&mut self, session: &Session) -> Effect {
        self.leave_page();
        self.refresh(session)
    }

    /// Start a fetch, superseding any fetch in flight.
    ///
    /// Without a usable credential no fetch is issued and the page redirects
    /// to the login view instead.
    pub fn refresh(&mut self, session: &Session) -> Effect {
        if let Err(error) = check_credential(session, Utc::now()) {
            tracing::debug!(%error, kind = %R::KIND, "no usable credential; redirecting");
            self.reset();
            return Effect::Redirect(Route::Login);
        }
        self.capabilities = Capabilities::for_session(session);
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.state = ListState::Loading;
        self.notice = None;
        Effect::Fetch(FetchTicket {
            generation: self.generation,
        })
    }

    /// Apply a fetch result if `ticket` is still current.
    ///
    /// A 401 clears the page and returns a login redirect; it never becomes
    /// an in-page error.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<R>, ApiError>,
    ) -> Option<Effect> {
        if self.in_flight != Some(ticket.generation) {
            tracing::debug!(
                generation = ticket.generation,
                kind = %R::KIND,
                "discarding stale fetch result"
            );
            return None;
        }
        self.in_flight = None;

        match result {
            Ok(records) => {
                self.replace(records);
                self.state = ListState::Ready;
                None
            }
            Err(ApiError::Unauthorized) => {
                self.reset();
                Some(Effect::Redirect(Route::Login))
            }
            Err(error) => {
                tracing::warn!(%error, kind = %R::KIND, "list fetch failed");
                self.records.clear();
                self.rows.clear();
                self.selected = None;
                self.state = ListState::Error(error.to_string());
                None
            }
        }
    }

    /// Tear the page down. Any fetch still in flight is ignored when it lands.
    pub fn leave_page(&mut self) {
        self.reset();
        self.filter = FilterState::default();
    }

    // --- filters & selection ---

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_category(&mut self, category: C) {
        self.filter.category = category;
    }

    /// Select a row by id. Returns `false` (and clears the selection) when no
    /// such row is loaded.
    pub fn select(&mut self, id: &str) -> bool {
        let found = self.rows.iter().any(|row| row.id == id);
        self.selected = found.then(|| id.to_string());
        found
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // --- read-only views ---

    #[must_use]
    pub const fn state(&self) -> &ListState {
        &self.state
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState<C> {
        &self.filter
    }

    /// Rows passing the current filter, in source order.
    #[must_use]
    pub fn visible(&self) -> Vec<&DisplayRecord> {
        apply_filter(&self.rows, &self.filter)
    }

    /// Per-tab totals over every loaded row, regardless of the query.
    #[must_use]
    pub fn counts(&self) -> Vec<(C, usize)> {
        category_counts(&self.rows)
    }

    #[must_use]
    pub fn rows(&self) -> &[DisplayRecord] {
        &self.rows
    }

    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub fn selected(&self) -> Option<&DisplayRecord> {
        let id = self.selected.as_deref()?;
        self.rows.iter().find(|row| row.id == id)
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Row written by the last successful create or update. `None` when the
    /// server confirmed without echoing the record and the list was reloaded.
    #[must_use]
    pub fn saved(&self) -> Option<&DisplayRecord> {
        let id = self.saved.as_deref()?;
        self.rows.iter().find(|row| row.id == id)
    }

    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Records dropped by the last fetch because they had no identifier.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    // --- async drivers ---

    /// Fetch from `source` and apply the result.
    pub async fn load<S: RecordSource<R>>(&mut self, source: &S, session: &Session) -> Option<Effect> {
        match self.refresh(session) {
            Effect::Fetch(ticket) => {
                let result = source.fetch_all(session).await;
                self.complete_fetch(ticket, result)
            }
            redirect @ Effect::Redirect(_) => Some(redirect),
        }
    }

    /// Create a record; it is appended only once the server confirms. A
    /// confirmation without the record reloads the list instead.
    pub async fn create<S: RecordSource<R>>(
        &mut self,
        source: &S,
        session: &Session,
        draft: &R::Draft,
    ) -> Option<Effect> {
        let outcome = self.try_create(source, session, draft).await;
        self.settle(Action::Create, outcome)
    }

    /// Update a loaded record in place once the server confirms.
    pub async fn update<S: RecordSource<R>>(
        &mut self,
        source: &S,
        session: &Session,
        id: &str,
        draft: &R::Draft,
    ) -> Option<Effect> {
        let outcome = self.try_update(source, session, id, draft).await;
        self.settle(Action::Edit, outcome)
    }

    /// Delete a loaded record; it leaves the list only once the server confirms.
    pub async fn remove<S: RecordSource<R>>(
        &mut self,
        source: &S,
        session: &Session,
        id: &str,
    ) -> Option<Effect> {
        let outcome = self.try_remove(source, session, id).await;
        self.settle(Action::Delete, outcome)
    }

    // --- internals ---

    async fn try_create<S: RecordSource<R>>(
        &mut self,
        source: &S,
        session: &Session,
        draft: &R::Draft,
    ) -> Result<(), ViewError> {
        authorize(session, Action::Create)?;
        R::validate_draft(draft)?;
        self.saved = None;
        let Some(record) = source.create(session, draft).await? else {
            return self.resync(source, session).await;
        };
        let row = record.to_display(&self.formatter)?;
        self.saved = Some(row.id.clone());
        self.records.push(record);
        self.rows.push(row);
        Ok(())
    }

    async fn try_update<S: RecordSource<R>>(
        &mut self,
        source: &S,
        session: &Session,
        id: &str,
        draft: &R::Draft,
    ) -> Result<(), ViewError> {
        authorize(session, Action::Edit)?;
        let index = self.position(id)?;
        R::validate_draft(draft)?;
        self.saved = None;
        let Some(record) = source.update(session, id, draft).await? else {
            return self.resync(source, session).await;
        };
        let row = record.to_display(&self.formatter)?;
        self.saved = Some(row.id.clone());
        // the list may have been reloaded while the request was out
        let index = self.position(id).unwrap_or(index);
        if let (Some(slot), Some(row_slot)) = (self.records.get_mut(index), self.rows.get_mut(index)) {
            *slot = record;
            *row_slot = row;
        }
        self.prune_selection();
        Ok(())
    }

    async fn try_remove<S: RecordSource<R>>(
        &mut self,
        source: &S,
        session: &Session,
        id: &str,
    ) -> Result<(), ViewError> {
        authorize(session, Action::Delete)?;
        self.position(id)?;
        source.remove(session, id).await?;
        if let Ok(index) = self.position(id) {
            self.records.remove(index);
            self.rows.remove(index);
        }
        self.prune_selection();
        Ok(())
    }

    /// Reload after a write the server confirmed without echoing the record.
    async fn resync<S: RecordSource<R>>(
        &mut self,
        source: &S,
        session: &Session,
    ) -> Result<(), ViewError> {
        tracing::debug!(kind = %R::KIND, "write confirmed without a record; reloading");
        if let Some(Effect::Redirect(_)) = self.load(source, session).await {
            return Err(ViewError::SignInRequired);
        }
        Ok(())
    }

    fn settle(&mut self, action: Action, outcome: Result<(), ViewError>) -> Option<Effect> {
        let (verb, done) = match action {
            Action::Create => ("create", "created"),
            Action::Edit => ("update", "updated"),
            Action::Delete => ("delete", "deleted"),
        };
        match outcome {
            Ok(()) => {
                self.notice = Some(Notice::Info(format!("{} {done}", R::KIND)));
                None
            }
            Err(ViewError::SignInRequired) => {
                self.leave_page();
                Some(Effect::Redirect(Route::Login))
            }
            Err(error) => {
                tracing::warn!(%error, kind = %R::KIND, verb, "mutation failed");
                self.notice = Some(Notice::Error(format!("could not {verb} {}: {error}", R::KIND)));
                None
            }
        }
    }

    fn position(&self, id: &str) -> Result<usize, ViewError> {
        self.rows
            .iter()
            .position(|row| row.id == id)
            .ok_or_else(|| ViewError::UnknownRecord {
                kind: R::KIND,
                id: id.to_string(),
            })
    }

    fn replace(&mut self, records: Vec<R>) {
        self.records.clear();
        self.rows.clear();
        self.dropped = 0;
        for record in records {
            match record.to_display(&self.formatter) {
                Ok(row) => {
                    self.records.push(record);
                    self.rows.push(row);
                }
                Err(error) => {
                    tracing::warn!(%error, "dropping record from display");
                    self.dropped += 1;
                }
            }
        }
        self.prune_selection();
    }

    fn prune_selection(&mut self) {
        if let Some(id) = &self.selected
            && !self.rows.iter().any(|row| &row.id == id)
        {
            self.selected = None;
        }
    }

    fn reset(&mut self) {
        self.records.clear();
        self.rows.clear();
        self.state = ListState::Idle;
        self.in_flight = None;
        self.selected = None;
        self.notice = None;
        self.saved = None;
        self.dropped = 0;
    }
}

fn authorize(session: &Session, action: Action) -> Result<(), ViewError> {
    check_credential(session, Utc::now()).map_err(|_| ViewError::SignInRequired)?;
    if !Capabilities::for_session(session).allows(action) {
        return Err(ViewError::NotPermitted {
            action: action.as_str(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use desk_core::entities::ContractRecord;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::filter::ContractCategory;

    type Contracts = ListController<ContractRecord, ContractCategory>;

    fn session() -> Session {
        Session::new("opaque-token", Some("user".into()), None)
    }

    fn contract(id: &str, status: &str) -> ContractRecord {
        ContractRecord {
            object_id: Some(id.into()),
            contract_name: Some(format!("Contract {id}")),
            status: Some(status.into()),
            ..ContractRecord::default()
        }
    }

    fn ticket(effect: Effect) -> FetchTicket {
        match effect {
            Effect::Fetch(ticket) => ticket,
            Effect::Redirect(route) => panic!("unexpected redirect to {route}"),
        }
    }

    #[test]
    fn anonymous_session_redirects_without_fetching() {
        let mut controller = Contracts::new(Formatter::default());
        let effect = controller.enter_page(&Session::anonymous());
        assert_eq!(effect, Effect::Redirect(Route::Login));
        assert_eq!(controller.state(), &ListState::Idle);
    }

    #[test]
    fn fetch_moves_through_loading_to_ready() {
        let mut controller = Contracts::new(Formatter::default());
        let t = ticket(controller.enter_page(&session()));
        assert_eq!(controller.state(), &ListState::Loading);

        let effect = controller.complete_fetch(t, Ok(vec![contract("a", "Active")]));
        assert_eq!(effect, None);
        assert_eq!(controller.state(), &ListState::Ready);
        assert_eq!(controller.rows().len(), 1);
    }

    #[test]
    fn superseded_ticket_is_ignored() {
        let mut controller = Contracts::new(Formatter::default());
        let first = ticket(controller.enter_page(&session()));
        let second = ticket(controller.refresh(&session()));
        assert!(second.generation() > first.generation());

        controller.complete_fetch(first, Ok(vec![contract("stale", "Active")]));
        assert_eq!(controller.state(), &ListState::Loading);
        assert!(controller.rows().is_empty());

        controller.complete_fetch(second, Ok(vec![contract("fresh", "Active")]));
        assert_eq!(controller.rows()[0].id, "fresh");
    }

    #[test]
    fn result_after_leave_page_is_discarded() {
        let mut controller = Contracts::new(Formatter::default());
        let t = ticket(controller.enter_page(&session()));
        controller.leave_page();

        controller.complete_fetch(t, Ok(vec![contract("late", "Active")]));
        assert_eq!(controller.state(), &ListState::Idle);
        assert!(controller.rows().is_empty());
    }

    #[test]
    fn unauthorized_fetch_redirects_and_idles() {
        let mut controller = Contracts::new(Formatter::default());
        let t = ticket(controller.enter_page(&session()));
        let effect = controller.complete_fetch(t, Err(ApiError::Unauthorized));
        assert_eq!(effect, Some(Effect::Redirect(Route::Login)));
        assert_eq!(controller.state(), &ListState::Idle);
    }

    #[test]
    fn failed_fetch_is_a_page_error_and_retry_reloads() {
        let mut controller = Contracts::new(Formatter::default());
        let t = ticket(controller.enter_page(&session()));
        let failure = ApiError::Api {
            status: 500,
            message: "Server error".into(),
        };
        assert_eq!(controller.complete_fetch(t, Err(failure)), None);
        assert_eq!(
            controller.state(),
            &ListState::Error("API error (500): Server error".into())
        );

        let retry = ticket(controller.refresh(&session()));
        assert_eq!(controller.state(), &ListState::Loading);
        controller.complete_fetch(retry, Ok(vec![contract("a", "Active")]));
        assert_eq!(controller.state(), &ListState::Ready);
    }

    #[test]
    fn unidentified_records_are_dropped_and_counted() {
        let mut controller = Contracts::new(Formatter::default());
        let t = ticket(controller.enter_page(&session()));
        controller.complete_fetch(t, Ok(vec![contract("a", "Active"), ContractRecord::default()]));
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.records().len(), 1);
        assert_eq!(controller.dropped(), 1);
    }

    #[test]
    fn selection_is_cleared_when_row_disappears() {
        let mut controller = Contracts::new(Formatter::default());
        let t = ticket(controller.enter_page(&session()));
        controller.complete_fetch(t, Ok(vec![contract("a", "Active"), contract("b", "Pending")]));
        assert!(controller.select("b"));
        assert_eq!(controller.selected().map(|r| r.id.as_str()), Some("b"));
        assert!(!controller.select("zzz"));
        assert!(controller.selected().is_none());

        controller.select("b");
        let t = ticket(controller.refresh(&session()));
        controller.complete_fetch(t, Ok(vec![contract("a", "Active")]));
        assert!(controller.selected().is_none());
    }

    #[test]
    fn filter_changes_do_not_change_state() {
        let mut controller = Contracts::new(Formatter::default());
        let t = ticket(controller.enter_page(&session()));
        controller.complete_fetch(t, Ok(vec![contract("a", "Active"), contract("b", "Expired")]));

        controller.set_category(ContractCategory::parse("expired"));
        controller.set_query("contract");
        assert_eq!(controller.state(), &ListState::Ready);
        let ids: Vec<_> = controller.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }
}
