//! Meeting endpoints.

use desk_core::drafts::MeetingDraft;
use desk_core::entities::MeetingRecord;
use desk_core::identity::Session;
use reqwest::Method;

use crate::http::{check_response, extract_echo, extract_list, read_envelope};
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// Fetch every meeting visible to the session. The server scopes the
    /// list for non-admin users.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, 401, a non-success status,
    /// or a `success: false` envelope.
    pub async fn list_meetings(&self, session: &Session) -> Result<Vec<MeetingRecord>, ApiError> {
        let req = self.authorized(Method::GET, "meetings", session);
        let body = read_envelope(check_response(req.send().await?).await?).await?;
        extract_list(body, "meetings")
    }

    /// Schedule a meeting. The draft is validated first and never sent when invalid.
    ///
    /// Returns `None` when the server confirms without echoing the meeting.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for a failing draft, [`ApiError::Parse`]
    /// when the echoed meeting cannot be decoded, otherwise as
    /// [`ApiClient::list_meetings`].
    pub async fn create_meeting(
        &self,
        session: &Session,
        draft: &MeetingDraft,
    ) -> Result<Option<MeetingRecord>, ApiError> {
        draft.validate()?;
        let req = self
            .authorized(Method::POST, "meetings/create", session)
            .json(draft);
        let body = read_envelope(check_response(req.send().await?).await?).await?;
        extract_echo(body, "meeting")
    }

    /// # Errors
    ///
    /// As [`ApiClient::create_meeting`].
    pub async fn update_meeting(
        &self,
        session: &Session,
        id: &str,
        draft: &MeetingDraft,
    ) -> Result<Option<MeetingRecord>, ApiError> {
        draft.validate()?;
        let path = format!("meetings/{}", segment(id));
        let req = self.authorized(Method::PUT, &path, session).json(draft);
        let body = read_envelope(check_response(req.send().await?).await?).await?;
        extract_echo(body, "meeting")
    }

    /// # Errors
    ///
    /// As [`ApiClient::list_meetings`].
    pub async fn delete_meeting(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        let path = format!("meetings/{}", segment(id));
        let req = self.authorized(Method::DELETE, &path, session);
        read_envelope(check_response(req.send().await?).await?).await?;
        Ok(())
    }
}
