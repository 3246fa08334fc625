//! Contract endpoints.

use desk_core::drafts::ContractDraft;
use desk_core::entities::ContractRecord;
use desk_core::identity::Session;
use reqwest::Method;

use crate::http::{check_response, extract_echo, extract_list, extract_one, read_envelope};
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// Fetch every contract visible to the session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, 401, a non-success status,
    /// or a `success: false` envelope.
    pub async fn list_contracts(&self, session: &Session) -> Result<Vec<ContractRecord>, ApiError> {
        let req = self.authorized(Method::GET, "contracts/allcontract", session);
        let body = read_envelope(check_response(req.send().await?).await?).await?;
        extract_list(body, "contracts")
    }

    /// Fetch one contract by id.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::list_contracts`], plus [`ApiError::Parse`] when the
    /// response carries no contract.
    pub async fn get_contract(&self, session: &Session, id: &str) -> Result<ContractRecord, ApiError> {
        let path = format!("contracts/{}", segment(id));
        let req = self.authorized(Method::GET, &path, session);
        let body = read_envelope(check_response(req.send().await?).await?).await?;
        extract_one(body, "contract")
    }

    /// Create a contract. The draft is validated first and never sent when invalid.
    ///
    /// Returns `None` when the server confirms without echoing the contract.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for a failing draft, [`ApiError::Parse`]
    /// when the echoed contract cannot be decoded, otherwise as
    /// [`ApiClient::list_contracts`].
    pub async fn create_contract(
        &self,
        session: &Session,
        draft: &ContractDraft,
    ) -> Result<Option<ContractRecord>, ApiError> {
        draft.validate()?;
        let req = self
            .authorized(Method::POST, "contracts/create", session)
            .json(&draft.normalized());
        let body = read_envelope(check_response(req.send().await?).await?).await?;
        extract_echo(body, "contract")
    }

    /// Replace a contract's fields.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::create_contract`].
    pub async fn update_contract(
        &self,
        session: &Session,
        id: &str,
        draft: &ContractDraft,
    ) -> Result<Option<ContractRecord>, ApiError> {
        draft.validate()?;
        let path = format!("contracts/{}", segment(id));
        let req = self
            .authorized(Method::PUT, &path, session)
            .json(&draft.normalized());
        let body = read_envelope(check_response(req.send().await?).await?).await?;
        extract_echo(body, "contract")
    }

    /// Delete a contract.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::list_contracts`].
    pub async fn delete_contract(&self, session: &Session, id: &str) -> Result<(), ApiError> {
        let path = format!("contracts/{}", segment(id));
        let req = self.authorized(Method::DELETE, &path, session);
        read_envelope(check_response(req.send().await?).await?).await?;
        Ok(())
    }
}
