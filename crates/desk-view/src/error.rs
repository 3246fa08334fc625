//! View-layer error types.

use desk_api::ApiError;
use desk_core::errors::ValidationError;
use thiserror::Error;

use crate::mapper::RecordKind;

/// A raw record that cannot be shown. Only a missing identifier is fatal to
/// a record; every other field has a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("{kind} record has no identifier")]
    MissingIdentifier { kind: RecordKind },
}

/// Why a controller action did not complete.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The current role lacks the capability for this action.
    #[error("not permitted: your role cannot {action}")]
    NotPermitted { action: &'static str },

    /// The session has no usable credential; the page should redirect.
    #[error("session expired — sign in again")]
    SignInRequired,

    #[error("no {kind} with id '{id}' in the current list")]
    UnknownRecord { kind: RecordKind, id: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for ViewError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Unauthorized => Self::SignInRequired,
            ApiError::Invalid(invalid) => Self::Invalid(invalid),
            other => Self::Api(other),
        }
    }
}
