//! Error types for label operations.

use crate::authz::Operation;
use crate::entities::ContentType;

/// Errors surfaced by [`crate::LabelService`].
///
/// Every variant is terminal for the current operation: the enclosing
/// database transaction is dropped without commit and rolls back.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{kind} {id} not found")]
    ResourceNotFound { kind: ContentType, id: i32 },

    #[error("{kind} with name {name} already exists")]
    ResourceAlreadyExists { kind: ContentType, name: String },

    #[error("User {requester} is not authorized to {operation} {content_type} {content_id} owned by {owner}")]
    Unauthorized {
        owner: String,
        requester: String,
        content_type: ContentType,
        operation: Operation,
        content_id: i32,
    },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn label_not_found(id: i32) -> Self {
        Self::ResourceNotFound {
            kind: ContentType::Label,
            id,
        }
    }

    pub(crate) fn label_exists(name: impl Into<String>) -> Self {
        Self::ResourceAlreadyExists {
            kind: ContentType::Label,
            name: name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
