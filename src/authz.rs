//! Authorization of operations on owned content.

use std::fmt;

use async_trait::async_trait;
use sea_orm::DatabaseTransaction;
use serde::{Deserialize, Serialize};

pub use crate::entities::ContentType;
use crate::error::{Error, Result};

/// Operation a requester wants to perform on a piece of content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Decides whether a requester may operate on a content item.
///
/// Implementations return `Ok(())` to permit and [`Error::Unauthorized`] to
/// refuse. The open transaction is passed so any lookup joins the caller's
/// unit of work.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn check_authorized_to_operate_on_content(
        &self,
        txn: &DatabaseTransaction,
        owner: &str,
        requester: &str,
        content_type: ContentType,
        operation: Operation,
        content_id: i32,
    ) -> Result<()>;
}

/// Reads are open; every other operation is reserved to the owner.
#[derive(Clone, Copy, Debug, Default)]
pub struct OwnerAuthorizer;

#[async_trait]
impl Authorizer for OwnerAuthorizer {
    async fn check_authorized_to_operate_on_content(
        &self,
        _txn: &DatabaseTransaction,
        owner: &str,
        requester: &str,
        content_type: ContentType,
        operation: Operation,
        content_id: i32,
    ) -> Result<()> {
        if operation == Operation::Read || owner == requester {
            return Ok(());
        }

        Err(Error::Unauthorized {
            owner: owner.to_string(),
            requester: requester.to_string(),
            content_type,
            operation,
            content_id,
        })
    }
}
