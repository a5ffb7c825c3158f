mod common;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bujo_labels::aliases::AliasProvider;
use bujo_labels::authz::{Authorizer, ContentType, Operation};
use bujo_labels::models::UpdateLabelParams;
use bujo_labels::{Error, LabelService, Result};
use common::{date, Fixture};
use sea_orm::DatabaseTransaction;

/// Lets a fixed set of editors change anyone's labels.
struct EditorsAuthorizer {
    editors: Vec<String>,
}

#[async_trait]
impl Authorizer for EditorsAuthorizer {
    async fn check_authorized_to_operate_on_content(
        &self,
        _txn: &DatabaseTransaction,
        owner: &str,
        requester: &str,
        content_type: ContentType,
        operation: Operation,
        content_id: i32,
    ) -> Result<()> {
        if owner == requester || self.editors.iter().any(|e| e == requester) {
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

struct FixedAliases;

#[async_trait]
impl AliasProvider for FixedAliases {
    async fn get_aliases(&self, _txn: &DatabaseTransaction, _user: &str) -> Result<HashMap<String, String>> {
        Ok(HashMap::from([("bob".to_string(), "B.".to_string())]))
    }
}

fn service(fx: &Fixture) -> LabelService {
    LabelService::with_adapters(
        fx.conn().clone(),
        Arc::new(EditorsAuthorizer {
            editors: vec!["admin".to_string()],
        }),
        Arc::new(FixedAliases),
    )
}

#[tokio::test]
async fn test_custom_authorizer_allows_editors() {
    let fx = Fixture::new().await;
    let service = service(&fx);
    let label = service.create("shared", "alice", None).await.unwrap();

    let params = UpdateLabelParams {
        value: None,
        icon: Some("star".to_string()),
    };
    let updated = service.partial_update("admin", label.id, params).await.unwrap();
    assert_eq!(updated.icon.as_deref(), Some("star"));

    let err = service.delete("mallory", label.id).await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized { operation: Operation::Delete, .. }));

    service.delete("admin", label.id).await.unwrap();
    assert!(matches!(
        service.get_label(label.id).await.unwrap_err(),
        Error::ResourceNotFound { .. }
    ));
}

#[tokio::test]
async fn test_custom_alias_provider_is_used() {
    let fx = Fixture::new().await;
    let service = service(&fx);
    let project = fx.project("alice", &[("alice", true)]).await;
    let label = service.create("errands", "alice", None).await.unwrap().id;
    fx.task(project, "groceries", Some(date(2024, 1, 1)), &["bob"], &[label]).await;

    let groups = service.get_items_by_labels("UTC", &[label], "alice").await.unwrap();
    assert_eq!(groups[0].tasks[0].assignees[0].alias, "B.");
}

#[tokio::test]
async fn test_rename_uniqueness_checks_requester_labels() {
    let fx = Fixture::new().await;
    let service = service(&fx);
    let play = service.create("play", "alice", None).await.unwrap().id;
    service.create("work", "alice", None).await.unwrap();
    service.create("chores", "admin", None).await.unwrap();

    // The owner's own "work" does not block a rename made by someone else
    let params = UpdateLabelParams {
        value: Some("work".to_string()),
        icon: None,
    };
    let renamed = service.partial_update("admin", play, params).await.unwrap();
    assert_eq!(renamed.name, "work");
    assert_eq!(renamed.owner, "alice");

    let params = UpdateLabelParams {
        value: Some("chores".to_string()),
        icon: None,
    };
    let err = service.partial_update("admin", play, params).await.unwrap_err();
    assert!(matches!(err, Error::ResourceAlreadyExists { ref name, .. } if name == "chores"));
    assert_eq!(service.get_label(play).await.unwrap().name, "work");
}
