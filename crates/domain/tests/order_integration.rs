//! Integration tests for the order service.
//!
//! These tests drive the service against the in-memory store and check the
//! collection-level behavior: creation, lookup, full versus partial update,
//! deletion and listing order.

use domain::{DomainError, OrderId, OrderService, ViolationKind};
use order_store::{InMemoryOrderStore, OrderStore};
use serde_json::{Value, json};

/// Helper to create a test order service
fn create_service() -> OrderService<InMemoryOrderStore> {
    OrderService::new(InMemoryOrderStore::new())
}

fn valid_payload() -> Value {
    json!({"user_id": "u1", "products": {"p1": 2}, "payment_info": "card"})
}

mod create {
    use super::*;

    #[tokio::test]
    async fn create_then_get_returns_payload_with_id() {
        let service = create_service();

        let order_id = service.create_order(&valid_payload()).await.unwrap();
        assert_eq!(order_id.as_str().len(), 8);

        let order = service.get_order(&order_id).await.unwrap();
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "id": order_id.as_str(),
                "user_id": "u1",
                "products": {"p1": 2},
                "payment_info": "card"
            })
        );
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let service = create_service();

        let mut ids = std::collections::HashSet::new();
        for _ in 0..20 {
            let id = service.create_order(&valid_payload()).await.unwrap();
            assert!(ids.insert(id));
        }
        assert_eq!(service.order_count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() {
        let service = create_service();
        let mut payload = valid_payload();
        payload["id"] = json!("chosen01");

        let order_id = service.create_order(&payload).await.unwrap();
        assert_ne!(order_id.as_str(), "chosen01");
        assert!(matches!(
            service.get_order(&OrderId::from("chosen01")).await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn create_keeps_extra_fields() {
        let service = create_service();
        let mut payload = valid_payload();
        payload["note"] = json!("leave at door");

        let order_id = service.create_order(&payload).await.unwrap();
        let order = service.get_order(&order_id).await.unwrap();
        assert_eq!(order.get("note"), Some(&json!("leave at door")));
    }

    #[tokio::test]
    async fn create_with_missing_fields_leaves_collection_unchanged() {
        let service = create_service();
        service.create_order(&valid_payload()).await.unwrap();

        for payload in [
            json!({"products": {"p1": 1}, "payment_info": "card"}),
            json!({"user_id": "u1", "payment_info": "card"}),
            json!({"user_id": "u1", "products": {"p1": 1}}),
            json!({"user_id": "u1"}),
        ] {
            let err = service.create_order(&payload).await.unwrap_err();
            assert!(matches!(err, DomainError::InvalidOrder(_)));
        }

        assert_eq!(service.order_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn create_reports_field_violations() {
        let service = create_service();
        let payload = json!({"user_id": "u1", "products": {"p1": 0}, "payment_info": "card"});

        let Err(DomainError::InvalidOrder(violations)) = service.create_order(&payload).await
        else {
            panic!("expected InvalidOrder");
        };
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].kind,
            ViolationKind::NonPositiveQuantity {
                product: "p1".to_string()
            }
        );
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn replace_discards_fields_missing_from_payload() {
        let service = create_service();
        let mut payload = valid_payload();
        payload["note"] = json!("fragile");
        let order_id = service.create_order(&payload).await.unwrap();

        let replacement = json!({"user_id": "u2", "products": {"p9": 1}, "payment_info": "cash"});
        service.replace_order(&order_id, &replacement).await.unwrap();

        let order = service.get_order(&order_id).await.unwrap();
        assert_eq!(order.id(), &order_id);
        assert_eq!(order.get("user_id"), Some(&json!("u2")));
        assert_eq!(order.get("products"), Some(&json!({"p9": 1})));
        assert!(order.get("note").is_none());
    }

    #[tokio::test]
    async fn merge_preserves_fields_missing_from_payload() {
        let service = create_service();
        let mut payload = valid_payload();
        payload["note"] = json!("fragile");
        let order_id = service.create_order(&payload).await.unwrap();

        service
            .merge_order(&order_id, &json!({"payment_info": "paypal"}))
            .await
            .unwrap();

        let order = service.get_order(&order_id).await.unwrap();
        assert_eq!(order.get("payment_info"), Some(&json!("paypal")));
        assert_eq!(order.get("user_id"), Some(&json!("u1")));
        assert_eq!(order.get("products"), Some(&json!({"p1": 2})));
        assert_eq!(order.get("note"), Some(&json!("fragile")));
    }

    #[tokio::test]
    async fn replace_with_invalid_payload_is_rejected() {
        let service = create_service();
        let order_id = service.create_order(&valid_payload()).await.unwrap();

        let err = service
            .replace_order(&order_id, &json!({"user_id": "u2"}))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidOrder(_)));

        let order = service.get_order(&order_id).await.unwrap();
        assert_eq!(order.get("payment_info"), Some(&json!("card")));
    }

    #[tokio::test]
    async fn replace_validates_before_lookup() {
        let service = create_service();
        let err = service
            .replace_order(&OrderId::from("missing0"), &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidOrder(_)));
    }

    #[tokio::test]
    async fn replace_missing_order_is_not_found() {
        let service = create_service();
        let err = service
            .replace_order(&OrderId::from("missing0"), &valid_payload())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(id) if id.as_str() == "missing0"));
    }

    #[tokio::test]
    async fn merge_rejects_non_object_payload() {
        let service = create_service();
        let order_id = service.create_order(&valid_payload()).await.unwrap();

        for payload in [json!(null), json!([1, 2]), json!("paypal")] {
            let err = service.merge_order(&order_id, &payload).await.unwrap_err();
            assert!(matches!(err, DomainError::EmptyPatch));
        }
    }

    #[tokio::test]
    async fn merge_does_not_validate_shape() {
        let service = create_service();
        let order_id = service.create_order(&valid_payload()).await.unwrap();

        let order = service
            .merge_order(&order_id, &json!({"products": "none"}))
            .await
            .unwrap();
        assert_eq!(order.get("products"), Some(&json!("none")));
    }

    #[tokio::test]
    async fn merge_cannot_change_id() {
        let service = create_service();
        let order_id = service.create_order(&valid_payload()).await.unwrap();

        service
            .merge_order(&order_id, &json!({"id": "hijack00"}))
            .await
            .unwrap();

        assert!(service.get_order(&order_id).await.is_ok());
        assert!(matches!(
            service.get_order(&OrderId::from("hijack00")).await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn merge_missing_order_is_not_found() {
        let service = create_service();
        let err = service
            .merge_order(&OrderId::from("missing0"), &json!({"a": 1}))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}

mod delete_and_list {
    use super::*;

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = create_service();
        let order_id = service.create_order(&valid_payload()).await.unwrap();

        let removed = service.delete_order(&order_id).await.unwrap();
        assert_eq!(removed.id(), &order_id);

        let err = service.get_order(&order_id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_missing_order_is_not_found() {
        let service = create_service();
        let err = service
            .delete_order(&OrderId::from("doesnotexist"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_after_creates_and_deletes_keeps_insertion_order() {
        let service = create_service();

        let mut ids = Vec::new();
        for i in 0..6 {
            let payload = json!({
                "user_id": format!("u{i}"),
                "products": {"p1": 1},
                "payment_info": "card"
            });
            ids.push(service.create_order(&payload).await.unwrap());
        }

        service.delete_order(&ids[1]).await.unwrap();
        service.delete_order(&ids[4]).await.unwrap();

        let listed: Vec<OrderId> = service
            .list_orders()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id().clone())
            .collect();
        assert_eq!(
            listed,
            vec![ids[0].clone(), ids[2].clone(), ids[3].clone(), ids[5].clone()]
        );
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let service = create_service();
        assert!(service.list_orders().await.unwrap().is_empty());
        assert!(service.store().is_empty().await.unwrap());
    }
}
