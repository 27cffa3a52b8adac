use grubdash::error::ApiError;
use grubdash::framework::{FrameworkError, IdGenerator, ResourceActor};
use grubdash::model::{Order, OrderLine, OrderStatus};
use grubdash::pipeline::Payload;
use serde_json::json;

fn seeded(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        deliver_to: "1 Main St".into(),
        mobile_number: "555-0100".into(),
        status: Some(status),
        dishes: vec![OrderLine::new("1", 1)],
    }
}

/// Single actor test: the real Order actor on its own, without the dish actor.
#[tokio::test]
async fn test_order_actor_in_isolation() {
    let ids = IdGenerator::new();
    let (actor, order_client) = grubdash::order_actor::new(4, ids.clone());
    let actor = actor.with_seed(vec![
        seeded("10", OrderStatus::Pending),
        seeded("11", OrderStatus::OutForDelivery),
    ]);
    let actor_handle = tokio::spawn(actor.run());

    let created = order_client
        .create_order(json!({
            "deliverTo": "2 Side St",
            "mobileNumber": "555-0199",
            "dishes": [{ "dishId": "3", "quantity": 1 }]
        }))
        .await
        .unwrap();
    assert_eq!(created.id, "12");
    assert_eq!(created.status, None);

    // The generator is shared: the next id anywhere is 13.
    assert_eq!(ids.next_id(), "13");

    assert_eq!(
        order_client.delete_order("11").await,
        Err(ApiError::DeleteConstraintViolation)
    );
    order_client.delete_order("10").await.unwrap();

    // Cleanup
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_update_runs_lookup_then_pipeline() {
    // The generic client shows the framework errors the typed client hides.
    let (actor, raw) = ResourceActor::<Order>::new(4, IdGenerator::new());
    let handle = tokio::spawn(actor.with_seed(vec![seeded("1", OrderStatus::Pending)]).run());

    let missing = raw
        .update("2", Payload::new(json!({ "status": "bogus" })))
        .await;
    assert!(matches!(
        missing,
        Err(FrameworkError::Rejected(ApiError::NotFound { .. }))
    ));

    let invalid = raw
        .update(
            "1",
            Payload::new(json!({
                "deliverTo": "1 Main St",
                "mobileNumber": "555-0100",
                "dishes": [{ "dishId": "1", "quantity": 1 }],
                "status": "bogus"
            })),
        )
        .await;
    assert_eq!(invalid, Err(FrameworkError::Rejected(ApiError::InvalidStatus)));

    drop(raw);
    handle.await.unwrap();
}
