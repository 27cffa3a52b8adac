//! HTTP end-to-end tests: a real server on a random port driven with reqwest.

use grubdash::clients::{ActorClient, DishClient, OrderClient};
use grubdash::framework::mock::MockClient;
use grubdash::framework::FrameworkError;
use grubdash::http::{self, AppState};
use grubdash::lifecycle::{RestaurantSystem, SeedData};
use grubdash::model::{Dish, Order};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_server(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, http::router(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn start(seed: SeedData) -> (RestaurantSystem, String) {
    let system = RestaurantSystem::new(seed, 8);
    let base = spawn_server(AppState::from_system(&system)).await;
    (system, base)
}

async fn read_order(system: &RestaurantSystem, id: &str) -> Order {
    system.order_client.get(id).await.unwrap()
}

async fn body(resp: reqwest::Response) -> Value {
    resp.json().await.unwrap()
}

#[tokio::test]
async fn post_dish_returns_created_dish() {
    let (_system, base) = start(SeedData::empty()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/dishes"))
        .json(&json!({ "data": { "name": "Taco", "description": "x", "price": 5, "image_url": "u" } }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let data = body(resp).await["data"].clone();
    let id = data["id"].as_str().unwrap().to_string();
    assert!(id.parse::<u64>().is_ok());
    assert_eq!(data["name"], "Taco");
    assert_eq!(data["description"], "x");
    assert_eq!(data["price"], 5);
    assert_eq!(data["image_url"], "u");

    // Read it back
    let resp = client.get(format!("{base}/dishes/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body(resp).await["data"], data);
}

#[tokio::test]
async fn validation_errors_are_400_with_message() {
    let (_system, base) = start(SeedData::empty()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/dishes"))
        .json(&json!({ "data": { "name": "Taco", "price": 5, "image_url": "u" } }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body(resp).await,
        json!({ "error": "Dish must include a description" })
    );

    // No data envelope at all
    let resp = client
        .post(format!("{base}/orders"))
        .json(&json!({ "deliverTo": "here" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body(resp).await,
        json!({ "error": "Order must include a deliverTo" })
    );

    let resp = client.get(format!("{base}/dishes")).send().await.unwrap();
    assert_eq!(body(resp).await, json!({ "data": [] }));
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (_system, base) = start(SeedData::empty()).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/dishes"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body(resp).await["error"].is_string());
}

#[tokio::test]
async fn put_order_with_zero_quantity_is_rejected() {
    let (system, base) = start(SeedData::fixtures().unwrap()).await;
    let client = reqwest::Client::new();
    let before: Order = read_order(&system, "5").await;

    let resp = client
        .put(format!("{base}/orders/5"))
        .json(&json!({ "data": {
            "deliverTo": "1 Main St",
            "mobileNumber": "555-0100",
            "status": "pending",
            "dishes": [{ "dishId": "1", "quantity": 0 }]
        }}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body(resp).await,
        json!({ "error": "Dish 0 must have a quantity that is an integer greater than 0" })
    );

    assert_eq!(read_order(&system, "5").await, before);
}

#[tokio::test]
async fn order_lifecycle_over_http() {
    let (_system, base) = start(SeedData::empty()).await;
    let client = reqwest::Client::new();
    let order = json!({
        "deliverTo": "1 Main St",
        "mobileNumber": "555-0100",
        "status": "pending",
        "dishes": [{ "dishId": "1", "quantity": 2 }]
    });

    let resp = client
        .post(format!("{base}/orders"))
        .json(&json!({ "data": order }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = body(resp).await["data"]["id"].as_str().unwrap().to_string();

    // Mismatching payload id
    let mut update = order.clone();
    update["id"] = json!("nope");
    update["status"] = json!("preparing");
    let resp = client
        .put(format!("{base}/orders/{id}"))
        .json(&json!({ "data": update }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body(resp).await["error"],
        format!("Order id does not match route id. Order: nope, Route: {id}")
    );

    // Matching payload id moves it out of pending
    update["id"] = json!(id);
    let resp = client
        .put(format!("{base}/orders/{id}"))
        .json(&json!({ "data": update }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body(resp).await["data"]["status"], "preparing");

    let resp = client.delete(format!("{base}/orders/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body(resp).await,
        json!({ "error": "An order cannot be deleted unless it is pending" })
    );

    // Back to pending, then delete
    update["status"] = json!("pending");
    client
        .put(format!("{base}/orders/{id}"))
        .json(&json!({ "data": update }))
        .send()
        .await
        .unwrap();
    let resp = client.delete(format!("{base}/orders/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.text().await.unwrap().is_empty());

    let resp = client.get(format!("{base}/orders/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body(resp).await,
        json!({ "error": format!("Order id not found: {id}") })
    );
}

#[tokio::test]
async fn dish_delete_is_always_405() {
    let (_system, base) = start(SeedData::fixtures().unwrap()).await;
    let client = reqwest::Client::new();

    for id in ["1", "404"] {
        let resp = client.delete(format!("{base}/dishes/{id}")).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body(resp).await,
            json!({ "error": format!("DELETE not allowed for /dishes/{id}") })
        );
    }

    let resp = client.get(format!("{base}/dishes")).send().await.unwrap();
    assert_eq!(body(resp).await["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_routes_and_methods() {
    let (_system, base) = start(SeedData::empty()).await;
    let client = reqwest::Client::new();

    let resp = client.patch(format!("{base}/dishes")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body(resp).await,
        json!({ "error": "PATCH not allowed for /dishes" })
    );

    let resp = client.get(format!("{base}/menu")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body(resp).await, json!({ "error": "Path not found: /menu" }));

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body(resp).await, json!({ "ok": true }));
}

#[tokio::test]
async fn closed_actor_is_503() {
    let mut dishes = MockClient::<Dish>::new();
    dishes.expect_list().return_err(FrameworkError::ActorClosed);
    let orders = MockClient::<Order>::new();

    let state = AppState::new(
        DishClient::new(dishes.client()),
        OrderClient::new(orders.client()),
    );
    let base = spawn_server(state).await;

    let resp = reqwest::get(format!("{base}/dishes")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body(resp).await,
        json!({ "error": "Service unavailable: Actor closed" })
    );
    dishes.verify();
}
