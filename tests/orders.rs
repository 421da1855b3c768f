mod common;

use axum::http::{Method, StatusCode};
use common::{router, send, DELIVERED_ORDER, OUT_FOR_DELIVERY_ORDER, PENDING_ORDER};
use serde_json::{json, Value};

fn order() -> Value {
    json!({
        "deliverTo": "A",
        "mobileNumber": "555",
        "dishes": [{ "id": "1", "name": "Taco", "price": 8, "quantity": 2 }]
    })
}

fn order_with_status(status: &str) -> Value {
    let mut order = order();
    order["status"] = json!(status);
    order
}

#[tokio::test]
async fn lists_seeded_orders() {
    let router = router();

    let (status, body) = send(&router, Method::GET, "/orders", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn creates_an_order_and_reads_it_back() {
    let router = router();

    let (status, created) =
        send(&router, Method::POST, "/orders", Some(json!({ "data": order() }))).await;

    assert_eq!(status, StatusCode::CREATED);
    let order = &created["data"];
    assert_eq!(order["deliverTo"], "A");
    assert_eq!(order["mobileNumber"], "555");
    assert_eq!(order["status"], "pending");
    assert_eq!(order["dishes"][0]["quantity"], 2);
    assert_eq!(order["dishes"][0]["id"], "1");

    let uri = format!("/orders/{}", order["id"].as_str().unwrap());
    let (status, read) = send(&router, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["data"], *order);
}

#[tokio::test]
async fn rejects_a_dish_with_zero_quantity() {
    let router = router();

    let (status, body) = send(
        &router,
        Method::POST,
        "/orders",
        Some(json!({
            "data": {
                "deliverTo": "A",
                "mobileNumber": "555",
                "dishes": [{ "id": "1", "quantity": 0 }]
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Dish 0 must have a quantity that is an integer greater than 0"
    );
}

#[tokio::test]
async fn rejects_an_empty_dish_list() {
    let router = router();
    let mut order = order();
    order["dishes"] = json!([]);

    let (status, body) =
        send(&router, Method::POST, "/orders", Some(json!({ "data": order }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Order must include at least one dish");
}

#[tokio::test]
async fn unknown_order_is_not_found() {
    let router = router();

    let (status, body) = send(&router, Method::GET, "/orders/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order does not exist: nope");

    let (status, _) = send(
        &router,
        Method::PUT,
        "/orders/nope",
        Some(json!({ "data": order_with_status("pending") })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, Method::DELETE, "/orders/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_order_is_not_found_even_with_a_malformed_body() {
    let router = router();

    let (status, body) =
        send(&router, Method::PUT, "/orders/nope", Some(json!({ "foo": 1 }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order does not exist: nope");
}

#[tokio::test]
async fn order_dishes_may_carry_any_fields() {
    let router = router();

    let mut order = order();
    order["dishes"] = json!([{ "id": 1, "quantity": 1 }]);
    let (status, body) =
        send(&router, Method::POST, "/orders", Some(json!({ "data": order }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["dishes"][0]["id"], 1);
    assert_eq!(body["data"]["dishes"][0]["quantity"], 1);
}

#[tokio::test]
async fn update_replaces_the_stored_order() {
    let router = router();
    let uri = format!("/orders/{}", PENDING_ORDER);

    let (status, updated) = send(
        &router,
        Method::PUT,
        &uri,
        Some(json!({ "data": order_with_status("preparing") })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["id"], PENDING_ORDER);
    assert_eq!(updated["data"]["status"], "preparing");
    assert_eq!(updated["data"]["deliverTo"], "A");

    let (_, read) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(read["data"], updated["data"]);
}

#[tokio::test]
async fn update_checks_body_id_against_route() {
    let router = router();
    let uri = format!("/orders/{}", PENDING_ORDER);

    let mut order = order_with_status("preparing");
    order["id"] = json!("99");
    let (status, body) = send(&router, Method::PUT, &uri, Some(json!({ "data": order }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        format!(
            "Order id does not match route id. Order: 99, Route: {}",
            PENDING_ORDER
        )
    );

    let mut order = order_with_status("preparing");
    order["id"] = json!(PENDING_ORDER);
    let (status, _) = send(&router, Method::PUT, &uri, Some(json!({ "data": order }))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_requires_a_known_status() {
    let router = router();
    let uri = format!("/orders/{}", PENDING_ORDER);

    for status in [None, Some("lost"), Some("")] {
        let mut order = order();
        if let Some(status) = status {
            order["status"] = json!(status);
        }

        let (code, body) = send(&router, Method::PUT, &uri, Some(json!({ "data": order }))).await;

        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
    }
}

#[tokio::test]
async fn delivered_orders_cannot_be_updated() {
    let router = router();
    let uri = format!("/orders/{}", DELIVERED_ORDER);

    for status in ["pending", "delivered", "bogus"] {
        let (code, body) = send(
            &router,
            Method::PUT,
            &uri,
            Some(json!({ "data": order_with_status(status) })),
        )
        .await;

        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "A delivered order cannot be changed");
    }
}

#[tokio::test]
async fn only_pending_orders_can_be_deleted() {
    let router = router();

    for id in [OUT_FOR_DELIVERY_ORDER, DELIVERED_ORDER] {
        let (status, body) =
            send(&router, Method::DELETE, &format!("/orders/{}", id), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "An order cannot be deleted unless it is pending"
        );
    }
}

#[tokio::test]
async fn deleting_a_pending_order_removes_it() {
    let router = router();
    let uri = format!("/orders/{}", PENDING_ORDER);

    let (status, body) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&router, Method::GET, "/orders", None).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 2);
}
