//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that validate
//! an `OrderStore` through full REST round-trips:
//! JSON → HTTP request → handler → OrderStore → HTTP response → JSON.

/// Generate a REST integration test suite for a storage backend.
///
/// `$store_factory` must produce a fresh, empty `impl OrderStore + 'static`.
///
/// # Generated Tests
///
/// ## CRUD
/// - `test_rest_create` — POST 201 + assigned id
/// - `test_rest_create_defaults_order_date` — missing date means today
/// - `test_rest_get` — GET 200 + identical fields
/// - `test_rest_list` / `test_rest_list_empty`
/// - `test_rest_update` — PUT 200 + replaced fields
/// - `test_rest_update_path_id_wins`
/// - `test_rest_delete` — DELETE 204, then GET 404
///
/// ## Error handling
/// - `test_rest_get_not_found`, `test_rest_update_not_found`, `test_rest_delete_not_found`
/// - `test_rest_update_not_found_wins_over_invalid_body`
/// - `test_rest_total_must_fit_in_cents`, `test_rest_smallest_total_round_trips`
/// - `test_rest_create_reports_every_violation` — 400 listing all fields
/// - `test_rest_create_future_date`, `test_rest_update_invalid_body`
/// - `test_rest_malformed_json`, `test_rest_wrong_field_type`, `test_rest_invalid_id`
///
/// ## Scenario
/// - `test_rest_order_lifecycle` — create, read, update, delete, read
#[macro_export]
macro_rules! rest_integration_tests {
    ($store_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use orders::core::order::today;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                storage_harness::integration::test_server($store_factory)
            }

            async fn create(server: &TestServer, body: Value) -> Value {
                let response = server.post("/orders").json(&body).await;
                response.assert_status(StatusCode::CREATED);
                response.json()
            }

            fn shrek() -> Value {
                json!({
                    "customerName": "Shrek",
                    "shippingAddress": "123 Swamp",
                    "total": 23.45,
                    "orderDate": today().to_string()
                })
            }

            // ==============================================================
            // CRUD — Create
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let body = create(&server, shrek()).await;

                assert!(body["id"].as_i64().unwrap() >= 1);
                assert_eq!(body["customerName"], "Shrek");
                assert_eq!(body["shippingAddress"], "123 Swamp");
                assert_eq!(body["total"], 23.45);
                assert_eq!(body["orderDate"], today().to_string());
            }

            #[tokio::test]
            async fn test_rest_create_defaults_order_date() {
                let server = make_server().await;

                let body = create(
                    &server,
                    json!({
                        "customerName": "Shrek",
                        "shippingAddress": "123 Swamp",
                        "total": 100.0
                    }),
                )
                .await;

                assert!(body["id"].is_i64());
                assert_eq!(body["orderDate"], today().to_string());
            }

            #[tokio::test]
            async fn test_rest_create_assigns_fresh_ids() {
                let server = make_server().await;

                let first = create(&server, shrek()).await;
                let second = create(&server, shrek()).await;

                assert_ne!(first["id"], second["id"]);
            }

            // ==============================================================
            // CRUD — Get
            // ==============================================================

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;
                let created = create(&server, shrek()).await;
                let id = created["id"].as_i64().unwrap();

                let response = server.get(&format!("/orders/{}", id)).await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body, created);
            }

            #[tokio::test]
            async fn test_rest_get_not_found() {
                let server = make_server().await;

                let response = server.get("/orders/424242").await;

                response.assert_status(StatusCode::NOT_FOUND);
                assert!(response.text().is_empty());
            }

            // ==============================================================
            // CRUD — List
            // ==============================================================

            #[tokio::test]
            async fn test_rest_list_empty() {
                let server = make_server().await;

                let response = server.get("/orders").await;

                response.assert_status_ok();
                response.assert_json(&json!([]));
            }

            #[tokio::test]
            async fn test_rest_list() {
                let server = make_server().await;
                create(&server, shrek()).await;
                create(
                    &server,
                    json!({
                        "customerName": "Donkey",
                        "shippingAddress": "Swamp Neighbor",
                        "total": 200.0
                    }),
                )
                .await;

                let response = server.get("/orders").await;

                response.assert_status_ok();
                let body: Vec<Value> = response.json();
                assert_eq!(body.len(), 2);
                assert_eq!(body[0]["customerName"], "Shrek");
                assert_eq!(body[1]["customerName"], "Donkey");
            }

            // ==============================================================
            // CRUD — Update
            // ==============================================================

            #[tokio::test]
            async fn test_rest_update() {
                let server = make_server().await;
                let created = create(&server, shrek()).await;
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/orders/{}", id))
                    .json(&json!({
                        "customerName": "Fiona",
                        "shippingAddress": "123 Swamp Ave",
                        "total": 200.0
                    }))
                    .await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["id"], id);
                assert_eq!(body["customerName"], "Fiona");
                assert_eq!(body["shippingAddress"], "123 Swamp Ave");
                assert_eq!(body["total"], 200.0);

                let fetched: Value = server.get(&format!("/orders/{}", id)).await.json();
                assert_eq!(fetched, body);
            }

            #[tokio::test]
            async fn test_rest_update_path_id_wins() {
                let server = make_server().await;
                let created = create(&server, shrek()).await;
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/orders/{}", id))
                    .json(&json!({
                        "id": id + 1000,
                        "customerName": "Fiona",
                        "shippingAddress": "123 Swamp Ave",
                        "total": 200.0
                    }))
                    .await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["id"], id);

                server
                    .get(&format!("/orders/{}", id + 1000))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_update_not_found() {
                let server = make_server().await;

                let response = server
                    .put("/orders/5")
                    .json(&json!({
                        "customerName": "Fiona",
                        "shippingAddress": "123 Swamp Ave",
                        "total": 200.0
                    }))
                    .await;

                response.assert_status(StatusCode::NOT_FOUND);

                // update never creates a row
                let all: Vec<Value> = server.get("/orders").await.json();
                assert!(all.is_empty());
            }

            #[tokio::test]
            async fn test_rest_update_not_found_wins_over_invalid_body() {
                let server = make_server().await;

                let response = server
                    .put("/orders/5")
                    .json(&json!({
                        "customerName": "",
                        "shippingAddress": "x",
                        "total": 1.0
                    }))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);

                let response = server
                    .put("/orders/5")
                    .content_type("application/json")
                    .bytes("{\"customerName\": ".into())
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);

                let all: Vec<Value> = server.get("/orders").await.json();
                assert!(all.is_empty());
            }

            #[tokio::test]
            async fn test_rest_update_malformed_body_on_existing_order() {
                let server = make_server().await;
                let created = create(&server, shrek()).await;
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/orders/{}", id))
                    .content_type("application/json")
                    .bytes("not json".into())
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_BODY");
            }

            #[tokio::test]
            async fn test_rest_update_invalid_body() {
                let server = make_server().await;
                let created = create(&server, shrek()).await;
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/orders/{}", id))
                    .json(&json!({
                        "customerName": "",
                        "shippingAddress": "123 Swamp Ave",
                        "total": 0
                    }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let text = response.text();
                assert!(text.contains("Customer name is required"));
                assert!(text.contains("Total must be a positive value"));

                let unchanged: Value = server.get(&format!("/orders/{}", id)).await.json();
                assert_eq!(unchanged, created);
            }

            // ==============================================================
            // CRUD — Delete
            // ==============================================================

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;
                let created = create(&server, shrek()).await;
                let id = created["id"].as_i64().unwrap();

                let response = server.delete(&format!("/orders/{}", id)).await;
                response.assert_status(StatusCode::NO_CONTENT);
                assert!(response.text().is_empty());

                server
                    .get(&format!("/orders/{}", id))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_delete_not_found() {
                let server = make_server().await;

                server
                    .delete("/orders/7")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Error handling
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create_reports_every_violation() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": "",
                        "shippingAddress": "",
                        "total": -100.0
                    }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let text = response.text();
                assert!(text.contains("customerName: Customer name is required"));
                assert!(text.contains("shippingAddress: Shipping address is required"));
                assert!(text.contains("total: Total must be a positive value"));
                assert!(!text.contains("orderDate"));

                let all: Vec<Value> = server.get("/orders").await.json();
                assert!(all.is_empty(), "A rejected order must not be persisted");
            }

            #[tokio::test]
            async fn test_rest_total_must_fit_in_cents() {
                let server = make_server().await;

                for total in [json!(0.001), json!(23.456), json!(1e17)] {
                    let response = server
                        .post("/orders")
                        .json(&json!({
                            "customerName": "Shrek",
                            "shippingAddress": "123 Swamp",
                            "total": total
                        }))
                        .await;

                    response.assert_status(StatusCode::BAD_REQUEST);
                    assert!(
                        response
                            .text()
                            .contains("total: Total must have at most 17 integer digits and 2 decimal places"),
                        "total {} should be rejected",
                        total
                    );
                }

                let all: Vec<Value> = server.get("/orders").await.json();
                assert!(all.is_empty(), "No order with an unstorable total may be persisted");
            }

            #[tokio::test]
            async fn test_rest_smallest_total_round_trips() {
                let server = make_server().await;

                let created = create(
                    &server,
                    json!({
                        "customerName": "Shrek",
                        "shippingAddress": "123 Swamp",
                        "total": 0.01
                    }),
                )
                .await;
                assert_eq!(created["total"], 0.01);

                let id = created["id"].as_i64().unwrap();
                let fetched: Value = server.get(&format!("/orders/{}", id)).await.json();
                assert_eq!(fetched["total"], 0.01);
            }

            #[tokio::test]
            async fn test_rest_create_future_date() {
                let server = make_server().await;
                let tomorrow = today().succ_opt().unwrap();

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": "Shrek",
                        "shippingAddress": "123 Swamp",
                        "total": 23.45,
                        "orderDate": tomorrow.to_string()
                    }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert!(
                    response
                        .text()
                        .contains("Order date should be in the past or present")
                );
            }

            #[tokio::test]
            async fn test_rest_malformed_json() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .content_type("application/json")
                    .bytes("{\"customerName\": ".into())
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_BODY");
            }

            #[tokio::test]
            async fn test_rest_wrong_field_type() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": "Shrek",
                        "shippingAddress": "123 Swamp",
                        "total": 23.45,
                        "orderDate": "11/06/2023"
                    }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_BODY");
            }

            #[tokio::test]
            async fn test_rest_invalid_id() {
                let server = make_server().await;

                let response = server.get("/orders/not-a-number").await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_ORDER_ID");
            }

            // ==============================================================
            // Scenario
            // ==============================================================

            #[tokio::test]
            async fn test_rest_order_lifecycle() {
                let server = make_server().await;

                let created = create(&server, shrek()).await;
                let id = created["id"].as_i64().unwrap();
                assert!(id >= 1);
                let path = format!("/orders/{}", id);

                let fetched = server.get(&path).await;
                fetched.assert_status_ok();
                let fetched: Value = fetched.json();
                assert_eq!(fetched["customerName"], "Shrek");
                assert_eq!(fetched["shippingAddress"], "123 Swamp");
                assert_eq!(fetched["total"], 23.45);
                assert_eq!(fetched["orderDate"], today().to_string());

                let updated = server
                    .put(&path)
                    .json(&json!({
                        "customerName": "Fiona",
                        "shippingAddress": "123 Swamp Ave",
                        "total": 200.0
                    }))
                    .await;
                updated.assert_status_ok();
                let updated: Value = updated.json();
                assert_eq!(updated["customerName"], "Fiona");

                server
                    .delete(&path)
                    .await
                    .assert_status(StatusCode::NO_CONTENT);
                server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
            }
        }
    };
}
