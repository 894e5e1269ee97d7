//! End-to-end smoke test: a short mixed run against a mock gateway.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gateway_loadgen::config;
use gateway_loadgen::gateway::GatewayClient;
use gateway_loadgen::runner::{self, RunPlan};
use gateway_loadgen::scenarios::behavior_table;
use gateway_loadgen::session::ThinkTime;

#[tokio::test]
async fn short_mixed_run_completes_and_aggregates_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product-service/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"productId": 3}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/product-service/api/products/\d+$"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/order-service/api/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"orderId": 12})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/order-service/api/orders/\d+$"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let profile = config::get_load_profile("dev");
    let gateway = GatewayClient::new(&server.uri(), &profile).expect("valid test host");
    let plan = RunPlan {
        sessions: 3,
        duration: Duration::from_millis(300),
        report_interval_secs: 60,
        think_time: ThinkTime::zero(),
        behaviors: behavior_table(2, 1),
        catalogue_size: 20,
    };

    let metrics = runner::run(gateway, plan).await.expect("run completes");

    assert_eq!(metrics.sessions.started, 3);
    assert_eq!(metrics.sessions.active, 0);
    assert!(metrics.total_requests() > 0, "no requests issued");
    assert_eq!(metrics.total_failed(), 0);
}
