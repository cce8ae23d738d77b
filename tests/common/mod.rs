// Common test utilities for integration tests

use freecycle_backend::api::build_app;
use freecycle_backend::app_data::AppData;
use freecycle_backend::config::ServerSettings;
use poem::http::StatusCode;
use poem::test::TestClient;
use poem::Endpoint;
use serde_json::Value;
use std::sync::Arc;

/// Creates a client for the full route tree backed by an empty store
pub fn test_client() -> TestClient<impl Endpoint> {
    let app_data = Arc::new(AppData::init(ServerSettings::default()));
    TestClient::new(build_app(app_data))
}

/// Posts an item and returns its assigned id
pub async fn create_item<E: Endpoint>(client: &TestClient<E>, body: Value) -> i64 {
    let resp = client.post("/item/").body_json(&body).send().await;
    resp.assert_status(StatusCode::CREATED);

    resp.json().await.value().object().get("id").i64()
}

/// Ids of the items returned by `GET /items/` with the given query pairs
pub async fn list_item_ids<E: Endpoint>(client: &TestClient<E>, query: &[(&str, &str)]) -> Vec<i64> {
    let mut request = client.get("/items/");
    for (name, value) in query {
        request = request.query(*name, value);
    }

    let resp = request.send().await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    let array = json.value().array();
    (0..array.len()).map(|i| array.get(i).object().get("id").i64()).collect()
}
