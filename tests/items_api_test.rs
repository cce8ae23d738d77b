mod common;

use common::{create_item, list_item_ids, test_client};
use poem::http::StatusCode;
use serde_json::json;

fn scenario_item_a() -> serde_json::Value {
    json!({
        "user_id": "u1",
        "keywords": ["a", "b"],
        "description": "Item A",
        "lat": 10.0,
        "lon": 10.0
    })
}

fn scenario_item_b() -> serde_json::Value {
    json!({
        "user_id": "u2",
        "keywords": ["a"],
        "description": "Item B"
    })
}

#[tokio::test]
async fn test_index_page_is_html() {
    let client = test_client();

    let resp = client.get("/").send().await;
    resp.assert_status_is_ok();

    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("operational"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let client = test_client();

    let resp = client.get("/health").send().await;
    resp.assert_status_is_ok();

    resp.json().await.value().object().get("status").assert_string("healthy");
}

#[tokio::test]
async fn test_create_item_returns_full_record() {
    let client = test_client();

    let resp = client
        .post("/item/")
        .body_json(&json!({
            "user_id": "u1",
            "keywords": ["sofa", "blue"],
            "description": "Blue sofa",
            "image": "http://example.com/sofa.jpg",
            "lat": 51.5,
            "lon": -0.12
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    let json = resp.json().await;
    let item = json.value().object();
    item.get("id").assert_i64(1);
    item.get("user_id").assert_string("u1");
    item.get("description").assert_string("Blue sofa");
    item.get("image").assert_string("http://example.com/sofa.jpg");
    item.get("lat").assert_f64(51.5);
    item.get("lon").assert_f64(-0.12);
    item.get("date_to").assert_null();

    let keywords = item.get("keywords").array();
    keywords.assert_len(2);
    keywords.get(0).assert_string("sofa");
    keywords.get(1).assert_string("blue");

    let date_from = item.get("date_from").string().to_string();
    assert_eq!(date_from.len(), "YYYY-MM-DDTHH:MM:SS".len());
    assert_eq!(&date_from[10..11], "T");
}

#[tokio::test]
async fn test_create_item_without_optionals_serializes_nulls() {
    let client = test_client();

    let resp = client.post("/item/").body_json(&scenario_item_b()).send().await;
    resp.assert_status(StatusCode::CREATED);

    let json = resp.json().await;
    let item = json.value().object();
    item.get("image").assert_null();
    item.get("lat").assert_null();
    item.get("lon").assert_null();
}

#[tokio::test]
async fn test_create_item_ids_increase() {
    let client = test_client();

    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(create_item(&client, scenario_item_b()).await);
    }

    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_create_item_missing_field_is_405() {
    let client = test_client();

    let resp = client
        .post("/item/")
        .body_json(&json!({ "user_id": "u1", "description": "no keywords" }))
        .send()
        .await;

    resp.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_create_item_empty_user_is_405() {
    let client = test_client();

    let resp = client
        .post("/item/")
        .body_json(&json!({ "user_id": "", "keywords": [], "description": "x" }))
        .send()
        .await;

    resp.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_create_item_invalid_json_is_405() {
    let client = test_client();

    let resp = client
        .post("/item/")
        .content_type("application/json")
        .body("{not json")
        .send()
        .await;

    resp.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_get_item_by_id() {
    let client = test_client();
    let id = create_item(&client, scenario_item_a()).await;

    let resp = client.get(format!("/item/{}/", id)).send().await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    let item = json.value().object();
    item.get("id").assert_i64(id);
    item.get("user_id").assert_string("u1");
}

#[tokio::test]
async fn test_get_missing_item_is_404() {
    let client = test_client();

    client.get("/item/42/").send().await.assert_status(StatusCode::NOT_FOUND);
    client.get("/item/abc/").send().await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_item() {
    let client = test_client();
    let id = create_item(&client, scenario_item_a()).await;

    client
        .delete(format!("/item/{}/", id))
        .send()
        .await
        .assert_status(StatusCode::NO_CONTENT);
    client
        .delete(format!("/item/{}/", id))
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
    client
        .get(format!("/item/{}/", id))
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_items_sorted_after_deletes() {
    let client = test_client();
    for _ in 0..5 {
        create_item(&client, scenario_item_b()).await;
    }
    client.delete("/item/2/").send().await.assert_status(StatusCode::NO_CONTENT);
    client.delete("/item/4/").send().await.assert_status(StatusCode::NO_CONTENT);
    create_item(&client, scenario_item_b()).await;

    assert_eq!(list_item_ids(&client, &[]).await, vec![1, 3, 5, 6]);
}

#[tokio::test]
async fn test_list_items_scenario() {
    let client = test_client();
    let a = create_item(&client, scenario_item_a()).await;
    let b = create_item(&client, scenario_item_b()).await;

    assert_eq!(list_item_ids(&client, &[]).await, vec![a, b]);
    assert_eq!(list_item_ids(&client, &[("user_id", "u1")]).await, vec![a]);
    assert_eq!(list_item_ids(&client, &[("keywords", "a,b")]).await, vec![a]);
    assert_eq!(list_item_ids(&client, &[("keywords", "a")]).await, vec![a, b]);
    assert_eq!(
        list_item_ids(&client, &[("lat", "10"), ("lon", "10"), ("radius", "1")]).await,
        vec![a]
    );
}

#[tokio::test]
async fn test_list_items_bounding_box_is_strict() {
    let client = test_client();
    let inside = create_item(
        &client,
        json!({ "user_id": "u1", "keywords": [], "description": "in", "lat": 10.5, "lon": 9.5 }),
    )
    .await;
    create_item(
        &client,
        json!({ "user_id": "u1", "keywords": [], "description": "edge", "lat": 11.0, "lon": 10.0 }),
    )
    .await;

    assert_eq!(
        list_item_ids(&client, &[("lat", "10"), ("lon", "10"), ("radius", "1")]).await,
        vec![inside]
    );
}

#[tokio::test]
async fn test_list_items_by_date_range() {
    let client = test_client();
    let id = create_item(&client, scenario_item_a()).await;

    assert_eq!(
        list_item_ids(&client, &[("date_from", "2000-01-01T00:00:00")]).await,
        vec![id]
    );
    assert!(list_item_ids(&client, &[("date_from", "2999-01-01T00:00:00")])
        .await
        .is_empty());
    assert_eq!(
        list_item_ids(&client, &[("date_to", "2000-01-01T00:00:00")]).await,
        vec![id]
    );
}

#[tokio::test]
async fn test_list_items_malformed_query_is_405() {
    let client = test_client();

    client
        .get("/items/")
        .query("lat", &"north")
        .send()
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    client
        .get("/items/")
        .query("date_from", &"2024-01-01")
        .send()
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let client = test_client();

    let resp = client
        .get("/items/")
        .header("Origin", "http://client.example.com")
        .send()
        .await;

    resp.assert_status_is_ok();
    assert!(resp.0.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_item_routes_match_with_and_without_trailing_slash() {
    let client = test_client();
    let id = create_item(&client, scenario_item_b()).await;

    client.get(format!("/item/{}/", id)).send().await.assert_status_is_ok();
    client.get(format!("/item/{}", id)).send().await.assert_status_is_ok();
    client.get("/items/").send().await.assert_status_is_ok();
    client.get("/items").send().await.assert_status_is_ok();

    client
        .post("/item")
        .body_json(&scenario_item_a())
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    assert_eq!(list_item_ids(&client, &[]).await, vec![id, id + 1]);
}

#[tokio::test]
async fn test_swagger_ui_is_served() {
    let client = test_client();

    client.get("/swagger/").send().await.assert_status_is_ok();
}
