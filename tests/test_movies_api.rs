//! End-to-end tests for the movie routes against the seeded in-memory catalog.

mod common;

use common::{ids, titles, TestApp};
use serde_json::{json, Value};

#[tokio::test]
async fn test_list_movies_in_seed_order() {
    let app = TestApp::spawn(false).await;
    let (status, body) = app.get_json("/movies").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], 200);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
    assert_eq!(body["data"][1]["rating"].as_f64(), Some(7.8));
}

#[tokio::test]
async fn test_list_movies_sorted() {
    let app = TestApp::spawn(false).await;

    let (_, by_title) = app.get_json("/movies?sort=title").await;
    assert_eq!(
        titles(&by_title),
        vec!["Avatar", "Brazil", "Jaws", "الإرهاب والكباب"]
    );

    let (_, by_rating) = app.get_json("/movies?sort=rating").await;
    assert_eq!(ids(&by_rating), vec![4, 2, 1, 3]);

    let (_, by_year) = app.get_json("/movies?sort=year").await;
    assert_eq!(ids(&by_year), vec![1, 3, 4, 2]);

    let (status, unknown) = app.get_json("/movies?sort=director").await;
    assert_eq!(status, 200);
    assert_eq!(ids(&unknown), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_repeated_sort_param_keeps_current_order() {
    let app = TestApp::spawn(false).await;
    let (status, body) = app.get_json("/movies?sort=title&sort=year").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], 200);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_dedicated_orderings() {
    let app = TestApp::spawn(false).await;

    let (_, by_rating) = app.get_json("/movies/read/by-rating").await;
    assert_eq!(
        titles(&by_rating),
        vec!["Brazil", "Jaws", "Avatar", "الإرهاب والكباب"]
    );

    let (_, by_date) = app.get_json("/movies/read/by-date").await;
    assert_eq!(ids(&by_date), vec![1, 3, 4, 2]);

    let (_, by_title) = app.get_json("/movies/read/by-title").await;
    assert_eq!(ids(&by_title), vec![2, 3, 1, 4]);
}

#[tokio::test]
async fn test_get_movie_by_id() {
    let app = TestApp::spawn(false).await;

    let (status, body) = app.get_json("/movies/3").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["title"], "Brazil");

    let (status, body) = app.get_json("/movies/abc").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "The movie with ID abc does not exist");

    let (status, _) = app.get_json("/movies/99").await;
    assert_eq!(status, 404);

    let (status, body) = app.get_json("/movies/0x4").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["id"], 4);
}

#[tokio::test]
async fn test_create_assigns_next_id() {
    let app = TestApp::spawn(false).await;

    let resp = app
        .client
        .post(app.url("/movies"))
        .json(&json!({ "title": "Heat", "year": "1995", "rating": "8.3" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], 201);
    assert_eq!(body["data"]["id"], 5);
    assert_eq!(body["data"]["year"], 1995);
    assert_eq!(body["data"]["rating"].as_f64(), Some(8.3));

    let (status, body) = app.get_json("/movies/5").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["title"], "Heat");
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let app = TestApp::spawn(false).await;

    for payload in [
        json!({ "year": 1995, "rating": 8.3 }),
        json!({ "title": "Heat", "rating": 8.3 }),
        json!({ "title": "Heat", "year": 1995 }),
        json!({ "title": "", "year": 1995, "rating": 8.3 }),
        json!({ "title": "Heat", "year": 0, "rating": 8.3 }),
    ] {
        let resp = app
            .client
            .post(app.url("/movies"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 400, "payload {}", payload);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], true);
        assert_eq!(
            body["message"],
            "Please provide title, year, and rating for the movie."
        );
    }

    let (_, body) = app.get_json("/movies").await;
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::spawn(false).await;
    let resp = app
        .client
        .post(app.url("/movies"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_body_without_json_content_type_reads_as_empty() {
    let app = TestApp::spawn(false).await;

    let resp = app.client.put(app.url("/movies/1")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
    assert_eq!(body["data"][0]["title"], "Jaws");

    let resp = app
        .client
        .post(app.url("/movies"))
        .body(r#"{"title": "Heat", "year": 1995, "rating": 8.3}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Please provide title, year, and rating for the movie."
    );

    let (_, body) = app.get_json("/movies").await;
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let app = TestApp::spawn(false).await;

    let resp = app
        .client
        .put(app.url("/movies/1"))
        .json(&json!({ "title": "Jaws 2", "year": 1978 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(body["data"][0]["title"], "Jaws 2");
    assert_eq!(body["data"][0]["year"], 1975);
    assert_eq!(body["data"][0]["rating"].as_f64(), Some(8.0));

    let resp = app
        .client
        .put(app.url("/movies/2"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let (_, body) = app.get_json("/movies/2").await;
    assert_eq!(body["data"]["title"], "Avatar");
    assert_eq!(body["data"]["rating"].as_f64(), Some(7.8));

    let resp = app
        .client
        .put(app.url("/movies/2"))
        .json(&json!({ "rating": "9.1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let (_, body) = app.get_json("/movies/2").await;
    assert_eq!(body["data"]["rating"].as_f64(), Some(9.1));
}

#[tokio::test]
async fn test_update_errors() {
    let app = TestApp::spawn(false).await;

    let resp = app
        .client
        .put(app.url("/movies/42"))
        .json(&json!({ "title": "Nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "The movie with ID 42 does not exist");

    let resp = app
        .client
        .put(app.url("/movies/1"))
        .json(&json!({ "rating": "excellent" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn test_delete_then_create_reuses_max_id() {
    let app = TestApp::spawn(false).await;

    let resp = app.client.delete(app.url("/movies/4")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(ids(&body), vec![1, 2, 3]);

    let resp = app
        .client
        .post(app.url("/movies"))
        .json(&json!({ "title": "Ran", "year": 1985, "rating": 8.2 }))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["id"], 4);
}

#[tokio::test]
async fn test_delete_unknown_movie() {
    let app = TestApp::spawn(false).await;

    let resp = app.client.delete(app.url("/movies/7")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], true);

    let (_, body) = app.get_json("/movies").await;
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
}
