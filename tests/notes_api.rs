//! End-to-end tests against a running notes server.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_empty_list() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.get(server.notes_url()).send().await.expect("Server unreachable");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), json!([]));
}

#[tokio::test]
async fn test_groceries_lifecycle() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .post(format!("{}/", server.notes_url()))
        .json(&json!({"title": "Groceries", "list": ["milk", "eggs"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(
        created,
        json!({"id": id, "title": "Groceries", "list": ["milk", "eggs"]})
    );

    let res = client.get(server.note_url(&id)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), created);

    let res = client.delete(server.note_url(&id)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!("Note was successfully deleted")
    );

    let res = client.get(server.note_url(&id)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({"Error": format!("No note found with {}", id)})
    );
    assert!(server.store.is_empty());
}

#[tokio::test]
async fn test_replace_returns_no_content() {
    let server = common::start_server().await;
    let client = common::client();

    let mut ids = Vec::new();
    for title in ["first", "second"] {
        let res = client
            .post(server.notes_url())
            .json(&json!({"title": title, "list": ["a"]}))
            .send()
            .await
            .unwrap();
        let note: Value = res.json().await.unwrap();
        ids.push(note["id"].as_str().unwrap().to_string());
    }

    let res = client
        .put(server.note_url(&ids[1]))
        .json(&json!({"title": "renamed", "notes": ["b", "c"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    let notes: Value = client
        .get(server.notes_url())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        notes,
        json!([
            {"id": ids[0], "title": "first", "list": ["a"]},
            {"id": ids[1], "title": "renamed", "list": ["b", "c"]},
        ])
    );
}

#[tokio::test]
async fn test_invalid_create_is_rejected() {
    let server = common::start_server().await;
    let client = common::client();

    for body in [
        json!({"list": ["x"]}),
        json!({"title": "no items"}),
        json!({"title": "empty", "list": []}),
        json!({"title": "", "list": ["x"]}),
    ] {
        let res = client.post(server.notes_url()).json(&body).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
        assert_eq!(
            res.json::<Value>().await.unwrap(),
            json!("Expected format: { title: <String>, list: <StringArray> }")
        );
    }

    let res = client
        .post(server.notes_url())
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(server.store.len(), 0);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let server = common::start_server().await;
    let client = common::client();

    client
        .post(server.notes_url())
        .json(&json!({"title": "t", "list": ["x"]}))
        .send()
        .await
        .unwrap();

    let expected = json!({"Error": "No note found with ghost"});
    let url = server.note_url("ghost");

    let res = client.get(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), expected);

    let res = client
        .put(&url)
        .json(&json!({"title": "t", "notes": ["x"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), expected);

    let res = client.delete(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), expected);

    assert_eq!(server.store.len(), 1);
}

#[tokio::test]
async fn test_responses_carry_request_id_and_cors() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .get(server.notes_url())
        .header("origin", "http://example.com")
        .send()
        .await
        .unwrap();
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let res = client
        .get(server.url("/health"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("trace-me")
    );
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({"status": "ok", "notes": 0})
    );
}
