//! Routing, CORS headers and static files.

use reqwest::Method;
use sentence_clipboard::http::{COLLECTION_METHODS, ITEM_METHODS};
use tempfile::TempDir;

use crate::support::{create_content, list, start_server, write_static};

fn assert_api_headers(resp: &reqwest::Response, methods: &str) {
    let headers = resp.headers();
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], methods);
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

#[tokio::test]
async fn options_returns_cors_headers_without_mutating() {
    let dir = TempDir::new().unwrap();
    let base = start_server(dir.path()).await;
    let client = reqwest::Client::new();
    let before = list(&client, &base, None).await;

    let resp = client
        .request(Method::OPTIONS, format!("{base}/api/sentences"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_api_headers(&resp, COLLECTION_METHODS);
    assert!(resp.text().await.unwrap().is_empty());

    for path in ["1", "1/copy", "not-a-number", "1/anything"] {
        let resp = client
            .request(Method::OPTIONS, format!("{base}/api/sentences/{path}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "OPTIONS {path}");
        assert_api_headers(&resp, ITEM_METHODS);
    }

    assert_eq!(list(&client, &base, None).await, before);
}

#[tokio::test]
async fn api_responses_carry_cors_headers() {
    let dir = TempDir::new().unwrap();
    let base = start_server(dir.path()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/sentences"))
        .send()
        .await
        .unwrap();
    assert_api_headers(&resp, COLLECTION_METHODS);

    let resp = client
        .post(format!("{base}/api/sentences/1/copy"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_api_headers(&resp, ITEM_METHODS);

    let resp = client
        .delete(format!("{base}/api/sentences/12345"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert_api_headers(&resp, ITEM_METHODS);
}

#[tokio::test]
async fn wrong_method_is_405() {
    let dir = TempDir::new().unwrap();
    let base = start_server(dir.path()).await;
    let client = reqwest::Client::new();

    let cases = [
        (Method::DELETE, "/api/sentences"),
        (Method::PUT, "/api/sentences"),
        (Method::GET, "/api/sentences/1"),
        (Method::POST, "/api/sentences/1"),
        (Method::PATCH, "/api/sentences/1"),
        (Method::GET, "/api/sentences/1/copy"),
        (Method::PUT, "/api/sentences/1/copy"),
        (Method::POST, "/api/sentences/1/paste"),
    ];
    for (method, path) in cases {
        let resp = client
            .request(method.clone(), format!("{base}{path}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 405, "{method} {path}");
    }

    let resp = client
        .delete(format!("{base}/api/sentences"))
        .send()
        .await
        .unwrap();
    assert_api_headers(&resp, COLLECTION_METHODS);
    assert_eq!(resp.text().await.unwrap(), "Method not allowed");
}

#[tokio::test]
async fn malformed_id_is_400() {
    let dir = TempDir::new().unwrap();
    let base = start_server(dir.path()).await;
    let client = reqwest::Client::new();

    for (method, path) in [
        (Method::DELETE, "/api/sentences/abc"),
        (Method::PUT, "/api/sentences/1.5"),
        (Method::POST, "/api/sentences/abc/copy"),
        (Method::GET, "/api/sentences/abc"),
    ] {
        let resp = client
            .request(method.clone(), format!("{base}{path}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "{method} {path}");
        assert_eq!(resp.text().await.unwrap(), "无效的ID");
    }
}

#[tokio::test]
async fn bare_item_prefix_is_an_item_path() {
    let dir = TempDir::new().unwrap();
    let base = start_server(dir.path()).await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/sentences/");

    let resp = client.request(Method::OPTIONS, &url).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_api_headers(&resp, ITEM_METHODS);

    for method in [Method::DELETE, Method::PUT] {
        let resp = client
            .request(method.clone(), &url)
            .body(r#"{"content":"x"}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "{method}");
        assert_api_headers(&resp, ITEM_METHODS);
        assert_eq!(resp.text().await.unwrap(), "无效的ID");
    }
}

#[tokio::test]
async fn trailing_slash_after_id_names_the_sentence() {
    let dir = TempDir::new().unwrap();
    let base = start_server(dir.path()).await;
    let client = reqwest::Client::new();
    let s = create_content(&client, &base, "slash").await;

    let resp = client
        .put(format!("{base}/api/sentences/{}/", s.id))
        .json(&serde_json::json!({ "group": "g" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(list(&client, &base, Some("g")).await[0].id, s.id);

    let resp = client
        .delete(format!("{base}/api/sentences/{}/", s.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(list(&client, &base, None).await.iter().all(|x| x.id != s.id));

    let resp = client
        .post(format!("{base}/api/sentences/1/"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);
}

#[tokio::test]
async fn unknown_paths_are_404() {
    let dir = TempDir::new().unwrap();
    let base = start_server(dir.path()).await;
    let client = reqwest::Client::new();

    for path in ["/nope", "/api", "/api/other", "/API/sentences"] {
        let resp = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(resp.status(), 404, "{path}");
    }
}

#[tokio::test]
async fn serves_ui_and_static_files() {
    let dir = TempDir::new().unwrap();
    write_static(dir.path(), "index.html", "<h1>clipboard</h1>");
    write_static(dir.path(), "utils.js", "console.log('hi');");
    let base = start_server(dir.path()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "<h1>clipboard</h1>");

    let resp = client
        .get(format!("{base}/static/utils.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "console.log('hi');");

    let resp = client
        .get(format!("{base}/static/missing.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
