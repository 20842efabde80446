use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Item};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_items_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/ListaCompras")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let app = app();
    for titulo in ["Maçã", "Pêra", "Uva"] {
        let resp = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/ListaCompras",
                &format!(r#"{{"titulo":"{titulo}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app.oneshot(get_request("/ListaCompras")).await.unwrap();
    let items: Vec<Item> = body_json(resp).await;
    let titles: Vec<&str> = items.iter().map(|i| i.titulo.as_str()).collect();
    assert_eq!(titles, ["Maçã", "Pêra", "Uva"]);
}

// --- create ---

#[tokio::test]
async fn create_item_returns_201_with_assigned_id() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/ListaCompras",
            r#"{"titulo":"Maçã","quantidade":"2","preco":"49.90"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let item: Item = body_json(resp).await;
    assert!(!item.id.is_empty());
    assert_eq!(item.titulo, "Maçã");
    assert_eq!(item.quantidade.as_deref(), Some("2"));
    assert_eq!(item.preco.as_deref(), Some("49.90"));
}

#[tokio::test]
async fn create_item_without_titulo_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/ListaCompras", r#"{"quantidade":"2"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_item_round_trip() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/ListaCompras", r#"{"titulo":"Maçã"}"#))
        .await
        .unwrap();
    let created: Item = body_json(resp).await;

    let resp = app
        .oneshot(get_request(&format!("/ListaCompras/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Item = body_json(resp).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.titulo, "Maçã");
}

#[tokio::test]
async fn get_unknown_item_returns_404() {
    let app = app();
    let resp = app
        .oneshot(get_request("/ListaCompras/nope"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- update ---

#[tokio::test]
async fn update_replaces_fields_wholesale() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/ListaCompras",
            r#"{"titulo":"Maçã","quantidade":"2","preco":"49.90"}"#,
        ))
        .await
        .unwrap();
    let created: Item = body_json(resp).await;

    // The update omits quantidade and preco; wholesale replacement drops
    // them rather than keeping the old values.
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/ListaCompras/{}", created.id),
            r#"{"titulo":"Pêra"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Item = body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.titulo, "Pêra");
    assert!(updated.quantidade.is_none());
    assert!(updated.preco.is_none());

    let resp = app
        .oneshot(get_request(&format!("/ListaCompras/{}", created.id)))
        .await
        .unwrap();
    let stored: Item = body_json(resp).await;
    assert_eq!(stored.titulo, "Pêra");
    assert!(stored.quantidade.is_none());
}

#[tokio::test]
async fn update_unknown_item_returns_404() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PUT",
            "/ListaCompras/nope",
            r#"{"titulo":"Pêra"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_returns_200_with_removed_item() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/ListaCompras", r#"{"titulo":"Maçã"}"#))
        .await
        .unwrap();
    let created: Item = body_json(resp).await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/ListaCompras/{}", created.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let removed: Item = body_json(resp).await;
    assert_eq!(removed.id, created.id);

    let resp = app.oneshot(get_request("/ListaCompras")).await.unwrap();
    let items: Vec<Item> = body_json(resp).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn delete_unknown_item_returns_404() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/ListaCompras/nope")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
