//! In-memory stand-in for the remote `/ListaCompras` collection resource.
//!
//! Mirrors the mockapi.io behavior the client was written against: the
//! server assigns string ids, create answers 201 with the stored record,
//! update replaces the record's fields wholesale (no partial merge), and
//! delete answers 200 with the removed record. Items are listed in
//! insertion order.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub titulo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantidade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preco: Option<String>,
}

/// Create/update payload. `titulo` is required; a body without it is
/// rejected by axum's JSON extractor with a 422.
#[derive(Deserialize)]
pub struct ItemDraft {
    pub titulo: String,
    #[serde(default)]
    pub quantidade: Option<String>,
    #[serde(default)]
    pub preco: Option<String>,
}

pub type Db = Arc<RwLock<Vec<Item>>>;

/// Default bind address, matching the `compras` CLI's default base URL.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Resolve the listen address for the standalone binary: a command-line
/// argument wins over the `COMPRAS_MOCK_ADDR` environment override, falling
/// back to the default the CLI points at.
pub fn resolve_addr(arg: Option<String>, env: Option<String>) -> String {
    arg.or(env).unwrap_or_else(|| DEFAULT_ADDR.to_string())
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/ListaCompras", get(list_items).post(create_item))
        .route(
            "/ListaCompras/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let items = db.read().await;
    Json(items.clone())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<ItemDraft>,
) -> (StatusCode, Json<Item>) {
    let item = Item {
        id: Uuid::new_v4().to_string(),
        titulo: input.titulo,
        quantidade: input.quantidade,
        preco: input.preco,
    };
    db.write().await.push(item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn get_item(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Item>, StatusCode> {
    let items = db.read().await;
    items
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<ItemDraft>,
) -> Result<Json<Item>, StatusCode> {
    let mut items = db.write().await;
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    // Wholesale replacement: fields absent from the payload are dropped,
    // not carried over.
    item.titulo = input.titulo;
    item.quantidade = input.quantidade;
    item.preco = input.preco;
    Ok(Json(item.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Item>, StatusCode> {
    let mut items = db.write().await;
    let position = items
        .iter()
        .position(|item| item.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(items.remove(position)))
}
