//! Stateless HTTP request builder and response parser for the
//! `/ListaCompras` collection resource.
//!
//! # Design
//! `ListaClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! Status handling: any 2xx counts as success (the remote mock store has
//! answered creates with both 200 and 201, and deletes with 200 plus the
//! removed record). A 2xx list body that is valid JSON but not an array is
//! treated as an empty collection rather than an error, so a degraded
//! server never crashes the list screen.

use serde_json::Value;

use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemDraft, ItemId};

/// How much response-body detail an `Error::Api` carries.
const DETAIL_LIMIT: usize = 100;

/// Synchronous, stateless client for the shopping-list API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ListaClient {
    base_url: String,
}

impl ListaClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_path(&self) -> String {
        format!("{}/ListaCompras", self.base_url)
    }

    fn item_path(&self, id: &ItemId) -> String {
        format!("{}/ListaCompras/{id}", self.base_url)
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_path(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_item(&self, draft: &ItemDraft) -> Result<HttpRequest, Error> {
        let body = serde_json::to_string(draft).map_err(|e| Error::Serialize(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_path(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_item(&self, id: &ItemId, draft: &ItemDraft) -> Result<HttpRequest, Error> {
        let body = serde_json::to_string(draft).map_err(|e| Error::Serialize(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_path(id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_item(&self, id: &ItemId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Parse the collection response. A non-array 2xx body yields an empty
    /// list so rendering never observes a malformed collection.
    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, Error> {
        check_success(&response)?;
        let value: Value =
            serde_json::from_str(&response.body).map_err(|e| Error::Deserialize(e.to_string()))?;
        match value {
            Value::Array(_) => {
                serde_json::from_value(value).map_err(|e| Error::Deserialize(e.to_string()))
            }
            _ => Ok(Vec::new()),
        }
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, Error> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| Error::Deserialize(e.to_string()))
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, Error> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| Error::Deserialize(e.to_string()))
    }

    /// Delete success needs no body; any 2xx counts.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), Error> {
        check_success(&response)
    }
}

/// Map a non-2xx status to `Error::Api`, truncating the body detail.
fn check_success(response: &HttpResponse) -> Result<(), Error> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(Error::Api {
        status: response.status,
        detail: response.body.chars().take(DETAIL_LIMIT).collect(),
    })
}
