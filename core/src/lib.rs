//! Client core for the Lista de Compras shopping-list app.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ListaClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - The screen state lives in two controllers: `FormController` (register /
//!   edit an item) and `ListController` (browse, refresh, delete with
//!   confirmation). Controllers own their busy flags and never perform I/O
//!   themselves; they hand requests to the host and consume its responses.
//! - `Navigator` models the route stack between the screens, including the
//!   list-to-form edit payload.
//! - Wire field names are the canonical Portuguese contract of the remote
//!   resource (`titulo`, `quantidade`, `preco`); Rust identifiers stay
//!   English via serde renames.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod nav;
pub mod types;

pub use client::ListaClient;
pub use error::Error;
pub use form::FormController;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::ListController;
pub use nav::{Navigator, Route};
pub use types::{Item, ItemDraft, ItemId};
