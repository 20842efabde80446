//! Error types for the shopping-list client.
//!
//! # Design
//! Three outward-facing failure classes: a `Validation` error means a local
//! precondition failed and no network call was attempted; `Api` carries the
//! status and body detail of a non-2xx response; `Network` is a transport
//! failure where no response was obtained (produced by the host executing
//! the request, consumed by the controllers). `Serialize`/`Deserialize`
//! cover JSON conversion at the request/response boundary.
//!
//! Every error is terminal to its triggering operation; nothing retries.

use thiserror::Error;

/// Errors returned by `ListaClient` and the screen controllers.
#[derive(Debug, Error)]
pub enum Error {
    /// A local precondition failed; no network call was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {detail}")]
    Api { status: u16, detail: String },

    /// The request could not be executed; no response was obtained.
    #[error("network failure: {0}")]
    Network(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialize(String),
}
