//! ureq executor for core-built requests.
//!
//! The core builds `HttpRequest` values and never touches the network; this
//! is the host side of that split. ureq's status-code-as-error behavior is
//! disabled so 4xx/5xx responses come back as data and the core keeps
//! ownership of status interpretation. Transport failures (no response
//! obtained) map to `Error::Network`.

use compras_core::{Error, HttpMethod, HttpRequest, HttpResponse};
use tracing::{debug, warn};

/// Executes core-built requests. Implemented by the ureq `Transport` and,
/// for tests, by any closure with the same shape, so the screens can be
/// driven without a live server.
pub trait Execute {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, Error>;
}

impl<F> Execute for F
where
    F: Fn(HttpRequest) -> Result<HttpResponse, Error>,
{
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, Error> {
        self(req)
    }
}

pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Execute for Transport {
    /// Execute a request and hand the response back as plain data.
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, Error> {
        debug!(method = ?req.method, path = %req.path, "executing request");
        let HttpRequest { method, path, body, .. } = req;

        let result = match (method, body) {
            (HttpMethod::Get, _) => self.agent.get(&path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&path).send_empty(),
        };

        let mut response = result.map_err(|e| {
            warn!(error = %e, "transport failure");
            Error::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        debug!(status, "response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
