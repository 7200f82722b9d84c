//! # genie-web
//!
//! The local browser front end: a description form, a results page, a demo
//! shortcut, and a PDF download of the generated stories.
//!
//! Requests are served one at a time by a blocking `tiny_http` loop. Routing
//! is a pure function over [`HttpRequest`] and [`Session`] (see [`routes`]),
//! and the server only translates between `tiny_http` and those types.

pub mod error;
pub mod form;
pub mod html;
pub mod routes;
pub mod session;

use std::io::Read;
use std::net::SocketAddr;

use genie_config::ServerConfig;

pub use error::WebError;
pub use routes::{App, HttpRequest, HttpResponse, Method, route};
pub use session::{COOKIE_NAME, Session, SessionStore};

/// A bound, not yet running, web server.
pub struct WebServer {
    server: tiny_http::Server,
    addr: SocketAddr,
    app: App,
}

impl WebServer {
    /// Bind the listener described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Bind`] if the address cannot be bound.
    pub fn bind(config: &ServerConfig) -> Result<Self, WebError> {
        let bind_addr = config.bind_addr();
        let server = tiny_http::Server::http(&bind_addr).map_err(|e| WebError::Bind {
            addr: bind_addr.clone(),
            reason: e.to_string(),
        })?;
        let addr = server.server_addr().to_ip().ok_or_else(|| WebError::Bind {
            addr: bind_addr.clone(),
            reason: "listener has no IP address".into(),
        })?;

        tracing::info!(%addr, "web server bound");
        Ok(Self {
            server,
            addr,
            app: App::new(config.max_sessions, config.max_body_bytes),
        })
    }

    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL of the form page.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Serve requests until the listener fails. Blocks the calling thread.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Io`] if accepting a connection fails.
    pub fn run(mut self) -> Result<(), WebError> {
        loop {
            let request = self.server.recv()?;
            self.serve_one(request);
        }
    }

    fn serve_one(&mut self, mut request: tiny_http::Request) {
        let method = match request.method() {
            tiny_http::Method::Get => Method::Get,
            tiny_http::Method::Post => Method::Post,
            _ => Method::Other,
        };
        let url = request.url().to_string();
        let cookie = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Cookie"))
            .map(|h| h.value.as_str().to_string());

        let limit = self.app.max_body_bytes();
        let response = match request.body_length() {
            Some(length) if length > limit => HttpResponse::payload_too_large(),
            _ => match read_body(request.as_reader(), limit) {
                Ok(body) => self.app.handle(&HttpRequest {
                    method,
                    url: url.clone(),
                    cookie,
                    body,
                }),
                Err(error) => {
                    tracing::warn!(%error, %url, "failed to read request body");
                    HttpResponse::status(400, "The request body could not be read.")
                }
            },
        };

        tracing::debug!(?method, %url, status = response.status, "request served");
        if let Err(error) = request.respond(into_tiny(response)) {
            tracing::warn!(%error, %url, "failed to send response");
        }
    }
}

/// Read at most `limit + 1` bytes so oversized chunked bodies are detected
/// without buffering them whole.
fn read_body(reader: &mut dyn Read, limit: usize) -> std::io::Result<Vec<u8>> {
    let mut body = Vec::new();
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    reader.take(cap).read_to_end(&mut body)?;
    Ok(body)
}

fn into_tiny(response: HttpResponse) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let mut tiny = tiny_http::Response::from_data(response.body).with_status_code(response.status);
    for (name, value) in &response.headers {
        match tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(header) => tiny.add_header(header),
            Err(()) => tracing::warn!(%name, "dropping invalid response header"),
        }
    }
    tiny
}
