//! Request routing.
//!
//! [`route`] maps one request plus the caller's [`Session`] to a response
//! without touching sockets, so every route is unit-testable. [`App`] adds the
//! cookie and body-size handling around it.

use chrono::Utc;
use genie_core::{AnalysisRecord, StoredAnalysis, demo::SAMPLE_DESCRIPTION};
use genie_export::{DEFAULT_FILE_NAME, ExportFormat, render_pdf};

use crate::form;
use crate::html;
use crate::session::{Session, SessionStore, cookie_value, set_cookie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other,
}

/// A decoded request, independent of the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Request target including any query string.
    pub url: String,
    /// Raw `Cookie` header value.
    pub cookie: Option<String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    #[must_use]
    pub fn get(url: &str) -> Self {
        Self {
            method: Method::Get,
            url: url.to_string(),
            cookie: None,
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn post_form(url: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            method: Method::Post,
            url: url.to_string(),
            cookie: None,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    /// Path without the query string.
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or("/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn html(status: u16, page: String) -> Self {
        Self {
            status,
            headers: vec![(
                "Content-Type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body: page.into_bytes(),
        }
    }

    /// `302 Found` to `location`.
    #[must_use]
    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            headers: vec![("Location".to_string(), location.to_string())],
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn attachment(bytes: Vec<u8>, content_type: &str, file_name: &str) -> Self {
        Self {
            status: 200,
            headers: vec![
                ("Content-Type".to_string(), content_type.to_string()),
                (
                    "Content-Disposition".to_string(),
                    format!("attachment; filename=\"{file_name}\""),
                ),
            ],
            body: bytes,
        }
    }

    #[must_use]
    pub fn status(status: u16, message: &str) -> Self {
        Self::html(status, html::status_page(status, message))
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::status(404, "Page not found.")
    }

    #[must_use]
    pub fn payload_too_large() -> Self {
        Self::status(413, "The submitted description is too large.")
    }

    fn method_not_allowed(allow: &str) -> Self {
        let mut response = Self::status(405, "Method not allowed.");
        response
            .headers
            .push(("Allow".to_string(), allow.to_string()));
        response
    }

    /// First header value named `name`, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Route one request against the caller's session.
#[must_use]
pub fn route(request: &HttpRequest, session: &mut Session) -> HttpResponse {
    match (request.path(), request.method) {
        ("/", Method::Get) => index(session),
        ("/analyze", Method::Post) => analyze(request, session),
        ("/results", Method::Get) => results(session),
        ("/demo", Method::Get) => demo(session),
        ("/export_stories_pdf", Method::Get) => export_stories_pdf(session),
        ("/" | "/results" | "/demo" | "/export_stories_pdf", _) => {
            HttpResponse::method_not_allowed("GET")
        }
        ("/analyze", _) => HttpResponse::method_not_allowed("POST"),
        _ => HttpResponse::not_found(),
    }
}

fn index(session: &Session) -> HttpResponse {
    let prefill = session.demo_description.as_deref().unwrap_or_default();
    HttpResponse::html(200, html::index_page(prefill))
}

fn analyze(request: &HttpRequest, session: &mut Session) -> HttpResponse {
    let description = form::field(&request.body, "description").unwrap_or_default();
    let description = description.trim();
    if description.is_empty() {
        return HttpResponse::redirect("/");
    }

    let record = AnalysisRecord::analyze(description);
    tracing::debug!(
        stories = record.stories.len(),
        entities = record.entities.len(),
        risks = record.risks.len(),
        "analysis stored in session"
    );
    session.analysis = Some(StoredAnalysis::new(record, Utc::now()));
    session.demo_description = None;
    HttpResponse::redirect("/results")
}

fn results(session: &Session) -> HttpResponse {
    match &session.analysis {
        Some(stored) => HttpResponse::html(200, html::results_page(&stored.record)),
        None => HttpResponse::redirect("/"),
    }
}

fn demo(session: &mut Session) -> HttpResponse {
    session.demo_description = Some(SAMPLE_DESCRIPTION.to_string());
    HttpResponse::redirect("/")
}

fn export_stories_pdf(session: &Session) -> HttpResponse {
    let Some(stored) = session
        .analysis
        .as_ref()
        .filter(|s| !s.record.stories.is_empty())
    else {
        return HttpResponse::redirect("/");
    };

    match render_pdf(&stored.record.stories) {
        Ok(bytes) => HttpResponse::attachment(
            bytes,
            ExportFormat::Pdf.content_type(),
            DEFAULT_FILE_NAME,
        ),
        Err(error) => {
            tracing::warn!(%error, "pdf export failed");
            HttpResponse::status(500, "The PDF could not be generated.")
        }
    }
}

/// Session-aware request handler shared by the server and tests.
#[derive(Debug)]
pub struct App {
    sessions: SessionStore,
    max_body_bytes: usize,
}

impl App {
    #[must_use]
    pub fn new(max_sessions: usize, max_body_bytes: usize) -> Self {
        Self {
            sessions: SessionStore::new(max_sessions),
            max_body_bytes,
        }
    }

    #[must_use]
    pub const fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Resolve the session from the cookie, route, and attach `Set-Cookie`
    /// for new sessions.
    pub fn handle(&mut self, request: &HttpRequest) -> HttpResponse {
        if request.body.len() > self.max_body_bytes {
            return HttpResponse::payload_too_large();
        }

        let requested = request.cookie.as_deref().and_then(cookie_value);
        let checkout = match self.sessions.checkout(requested) {
            Ok(checkout) => checkout,
            Err(error) => {
                tracing::warn!(%error, "could not create session");
                return HttpResponse::status(500, "Session could not be created.");
            }
        };

        let mut response = route(request, checkout.session);
        if checkout.is_new {
            response
                .headers
                .push(("Set-Cookie".to_string(), set_cookie(&checkout.id)));
        }
        response
    }
}
