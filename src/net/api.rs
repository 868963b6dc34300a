//! REST API client for the archive backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! `ApiError::Unavailable`, since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! page behavior without crashing hydration. Response-shape quirks are
//! absorbed by the decoding helpers in `net::types`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    ApiEnvelope, Department, DocumentDetail, DocumentQuery, DocumentSummary, LoginRequest,
    LoginResponse, RegisterRequest, RoleStats, Suggestion, decode, decode_list, decode_user,
};
use crate::state::role::Role;
use crate::state::session::UserIdentity;

/// HTTP verbs used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
}

/// Handle for calling the archive API, optionally with a bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Same client, authenticating with `token`.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    // =========================================================
    // Auth
    // =========================================================

    /// Exchange credentials for an identity and token via `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` for bad credentials or an unsupported account role,
    /// and transport/decode errors otherwise.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self.request_json(Verb::Post, "/login", Some(&body)).await?;
        login_response_from(value)
    }

    /// Create an account via `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` with the server's validation message on failure.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self.request_json(Verb::Post, "/register", Some(&body)).await?;
        decode::<ApiEnvelope<serde_json::Value>>(value)?.into_success()?;
        Ok(())
    }

    /// Revoke the current token via `POST /logout`.
    ///
    /// # Errors
    ///
    /// Returns transport errors; callers usually ignore them and clear the
    /// local session anyway.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.request_json(Verb::Post, "/logout", Some(&serde_json::json!({})))
            .await
            .map(|_| ())
    }

    /// Fetch the user the token belongs to via `GET /user`.
    ///
    /// # Errors
    ///
    /// Returns `Status { 401, .. }` when the token is no longer valid.
    pub async fn current_user(&self) -> Result<UserIdentity, ApiError> {
        let value = self.request_json(Verb::Get, "/user", None).await?;
        UserIdentity::try_from(decode_user(value)?)
    }

    /// Departments offered on the signup form.
    ///
    /// # Errors
    ///
    /// Returns transport/decode errors.
    pub async fn departments(&self) -> Result<Vec<Department>, ApiError> {
        let value = self.request_json(Verb::Get, "/departments", None).await?;
        decode_list(value, "departments")
    }

    // =========================================================
    // Lists and detail
    // =========================================================

    /// Search approved documents.
    ///
    /// # Errors
    ///
    /// Returns transport/decode errors.
    pub async fn search_documents(
        &self,
        query: &DocumentQuery,
    ) -> Result<Vec<DocumentSummary>, ApiError> {
        let value = self
            .request_json(Verb::Get, &search_documents_endpoint(query), None)
            .await?;
        decode_list(value, "documents")
    }

    /// Recently added documents for the student dashboard.
    ///
    /// # Errors
    ///
    /// Returns transport/decode errors.
    pub async fn recent_documents(&self) -> Result<Vec<DocumentSummary>, ApiError> {
        let value = self
            .request_json(Verb::Get, "/student/recent-documents", None)
            .await?;
        decode_list(value, "documents")
    }

    /// Personalized document suggestions.
    ///
    /// # Errors
    ///
    /// Returns transport/decode errors.
    pub async fn suggestions(&self) -> Result<Vec<Suggestion>, ApiError> {
        let value = self
            .request_json(Verb::Get, "/student/suggestions", None)
            .await?;
        decode_list(value, "suggestions")
    }

    /// Dashboard figures for `role`.
    ///
    /// # Errors
    ///
    /// Returns transport errors and `Rejected` for `success: false`.
    pub async fn role_stats(&self, role: Role) -> Result<RoleStats, ApiError> {
        let value = self
            .request_json(Verb::Get, &role_stats_endpoint(role), None)
            .await?;
        stats_from(value)
    }

    /// Full record of one document.
    ///
    /// # Errors
    ///
    /// Returns transport/decode errors.
    pub async fn document(&self, id: u64) -> Result<DocumentDetail, ApiError> {
        let value = self
            .request_json(Verb::Get, &format!("/documents/{id}"), None)
            .await?;
        if value.get("data").is_some() || value.get("success").is_some() {
            return decode::<ApiEnvelope<DocumentDetail>>(value)?.into_data();
        }
        decode(value)
    }

    // =========================================================
    // Files
    // =========================================================

    /// Download a document to the user's machine and record the download.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` without a token and transport errors if the
    /// file cannot be fetched.
    pub async fn download_document(&self, id: u64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let file = self
                .fetch_file(&format!("/documents/{id}/download"))
                .await?;
            let filename = filename_from_disposition(file.disposition.as_deref(), id);
            crate::util::download::save_bytes(&file.bytes, file.content_type.as_deref(), &filename)
                .map_err(ApiError::Network)?;
            self.track("/track/download", id).await;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// Record a view and open the document in a new tab.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` without a token and transport errors if the
    /// file cannot be fetched.
    pub async fn preview_document(&self, id: u64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.track("/track/view", id).await;
            let file = self.fetch_file(&format!("/documents/{id}/preview")).await?;
            crate::util::download::open_bytes(&file.bytes, file.content_type.as_deref())
                .map_err(ApiError::Network)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    // =========================================================
    // Transport
    // =========================================================

    async fn request_json(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method, RequestBuilder};

            let method = match verb {
                Verb::Get => Method::GET,
                Verb::Post => Method::POST,
            };
            let mut builder = RequestBuilder::new(&self.url(path))
                .method(method)
                .header("Accept", "application/json");
            if let Some(token) = &self.token {
                builder = builder.header("Authorization", &bearer(token));
            }
            let request = match body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| {
                log::warn!("{verb:?} {path} failed: {e}");
                ApiError::Network(e.to_string())
            })?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let value = parse_body(&text);
            if !resp.ok() {
                log::warn!("{verb:?} {path} returned {status}");
                return Err(status_error(status, &value));
            }
            Ok(value)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn fetch_file(&self, path: &str) -> Result<FetchedFile, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthenticated)?;
        let resp = gloo_net::http::Request::get(&self.url(path))
            .header("Authorization", &bearer(token))
            .header("Accept", "*/*")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(status_error(status, &parse_body(&text)));
        }
        let headers = resp.headers();
        let disposition = headers.get("content-disposition");
        let content_type = headers.get("content-type");
        let bytes = resp
            .binary()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(FetchedFile {
            bytes,
            content_type,
            disposition,
        })
    }

    /// Best-effort analytics ping; failures are only logged.
    #[cfg(feature = "hydrate")]
    async fn track(&self, path: &str, id: u64) {
        let body = serde_json::json!({ "document_id": id });
        if let Err(e) = self.request_json(Verb::Post, path, Some(&body)).await {
            log::warn!("tracking {path} for document {id} failed: {e}");
        }
    }
}

#[cfg(feature = "hydrate")]
struct FetchedFile {
    bytes: Vec<u8>,
    content_type: Option<String>,
    disposition: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Parse a response body as JSON, keeping non-JSON text as a string value.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_owned()))
}

/// Error for a non-2xx response, preferring the server's `message`.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &serde_json::Value) -> ApiError {
    let message = body
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| format!("HTTP {status}"), str::to_owned);
    ApiError::Status { status, message }
}

/// File name from a `Content-Disposition` header, or `document-{id}`.
#[cfg(any(test, feature = "hydrate"))]
fn filename_from_disposition(header: Option<&str>, id: u64) -> String {
    header
        .and_then(|h| {
            h.split(';').map(str::trim).find_map(|part| {
                part.strip_prefix("filename=")
                    .map(|name| name.trim_matches('"').to_owned())
            })
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("document-{id}"))
}

fn search_documents_endpoint(query: &DocumentQuery) -> String {
    let params = query.to_query_string();
    if params.is_empty() {
        "/student/search-documents".to_owned()
    } else {
        format!("/student/search-documents?{params}")
    }
}

fn role_stats_endpoint(role: Role) -> String {
    format!("/{}/stats", role.section())
}

/// Build a login result from the `/login` response body.
fn login_response_from(value: serde_json::Value) -> Result<LoginResponse, ApiError> {
    let envelope = decode::<ApiEnvelope<serde_json::Value>>(value)?.into_success()?;
    let token = envelope
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Decode("missing token".to_owned()))?;
    let record = envelope
        .user
        .ok_or_else(|| ApiError::Decode("missing user".to_owned()))?;
    if let Some(role) = record.role_name() {
        if role.parse::<Role>().is_err() {
            return Err(ApiError::Rejected(format!("unsupported account role: {role}")));
        }
    }
    let identity = UserIdentity::try_from(record)?;
    Ok(LoginResponse { identity, token })
}

/// Stats payload from either `{ data: {..} }` or a bare object.
fn stats_from(value: serde_json::Value) -> Result<RoleStats, ApiError> {
    if value.get("data").is_some() || value.get("success").is_some() {
        let data = decode::<ApiEnvelope<serde_json::Value>>(value)?.into_data()?;
        return Ok(RoleStats::from_value(&data));
    }
    Ok(RoleStats::from_value(&value))
}
