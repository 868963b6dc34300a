//! Request and response shapes of the archive REST API.
//!
//! DESIGN
//! ======
//! The backend is not uniform: most endpoints wrap payloads in a
//! `{ success, message, data, user, token }` envelope, a few return bare
//! JSON. Decoding helpers here accept both so call sites stay simple.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::state::role::Role;
use crate::state::session::UserIdentity;

/// Standard response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    pub data: Option<T>,
    pub user: Option<UserRecord>,
    pub token: Option<String>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiEnvelope<T> {
    /// Text of `message`; non-string messages (validation maps) are rendered
    /// as compact JSON.
    pub fn message_text(&self) -> Option<String> {
        self.message.as_ref().map(|m| match m {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Fail with `Rejected` when the server reported `success: false`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` carrying the server message.
    pub fn into_success(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Rejected(
                self.message_text().unwrap_or_else(|| "request failed".to_owned()),
            ))
        }
    }

    /// Extract `data`, failing if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` on `success: false` and `Decode` when `data` is absent.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.into_success()?
            .data
            .ok_or_else(|| ApiError::Decode("missing data".to_owned()))
    }
}

/// Decode `value` as `T`, mapping serde failures to `ApiError::Decode`.
///
/// # Errors
///
/// Returns `ApiError::Decode` if `value` does not match `T`.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a user from either `{ "user": {..} }` or a bare user object.
///
/// # Errors
///
/// Returns `Rejected` for `success: false` bodies and `Decode` for anything
/// else that is not a user.
pub fn decode_user(value: serde_json::Value) -> Result<UserRecord, ApiError> {
    if value.get("user").is_some() || value.get("success").is_some() {
        let envelope: ApiEnvelope<serde_json::Value> = decode(value)?;
        return envelope
            .into_success()?
            .user
            .ok_or_else(|| ApiError::Decode("missing user".to_owned()));
    }
    decode(value)
}

/// Decode a list from a bare array, `{ data: [..] }`, or `{ data: { <key>: [..] } }`.
///
/// # Errors
///
/// Returns `Rejected` for `success: false` bodies and `Decode` when no list
/// is found.
pub fn decode_list<T: DeserializeOwned>(
    value: serde_json::Value,
    key: &str,
) -> Result<Vec<T>, ApiError> {
    if value.is_array() {
        return decode(value);
    }
    let data = decode::<ApiEnvelope<serde_json::Value>>(value)?.into_data()?;
    match data {
        serde_json::Value::Array(_) => decode(data),
        serde_json::Value::Object(mut map) => match map.remove(key) {
            Some(list) => decode(list),
            None => Err(ApiError::Decode(format!("missing {key}"))),
        },
        _ => Err(ApiError::Decode("expected a list".to_owned())),
    }
}

/// Credentials for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginResponse {
    pub identity: UserIdentity,
    pub token: String,
}

/// Payload for `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: Role,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(rename = "studentId", skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

/// User as returned by the API, before its role is checked.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub raw: serde_json::Map<String, serde_json::Value>,
}

impl UserRecord {
    pub fn role_name(&self) -> Option<&str> {
        self.raw.get("role").and_then(serde_json::Value::as_str)
    }
}

impl TryFrom<UserRecord> for UserIdentity {
    type Error = ApiError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        decode(serde_json::Value::Object(record.raw))
    }
}

/// Department option for the signup form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Department {
    pub id: u64,
    pub name: String,
}

/// Document row in search results and recent lists.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentSummary {
    pub id: u64,
    pub title: String,
    pub author: Option<String>,
    pub department: Option<String>,
    #[serde(rename = "type")]
    pub document_type: Option<String>,
    pub date: Option<String>,
    pub year: Option<serde_json::Value>,
    pub downloads: u64,
    pub views: u64,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(rename = "fileSize")]
    pub file_size: Option<String>,
    pub file_format: Option<String>,
}

/// Full document record for the detail page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentDetail {
    #[serde(flatten)]
    pub summary: DocumentSummary,
    pub approval_status: Option<String>,
    pub uploaded_by: Option<String>,
    pub uploaded_at: Option<String>,
}

/// A recommended document with the reason it was suggested.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    #[serde(flatten)]
    pub document: DocumentSummary,
    pub reason: Option<String>,
    pub relevance: Option<u32>,
}

/// Sort orders accepted by the document search endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentSort {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
    MostDownloaded,
    MostViewed,
}

impl DocumentSort {
    pub const ALL: [DocumentSort; 6] = [
        DocumentSort::Newest,
        DocumentSort::Oldest,
        DocumentSort::TitleAsc,
        DocumentSort::TitleDesc,
        DocumentSort::MostDownloaded,
        DocumentSort::MostViewed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentSort::Newest => "date-desc",
            DocumentSort::Oldest => "date-asc",
            DocumentSort::TitleAsc => "title-asc",
            DocumentSort::TitleDesc => "title-desc",
            DocumentSort::MostDownloaded => "downloads-desc",
            DocumentSort::MostViewed => "views-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentSort::Newest => "Newest first",
            DocumentSort::Oldest => "Oldest first",
            DocumentSort::TitleAsc => "Title A-Z",
            DocumentSort::TitleDesc => "Title Z-A",
            DocumentSort::MostDownloaded => "Most downloaded",
            DocumentSort::MostViewed => "Most viewed",
        }
    }

    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

/// Filters for `GET /student/search-documents`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    pub search: String,
    pub document_type: Option<String>,
    pub department_id: Option<u64>,
    pub year: Option<String>,
    pub sort: DocumentSort,
}

impl DocumentQuery {
    /// URL query string without the leading `?`; empty filters are omitted.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search_query", search.to_owned()));
        }
        if let Some(kind) = self.document_type.as_deref().filter(|k| !k.is_empty()) {
            params.push(("document_type", kind.to_owned()));
        }
        if let Some(department) = self.department_id {
            params.push(("department", department.to_string()));
        }
        if let Some(year) = self.year.as_deref().filter(|y| !y.is_empty()) {
            params.push(("year", year.to_owned()));
        }
        if self.sort != DocumentSort::Newest {
            params.push(("sort_by", self.sort.as_str().to_owned()));
        }
        params
            .into_iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Dashboard figures as `(label, value)` pairs, sorted by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleStats {
    pub items: Vec<(String, String)>,
}

impl RoleStats {
    /// Collect the scalar fields of a stats object; nested values are skipped.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        let items = map
            .iter()
            .filter_map(|(key, value)| {
                let rendered = match value {
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::String(s) => s.clone(),
                    _ => return None,
                };
                Some((humanize_key(key), rendered))
            })
            .collect();
        Self { items }
    }
}

/// `total_documents` / `totalDocuments` -> `Total documents`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch == '_' || ch == '-' {
            out.push(' ');
        } else if ch.is_uppercase() && i > 0 {
            out.push(' ');
            out.extend(ch.to_lowercase());
        } else if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}
