use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::JiraError;

/// Opaque session token returned by login.
///
/// Sent as a `Cookie` header on every subsequent call and released on logout.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
  pub name: String,
  pub value: String,
}

impl Session {
  /// Render the session as a `Cookie` header value.
  pub fn cookie(&self) -> String {
    format!("{}={}", self.name, self.value)
  }
}

/// Response body of a successful session login
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
  pub session: Session,
}

/// Request body for a session login
#[derive(Debug, Serialize)]
pub struct LoginRequest {
  pub username: String,
  pub password: String,
}

/// A field descriptor as returned by the field listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CustomField {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub custom: bool,
}

/// Request body for a JQL search
#[derive(Debug, Serialize)]
pub struct SearchRequest {
  pub jql: String,
  #[serde(rename = "maxResults")]
  pub max_results: u32,
  pub fields: Vec<String>,
}

/// Response body of a JQL search
#[derive(Debug, Deserialize)]
pub struct SearchResults {
  pub issues: Vec<Issue>,
  #[serde(default)]
  pub total: u64,
}

/// Represents a Jira issue returned by search
#[derive(Debug, Deserialize)]
pub struct Issue {
  pub id: String,
  pub key: String,
  #[serde(default)]
  pub fields: HashMap<String, serde_json::Value>,
}

impl Issue {
  /// Returns the first value of the given field on this issue.
  ///
  /// Jira renders single-valued custom fields as a JSON string and
  /// multi-valued ones as an array of strings; either way the first value is
  /// returned. An absent field, a JSON null, or an empty array yields
  /// [`JiraError::MissingValue`].
  pub fn first_field_value(&self, field_id: &str) -> Result<&str, JiraError> {
    let missing = || JiraError::MissingValue {
      issue_key: self.key.clone(),
      field_id: field_id.to_string(),
    };

    let value = self.fields.get(field_id).ok_or_else(missing)?;
    match value {
      serde_json::Value::String(text) => Ok(text.as_str()),
      serde_json::Value::Array(values) => values.first().and_then(|first| first.as_str()).ok_or_else(missing),
      _ => Err(missing()),
    }
  }
}
