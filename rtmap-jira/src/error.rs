//! # Jira Client Errors
//!
//! Classified failures for the mapping run. Authentication, missing-field,
//! and query failures are fatal; a missing value on a single issue is
//! recoverable and the mapper skips that issue.

use thiserror::Error;

/// Errors returned by [`crate::JiraClient`] operations.
#[derive(Debug, Error)]
pub enum JiraError {
  /// Credentials were rejected by the Jira instance. Fatal, no retry.
  #[error("Authentication failed. Please check your Jira credentials.")]
  Auth,

  /// No custom field with the configured name exists. Fatal.
  #[error("No custom field named '{0}' exists on this Jira instance")]
  FieldNotFound(String),

  /// The JQL query was rejected. Fatal.
  #[error("Search rejected by Jira: {0}")]
  Query(String),

  /// An issue matched the search but carries no value for the field.
  /// The mapper skips the issue with a warning.
  #[error("Issue {issue_key} has no value for field {field_id}")]
  MissingValue { issue_key: String, field_id: String },

  /// Any other non-success response from the Jira API.
  #[error("Unexpected error: HTTP {status} - {message}")]
  Api { status: u16, message: String },

  /// Connection, timeout, or response decoding failure.
  #[error("Failed to communicate with Jira")]
  Transport(#[from] reqwest::Error),
}

impl JiraError {
  /// Whether the failure is tied to one issue rather than the whole run.
  pub fn is_per_issue(&self) -> bool {
    matches!(self, JiraError::MissingValue { .. })
  }
}
