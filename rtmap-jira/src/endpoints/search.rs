//! # Jira Search Endpoints
//!
//! JQL search returning the issues the mapper walks. A rejected query (HTTP
//! 400) is surfaced as [`JiraError::Query`] with the server's messages.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{Issue, SearchRequest, SearchResults, Session};

/// Error body Jira returns for a rejected search
#[derive(Debug, Deserialize)]
struct SearchErrorBody {
  #[serde(default, rename = "errorMessages")]
  error_messages: Vec<String>,
}

impl JiraClient {
  /// Run a JQL search and return the matching issues.
  ///
  /// All issue fields are requested so the caller can extract custom field
  /// values without a second round-trip.
  pub async fn search_issues(&self, session: &Session, jql: &str, max_results: u32) -> Result<Vec<Issue>, JiraError> {
    let request = SearchRequest {
      jql: jql.to_string(),
      max_results,
      fields: vec!["*all".to_string()],
    };

    let response = self
      .post_with_session("/rest/api/2/search", session)
      .json(&request)
      .send()
      .await?;

    match response.status() {
      StatusCode::OK => {
        let results = response.json::<SearchResults>().await?;
        debug!(total = results.total, returned = results.issues.len(), "Search complete");
        Ok(results.issues)
      }
      StatusCode::BAD_REQUEST => {
        let message = match response.json::<SearchErrorBody>().await {
          Ok(body) if !body.error_messages.is_empty() => body.error_messages.join("; "),
          _ => "invalid JQL query".to_string(),
        };
        Err(JiraError::Query(message))
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(JiraError::Auth),
      _ => Err(Self::api_error(response).await),
    }
  }
}
